use serde_json::Value;

use crate::{
    error::{Error, ToyyibpayResult},
    request::Method,
};

/// createBill 的结果。
///
/// 创建账单本身不构成收款：必须把付款人重定向到托管付款页，
/// 所以 `is_successful` 恒为 false。
#[derive(Debug)]
pub struct CreateBillResponse {
    bill_code: String,
    redirect_url: String,
}

impl CreateBillResponse {
    /// 解析网关原始响应。响应是一个数组，第一个元素携带 BillCode
    pub fn from_reply(reply: &Value, endpoint: &str) -> ToyyibpayResult<Self> {
        let first = reply
            .as_array()
            .and_then(|items| items.first())
            .ok_or_else(|| {
                error!("unexpected create bill reply: {}", reply);
                Error::MalformedResponse("reply is not a non-empty array".to_owned())
            })?;

        let bill_code = first
            .get("BillCode")
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| Error::MalformedResponse("BillCode missing from reply".to_owned()))?;

        Ok(Self {
            bill_code: bill_code.to_owned(),
            redirect_url: format!("{}{}", endpoint, bill_code),
        })
    }

    pub fn get_bill_code(&self) -> &str {
        &self.bill_code
    }

    /// 付款页地址，直接 GET 跳转，无需附加任何参数
    pub fn get_redirect_url(&self) -> &str {
        &self.redirect_url
    }

    pub fn get_redirect_method(&self) -> Method {
        Method::GET
    }

    /// 恒为 false，付款要等重定向之后才会发生
    pub fn is_successful(&self) -> bool {
        false
    }

    pub fn is_redirect(&self) -> bool {
        !self.bill_code.is_empty() && !self.redirect_url.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.is_redirect()
    }

    pub fn is_cancelled(&self) -> bool {
        false
    }

    /// BillCode 可以直接当作交易引用保存
    pub fn get_transaction_reference(&self) -> &str {
        &self.bill_code
    }

    pub fn get_code(&self) -> &str {
        &self.bill_code
    }

    pub fn get_message(&self) -> &'static str {
        if self.is_redirect() {
            "Bill created successfully. Please redirect customer to payment page."
        } else {
            "Sorry, there was an error creating your bill payment. Please try again later or contact administrator for further assistance."
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{error::Error, request::Method};

    use super::CreateBillResponse;

    const ENDPOINT: &str = "https://dev.toyyibpay.com/";

    #[test]
    fn reply_with_bill_code_requires_redirect() {
        let reply = json!([{"BillCode": "abc123"}]);
        let response = CreateBillResponse::from_reply(&reply, ENDPOINT).unwrap();

        assert_eq!(response.get_bill_code(), "abc123");
        assert_eq!(
            response.get_redirect_url(),
            "https://dev.toyyibpay.com/abc123"
        );
        assert_eq!(response.get_redirect_method(), Method::GET);
        assert!(response.is_redirect());
        assert!(response.is_pending());
        assert!(!response.is_successful());
        assert!(!response.is_cancelled());
    }

    #[test]
    fn empty_reply_is_malformed() {
        for reply in [json!([]), json!({}), json!("ko"), json!(null)] {
            match CreateBillResponse::from_reply(&reply, ENDPOINT) {
                Err(Error::MalformedResponse(_)) => {}
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn missing_bill_code_is_malformed() {
        let reply = json!([{"msg": "KEY-DID-NOT-EXIST"}]);

        match CreateBillResponse::from_reply(&reply, ENDPOINT) {
            Err(Error::MalformedResponse(msg)) => assert!(msg.contains("BillCode")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
