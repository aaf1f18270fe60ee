use serde_json::json;

use crate::{error::ToyyibpayResult, form::Form, validate};

/// 查询账单交易接口
pub const BILL_TRANSACTIONS_PATH: &str = "index.php/api/getBillTransactions";

pub struct BillTransactionsRequest {
    bill_code: String,
    payment_status: Option<i64>,
}

impl BillTransactionsRequest {
    pub fn new<S: Into<String>>(bill_code: S) -> Self {
        Self {
            bill_code: bill_code.into(),
            payment_status: None,
        }
    }

    /// 按状态码过滤查询结果。
    /// 2 和 4 在语义上都是 pending，但在网关侧是不同的码，这里原样传递
    pub fn with_payment_status(mut self, status: i64) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn get_bill_code(&self) -> &str {
        &self.bill_code
    }

    fn validate(&self) -> ToyyibpayResult<()> {
        validate::require("billCode", &self.bill_code)?;
        validate::bill_code("billCode", &self.bill_code)?;

        if let Some(status) = self.payment_status {
            validate::one_of("billpaymentStatus", status, &[1, 2, 3, 4])?;
        }

        Ok(())
    }

    pub fn to_form(&self) -> ToyyibpayResult<Form> {
        self.validate()?;

        let mut form = Form::new(BILL_TRANSACTIONS_PATH);
        form.add_field("billCode", json!(self.bill_code));

        if let Some(status) = self.payment_status {
            form.add_field("billpaymentStatus", json!(status));
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::Error;

    use super::{BillTransactionsRequest, BILL_TRANSACTIONS_PATH};

    #[test]
    fn builds_payload() {
        let form = BillTransactionsRequest::new("abc123").to_form().unwrap();

        assert_eq!(form.get_api_path(), BILL_TRANSACTIONS_PATH);
        assert_eq!(form.get("billCode"), Some(&json!("abc123")));
        assert_eq!(form.get("billpaymentStatus"), None);
    }

    #[test]
    fn status_filter_is_passed_through() {
        let form = BillTransactionsRequest::new("abc123")
            .with_payment_status(4)
            .to_form()
            .unwrap();

        assert_eq!(form.get("billpaymentStatus"), Some(&json!(4)));
    }

    #[test]
    fn rejects_malformed_bill_code() {
        match BillTransactionsRequest::new("bad code!").to_form() {
            Err(Error::InvalidParameter { field, reason }) => {
                assert_eq!(field, "billCode");
                assert_eq!(reason, "invalid bill code format");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_bill_code() {
        match BillTransactionsRequest::new("").to_form() {
            Err(Error::MissingParameter(field)) => assert_eq!(field, "billCode"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_status_filter() {
        match BillTransactionsRequest::new("abc123")
            .with_payment_status(5)
            .to_form()
        {
            Err(Error::InvalidParameter { field, .. }) => {
                assert_eq!(field, "billpaymentStatus")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
