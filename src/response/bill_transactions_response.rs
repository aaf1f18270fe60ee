use serde_json::Value;

use crate::{
    error::{Error, ToyyibpayResult},
    model::bill_transaction::BillTransaction,
    payment_status::PaymentStatus,
    request::Method,
    ParamsMap,
};

/// getBillTransactions 的结果：一条交易记录加上派生出的结算状态
#[derive(Debug)]
pub struct BillTransactionsResponse {
    transaction: BillTransaction,
    /// 网关返回的原始记录，供调用方读取未建模的字段
    data: ParamsMap,
    bill_url: String,
}

impl BillTransactionsResponse {
    /// 解析网关原始响应。响应是一个数组，第一个元素是交易记录
    pub fn from_reply(reply: &Value, endpoint: &str, bill_code: &str) -> ToyyibpayResult<Self> {
        let first = reply
            .as_array()
            .and_then(|items| items.first())
            .ok_or_else(|| {
                error!("unexpected bill transactions reply: {}", reply);
                Error::MalformedResponse("reply is not a non-empty array".to_owned())
            })?;

        let data = first
            .as_object()
            .ok_or_else(|| {
                Error::MalformedResponse("transaction record is not an object".to_owned())
            })?
            .clone();

        let transaction = serde_json::from_value(first.clone())?;

        Ok(Self {
            transaction,
            data,
            bill_url: format!("{}{}", endpoint, bill_code),
        })
    }

    pub fn get_transaction(&self) -> &BillTransaction {
        &self.transaction
    }

    pub fn get_data(&self) -> &ParamsMap {
        &self.data
    }

    /// 状态码缺失或无法识别时返回 Unknown，而不是报错，
    /// 调用方据此区分“稍后重查”和终态
    pub fn get_payment_status(&self) -> PaymentStatus {
        match self.transaction.get_payment_status_code() {
            Some(code) => PaymentStatus::from_code(code),
            None => PaymentStatus::Unknown,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.get_payment_status() == PaymentStatus::Successful
    }

    pub fn is_pending(&self) -> bool {
        self.get_payment_status() == PaymentStatus::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.get_payment_status() == PaymentStatus::Unsuccessful
    }

    /// 只要付款尚未确定成功，就把付款人送回付款页
    pub fn is_redirect(&self) -> bool {
        !self.is_successful() && !self.bill_url.is_empty()
    }

    pub fn get_redirect_url(&self) -> &str {
        &self.bill_url
    }

    pub fn get_redirect_method(&self) -> Method {
        Method::GET
    }

    /// 网关开具的发票号
    pub fn get_transaction_id(&self) -> Option<&str> {
        self.transaction.get_invoice_no()
    }

    pub fn get_transaction_reference(&self) -> Option<&str> {
        self.transaction.get_permalink()
    }

    pub fn get_code(&self) -> Option<String> {
        self.transaction
            .get_payment_status_code()
            .map(|code| code.to_string())
    }

    pub fn get_message(&self) -> &'static str {
        match self.transaction.get_payment_status_code() {
            Some(code) => PaymentStatus::from_code(code).description(),
            None => {
                "Bill code is not valid. Please try again later or contact administrator for further assistance."
            }
        }
    }
}
