use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::util::{value_to_i64, value_to_string};

/// getBillTransactions 返回的单条结算记录。
/// 网关可能省略任意字段，全部按可缺失处理
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillTransaction {
    #[serde(rename = "billCode", default)]
    bill_code: Option<String>,
    #[serde(rename = "billpaymentStatus", default, deserialize_with = "lenient_i64")]
    payment_status_code: Option<i64>,
    #[serde(rename = "billpaymentInvoiceNo", default)]
    invoice_no: Option<String>,
    #[serde(rename = "billAmount", default, deserialize_with = "lenient_string")]
    amount: Option<String>,
    #[serde(rename = "billpaymentDate", default)]
    payment_date: Option<String>,
    #[serde(rename = "billTo", default)]
    payer_name: Option<String>,
    #[serde(rename = "billEmail", default)]
    payer_email: Option<String>,
    #[serde(rename = "billPermalink", default)]
    permalink: Option<String>,
}

/// 状态码可能是数字，也可能是数字字符串
fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_string))
}

impl BillTransaction {
    pub fn get_bill_code(&self) -> Option<&str> {
        self.bill_code.as_deref()
    }

    pub fn get_payment_status_code(&self) -> Option<i64> {
        self.payment_status_code
    }

    pub fn get_invoice_no(&self) -> Option<&str> {
        self.invoice_no.as_deref()
    }

    pub fn get_amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn get_payment_date(&self) -> Option<&str> {
        self.payment_date.as_deref()
    }

    pub fn get_payer_name(&self) -> Option<&str> {
        self.payer_name.as_deref()
    }

    pub fn get_payer_email(&self) -> Option<&str> {
        self.payer_email.as_deref()
    }

    pub fn get_permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }
}
