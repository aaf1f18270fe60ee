use crate::error::{Error, ToyyibpayResult};

/// 手续费由谁承担
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeToCustomer {
    /// 商户承担: 0
    Merchant,
    /// 付款人承担: 1
    Customer,
}

impl Default for ChargeToCustomer {
    fn default() -> Self {
        ChargeToCustomer::Customer
    }
}

impl ChargeToCustomer {
    pub fn code(&self) -> i64 {
        match self {
            ChargeToCustomer::Merchant => 0,
            ChargeToCustomer::Customer => 1,
        }
    }

    pub fn from_code(code: i64) -> ToyyibpayResult<Self> {
        match code {
            0 => Ok(ChargeToCustomer::Merchant),
            1 => Ok(ChargeToCustomer::Customer),
            _ => Err(Error::invalid(
                "billChargeToCustomer",
                "must be 0 (Merchant) or 1 (Customer)",
            )),
        }
    }
}
