use crate::error::{Error, ToyyibpayResult};

/// 账单定价方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSetting {
    /// 固定价格: 1
    FixedPrice,
    /// 由付款人自行填写金额: 2
    OpenPrice,
}

impl Default for PriceSetting {
    fn default() -> Self {
        PriceSetting::FixedPrice
    }
}

impl PriceSetting {
    pub fn code(&self) -> i64 {
        match self {
            PriceSetting::FixedPrice => 1,
            PriceSetting::OpenPrice => 2,
        }
    }

    pub fn from_code(code: i64) -> ToyyibpayResult<Self> {
        match code {
            1 => Ok(PriceSetting::FixedPrice),
            2 => Ok(PriceSetting::OpenPrice),
            _ => Err(Error::invalid(
                "billPriceSetting",
                "must be 1 (Fixed Price) or 2 (Open Price)",
            )),
        }
    }
}
