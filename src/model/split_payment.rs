use crate::error::{Error, ToyyibpayResult};

/// 是否启用分账
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPayment {
    /// 禁用: 0
    Disabled,
    /// 启用: 1。启用时通过 billSplitPaymentArgs 传入分账参数
    Enabled,
}

impl Default for SplitPayment {
    fn default() -> Self {
        SplitPayment::Disabled
    }
}

impl SplitPayment {
    pub fn code(&self) -> i64 {
        match self {
            SplitPayment::Disabled => 0,
            SplitPayment::Enabled => 1,
        }
    }

    pub fn from_code(code: i64) -> ToyyibpayResult<Self> {
        match code {
            0 => Ok(SplitPayment::Disabled),
            1 => Ok(SplitPayment::Enabled),
            _ => Err(Error::invalid(
                "billSplitPayment",
                "must be 0 (Disabled) or 1 (Enabled)",
            )),
        }
    }
}
