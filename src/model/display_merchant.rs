use crate::error::{Error, ToyyibpayResult};

/// 付款页是否展示商户信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMerchant {
    /// 隐藏: 0
    Hide,
    /// 展示: 1
    Show,
}

impl Default for DisplayMerchant {
    fn default() -> Self {
        DisplayMerchant::Show
    }
}

impl DisplayMerchant {
    pub fn code(&self) -> i64 {
        match self {
            DisplayMerchant::Hide => 0,
            DisplayMerchant::Show => 1,
        }
    }

    pub fn from_code(code: i64) -> ToyyibpayResult<Self> {
        match code {
            0 => Ok(DisplayMerchant::Hide),
            1 => Ok(DisplayMerchant::Show),
            _ => Err(Error::invalid(
                "billDisplayMerchant",
                "must be 0 (Hide) or 1 (Show)",
            )),
        }
    }
}
