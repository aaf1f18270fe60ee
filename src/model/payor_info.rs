use crate::error::{Error, ToyyibpayResult};

/// 是否要求付款人填写个人信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayorInfo {
    /// 选填: 0
    Optional,
    /// 必填: 1
    Required,
}

impl Default for PayorInfo {
    fn default() -> Self {
        PayorInfo::Required
    }
}

impl PayorInfo {
    pub fn code(&self) -> i64 {
        match self {
            PayorInfo::Optional => 0,
            PayorInfo::Required => 1,
        }
    }

    pub fn from_code(code: i64) -> ToyyibpayResult<Self> {
        match code {
            0 => Ok(PayorInfo::Optional),
            1 => Ok(PayorInfo::Required),
            _ => Err(Error::invalid(
                "billPayorInfo",
                "must be 0 (Optional) or 1 (Required)",
            )),
        }
    }
}
