use crate::error::{Error, ToyyibpayResult};

/// 支付渠道
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChannel {
    /// FPX 网银转账: 0
    Fpx,
    /// 信用卡: 1
    CreditCard,
    /// 电子钱包: 2
    EWallet,
}

impl Default for PaymentChannel {
    fn default() -> Self {
        PaymentChannel::Fpx
    }
}

impl PaymentChannel {
    pub fn code(&self) -> i64 {
        match self {
            PaymentChannel::Fpx => 0,
            PaymentChannel::CreditCard => 1,
            PaymentChannel::EWallet => 2,
        }
    }

    pub fn from_code(code: i64) -> ToyyibpayResult<Self> {
        match code {
            0 => Ok(PaymentChannel::Fpx),
            1 => Ok(PaymentChannel::CreditCard),
            2 => Ok(PaymentChannel::EWallet),
            _ => Err(Error::invalid(
                "billPaymentChannel",
                "must be 0 (FPX), 1 (Credit Card) or 2 (E-Wallet)",
            )),
        }
    }
}
