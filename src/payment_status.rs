/// 账单结算状态，由网关返回的 `billpaymentStatus` 数字码导出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// 1：交易成功，终态
    Successful,
    /// 2 或 4：交易未确认，应稍后重新查询
    Pending,
    /// 3：交易失败，终态
    Unsuccessful,
    /// 其他状态码。按未结算处理
    Unknown,
}

impl PaymentStatus {
    /// 网关对 2 和 4 未作区分，这里同样合并为 Pending
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PaymentStatus::Successful,
            2 | 4 => PaymentStatus::Pending,
            3 => PaymentStatus::Unsuccessful,
            _ => PaymentStatus::Unknown,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Successful | PaymentStatus::Unsuccessful)
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaymentStatus::Successful => "Successful transaction",
            PaymentStatus::Pending => "Pending transaction",
            PaymentStatus::Unsuccessful => "Unsuccessful transaction",
            PaymentStatus::Unknown => {
                "Unknown payment status. Please contact administrator for assistance."
            }
        }
    }
}
