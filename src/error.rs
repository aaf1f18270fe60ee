#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 必填参数缺失或为空
    #[error("the {0} parameter is required")]
    MissingParameter(String),
    /// 参数存在但不符合格式、范围或枚举规则
    #[error("invalid {field} parameter: {reason}")]
    InvalidParameter { field: String, reason: String },
    #[error(transparent)]
    Transport(#[from] ureq::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// 网关返回了无法识别的响应
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(field: &str, reason: &str) -> Self {
        Error::InvalidParameter {
            field: field.to_owned(),
            reason: reason.to_owned(),
        }
    }
}

pub type ToyyibpayResult<T> = std::result::Result<T, Error>;
