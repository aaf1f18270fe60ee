use serde_json::Value;

use crate::error::ToyyibpayResult;

/// 附加在账单上的自定义数据。
///
/// 网关只接受字符串，结构化数据在构建 payload 时序列化为 JSON 字符串。
#[derive(Debug, Clone)]
pub enum AdditionalField {
    Text(String),
    Structured(Value),
}

impl AdditionalField {
    pub fn to_wire(&self) -> ToyyibpayResult<String> {
        match self {
            AdditionalField::Text(text) => Ok(text.clone()),
            AdditionalField::Structured(value) => Ok(serde_json::to_string(value)?),
        }
    }
}
