use serde_json::Value;
use urlencoding::encode;

use crate::util::value_to_string;

#[derive(Debug)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) value: Value,
}

/// 提交给网关的扁平表单：按加入顺序保存字段，并记录对应的 API 路径
#[derive(Debug)]
pub struct Form {
    api_path: &'static str,
    fields: Vec<Field>,
}

impl Form {
    pub fn new(api_path: &'static str) -> Self {
        Self {
            api_path,
            fields: vec![],
        }
    }

    pub fn get_api_path(&self) -> &str {
        self.api_path
    }

    pub fn get_fields(&self) -> &[Field] {
        &self.fields
    }

    /// 增加字段
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: Value) {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
    }

    /// 按名称取字段值，仅测试和调试用
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// 编码为 application/x-www-form-urlencoded 请求体
    pub fn url_encoded(&self) -> String {
        self.fields
            .iter()
            .map(|field| {
                format!(
                    "{}={}",
                    encode(&field.name),
                    encode(&value_to_string(&field.value))
                )
            })
            .collect::<Vec<String>>()
            .join("&")
    }
}
