use std::time::Duration;

use serde_json::Value;

use crate::{
    error::{Error, ToyyibpayResult},
    form::Form,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP 协作者：把表单 POST 到指定 URL 并返回解析后的 JSON。
///
/// 核心层不做任何 I/O，重试、超时都属于 Transport 的实现
pub trait Transport {
    fn submit(&self, url: &str, form: &Form) -> ToyyibpayResult<Value>;
}

/// 基于 ureq 的默认实现
pub struct UreqTransport {
    timeout: Duration,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            user_agent: format!("rust-toyyibpay-sdk/{}", VERSION),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl Transport for UreqTransport {
    fn submit(&self, url: &str, form: &Form) -> ToyyibpayResult<Value> {
        debug!("POST {}", url);

        let resp = ureq::post(url)
            .set("user-agent", &self.user_agent)
            .set("content-type", "application/x-www-form-urlencoded")
            .timeout(self.timeout)
            .send_string(&form.url_encoded())?;

        let body = resp.into_string()?;
        if body.is_empty() {
            return Err(Error::MalformedResponse("empty reply body".to_owned()));
        }

        trace!("reply body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
            error!("reply is not valid JSON: {}", e);
            Error::MalformedResponse(format!("reply is not valid JSON: {}", e))
        })
    }
}
