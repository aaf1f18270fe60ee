use std::time::Duration;

use serde_json::Value;

use crate::{
    error::ToyyibpayResult,
    form::Form,
    model::create_bill::CreateBillModel,
    request::{
        bill_transactions_request::BillTransactionsRequest,
        create_bill_request::CreateBillRequest,
    },
    response::{
        bill_transactions_response::BillTransactionsResponse,
        create_bill_response::CreateBillResponse,
    },
    transport::{Transport, UreqTransport},
};

/// 生产环境地址
pub const PRODUCTION_ENDPOINT: &str = "https://toyyibpay.com/";

/// 沙箱环境地址
pub const SANDBOX_ENDPOINT: &str = "https://dev.toyyibpay.com/";

/// 网关展示名称
pub const GATEWAY_NAME: &str = "toyyibPay";

/// ToyyibpaySdkConfig SDK 配置
#[derive(Debug)]
pub struct ToyyibpaySdkConfig {
    /// 商户密钥，在 toyyibPay 后台获取
    user_secret_key: String,
    /// 账单所属的分类码
    category_code: String,
    /// 是否使用沙箱环境
    sandbox: bool,
    timeout: Duration,
}

impl ToyyibpaySdkConfig {
    pub fn user_secret_key(&self) -> &str {
        &self.user_secret_key
    }

    pub fn category_code(&self) -> &str {
        &self.category_code
    }

    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 当前模式对应的基础地址。
    /// 重定向地址就是基础地址直接拼上 BillCode
    pub fn endpoint(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_ENDPOINT
        } else {
            PRODUCTION_ENDPOINT
        }
    }
}

pub struct ToyyibpaySdkConfigBuilder {
    user_secret_key: String,
    category_code: String,
    sandbox: bool,
    timeout: Duration,
}

impl ToyyibpaySdkConfigBuilder {
    pub fn new<S: Into<String>>(user_secret_key: S, category_code: S) -> Self {
        ToyyibpaySdkConfigBuilder {
            user_secret_key: user_secret_key.into(),
            category_code: category_code.into(),
            sandbox: false,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_sandbox(mut self) -> Self {
        self.sandbox = true;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> ToyyibpaySdkConfig {
        ToyyibpaySdkConfig {
            user_secret_key: self.user_secret_key,
            category_code: self.category_code,
            sandbox: self.sandbox,
            timeout: self.timeout,
        }
    }
}

pub struct ToyyibpaySDK {
    config: ToyyibpaySdkConfig,
    transport: Box<dyn Transport>,
}

impl ToyyibpaySDK {
    pub fn new(config: ToyyibpaySdkConfig) -> Self {
        let transport = UreqTransport::new(config.timeout());

        Self {
            config,
            transport: Box::new(transport),
        }
    }

    /// 替换默认的 HTTP 实现，测试或自定义重试策略时使用
    pub fn with_transport(config: ToyyibpaySdkConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn name(&self) -> &'static str {
        GATEWAY_NAME
    }

    pub fn config(&self) -> &ToyyibpaySdkConfig {
        &self.config
    }

    /// 创建账单，返回付款人需要跳转的付款页地址。
    /// 校验失败时不会发出网络请求
    pub fn create_bill(&self, model: CreateBillModel) -> ToyyibpayResult<CreateBillResponse> {
        let request = CreateBillRequest::new(&self.config, model);
        let form = request.to_form()?;

        let reply = self.submit(&form)?;

        CreateBillResponse::from_reply(&reply, self.config.endpoint())
    }

    /// 查询已创建账单的结算状态
    pub fn get_bill_transactions(
        &self,
        request: BillTransactionsRequest,
    ) -> ToyyibpayResult<BillTransactionsResponse> {
        let form = request.to_form()?;

        let reply = self.submit(&form)?;

        BillTransactionsResponse::from_reply(
            &reply,
            self.config.endpoint(),
            request.get_bill_code(),
        )
    }

    fn submit(&self, form: &Form) -> ToyyibpayResult<Value> {
        let url = format!("{}{}", self.config.endpoint(), form.get_api_path());

        self.transport.submit(&url, form)
    }
}
