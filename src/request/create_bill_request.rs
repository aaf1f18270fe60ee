use serde_json::json;

use crate::{
    error::{Error, ToyyibpayResult},
    form::Form,
    model::create_bill::CreateBillModel,
    toyyibpay::ToyyibpaySdkConfig,
    util::amount_to_cents,
    validate,
};

/// 创建账单接口
pub const CREATE_BILL_PATH: &str = "index.php/api/createBill";

pub struct CreateBillRequest<'a> {
    config: &'a ToyyibpaySdkConfig,
    model: CreateBillModel,
}

impl<'a> CreateBillRequest<'a> {
    pub fn new(config: &'a ToyyibpaySdkConfig, model: CreateBillModel) -> Self {
        Self { config, model }
    }

    /// 在发出任何网络请求前完成全部校验。
    /// 顺序：必填 -> 邮箱 -> URL -> 金额。枚举类参数由类型本身保证合法
    fn validate(&self) -> ToyyibpayResult<()> {
        validate::require("userSecretKey", self.config.user_secret_key())?;
        validate::require("categoryCode", self.config.category_code())?;
        validate::require("billName", self.model.get_bill_name())?;
        validate::require("billDescription", self.model.get_bill_description())?;

        // 类型里金额无法缺省为 null，0 视为未填
        if self.model.get_bill_amount() == 0.0 {
            return Err(Error::MissingParameter("billAmount".to_owned()));
        }

        validate::require("billReturnUrl", self.model.get_bill_return_url())?;
        validate::require("billCallbackUrl", self.model.get_bill_callback_url())?;
        validate::require(
            "billExternalReferenceNo",
            self.model.get_bill_external_reference_no(),
        )?;
        validate::require("billTo", self.model.get_bill_to())?;
        validate::require("billEmail", self.model.get_bill_email())?;
        validate::require("billPhone", self.model.get_bill_phone())?;

        validate::email("billEmail", self.model.get_bill_email())?;
        validate::url("billReturnUrl", self.model.get_bill_return_url())?;
        validate::url("billCallbackUrl", self.model.get_bill_callback_url())?;
        validate::amount("billAmount", self.model.get_bill_amount())?;

        Ok(())
    }

    /// 构建扁平 payload。金额在这里一次性转换为仙；
    /// 未设置的可选字段不会出现在表单里
    pub fn to_form(&self) -> ToyyibpayResult<Form> {
        self.validate()?;

        let model = &self.model;
        let mut form = Form::new(CREATE_BILL_PATH);

        form.add_field("userSecretKey", json!(self.config.user_secret_key()));
        form.add_field("categoryCode", json!(self.config.category_code()));
        form.add_field("billName", json!(model.get_bill_name()));
        form.add_field("billDescription", json!(model.get_bill_description()));
        form.add_field("billPriceSetting", json!(model.get_price_setting().code()));
        form.add_field("billPayorInfo", json!(model.get_payor_info().code()));
        form.add_field("billAmount", json!(amount_to_cents(model.get_bill_amount())));
        form.add_field("billReturnUrl", json!(model.get_bill_return_url()));
        form.add_field("billCallbackUrl", json!(model.get_bill_callback_url()));
        form.add_field(
            "billExternalReferenceNo",
            json!(model.get_bill_external_reference_no()),
        );
        form.add_field("billTo", json!(model.get_bill_to()));
        form.add_field("billEmail", json!(model.get_bill_email()));
        form.add_field("billPhone", json!(model.get_bill_phone()));
        form.add_field("billSplitPayment", json!(model.get_split_payment().code()));

        if let Some(args) = model.get_split_payment_args() {
            form.add_field("billSplitPaymentArgs", json!(args));
        }

        form.add_field(
            "billPaymentChannel",
            json!(model.get_payment_channel().code()),
        );
        form.add_field(
            "billDisplayMerchant",
            json!(model.get_display_merchant().code()),
        );
        form.add_field(
            "billChargeToCustomer",
            json!(model.get_charge_to_customer().code()),
        );

        if let Some(content_email) = model.get_content_email() {
            form.add_field("billContentEmail", json!(content_email));
        }

        if let Some(additional_field) = model.get_additional_field() {
            form.add_field("billAdditionalField", json!(additional_field.to_wire()?));
        }

        debug!("create bill form: {}", form.url_encoded());

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        error::Error,
        model::{additional_field::AdditionalField, create_bill::CreateBillModel},
        toyyibpay::{ToyyibpaySdkConfig, ToyyibpaySdkConfigBuilder},
    };

    use super::{CreateBillRequest, CREATE_BILL_PATH};

    fn test_config() -> ToyyibpaySdkConfig {
        ToyyibpaySdkConfigBuilder::new("test-secret-key", "test-category")
            .with_sandbox()
            .build()
    }

    fn valid_model() -> CreateBillModel {
        let mut model = CreateBillModel::new();
        model.set_bill_name("Test Bill");
        model.set_bill_description("Test");
        model.set_bill_amount(10.00);
        model.set_bill_return_url("https://x/return");
        model.set_bill_callback_url("https://x/cb");
        model.set_bill_external_reference_no("REF1");
        model.set_bill_to("John");
        model.set_bill_email("john@x.com");
        model.set_bill_phone("0123456789");
        model
    }

    #[test]
    fn builds_payload_with_cents_amount() {
        let config = test_config();
        let form = CreateBillRequest::new(&config, valid_model())
            .to_form()
            .unwrap();

        assert_eq!(form.get_api_path(), CREATE_BILL_PATH);
        assert_eq!(form.get("userSecretKey"), Some(&json!("test-secret-key")));
        assert_eq!(form.get("categoryCode"), Some(&json!("test-category")));
        assert_eq!(form.get("billAmount"), Some(&json!(1000)));
        assert_eq!(form.get("billPriceSetting"), Some(&json!(1)));
        assert_eq!(form.get("billPayorInfo"), Some(&json!(1)));
        assert_eq!(form.get("billSplitPayment"), Some(&json!(0)));
        assert_eq!(form.get("billPaymentChannel"), Some(&json!(0)));
        assert_eq!(form.get("billDisplayMerchant"), Some(&json!(1)));
        assert_eq!(form.get("billChargeToCustomer"), Some(&json!(1)));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let config = test_config();
        let form = CreateBillRequest::new(&config, valid_model())
            .to_form()
            .unwrap();

        assert_eq!(form.get("billSplitPaymentArgs"), None);
        assert_eq!(form.get("billContentEmail"), None);
        assert_eq!(form.get("billAdditionalField"), None);
    }

    #[test]
    fn additional_field_is_serialized() {
        let config = test_config();
        let mut model = valid_model();
        model.set_additional_field(AdditionalField::Structured(json!({"orderId": 7})));

        let form = CreateBillRequest::new(&config, model).to_form().unwrap();

        assert_eq!(
            form.get("billAdditionalField"),
            Some(&json!(r#"{"orderId":7}"#))
        );
    }

    #[test]
    fn missing_email_is_reported_by_name() {
        let config = test_config();
        let mut model = valid_model();
        model.set_bill_email("");

        match CreateBillRequest::new(&config, model).to_form() {
            Err(Error::MissingParameter(field)) => assert_eq!(field, "billEmail"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_amount_is_reported_by_name() {
        let config = test_config();
        let mut model = valid_model();
        model.set_bill_amount(0.0);

        match CreateBillRequest::new(&config, model).to_form() {
            Err(Error::MissingParameter(field)) => assert_eq!(field, "billAmount"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_email_reason() {
        let config = test_config();
        let mut model = valid_model();
        model.set_bill_email("not-an-email");

        match CreateBillRequest::new(&config, model).to_form() {
            Err(Error::InvalidParameter { field, reason }) => {
                assert_eq!(field, "billEmail");
                assert_eq!(reason, "invalid email format");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_return_url_reason() {
        let config = test_config();
        let mut model = valid_model();
        model.set_bill_return_url("not-a-url");

        match CreateBillRequest::new(&config, model).to_form() {
            Err(Error::InvalidParameter { field, reason }) => {
                assert_eq!(field, "billReturnUrl");
                assert_eq!(reason, "invalid URL format");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn negative_amount_reason() {
        let config = test_config();
        let mut model = valid_model();
        model.set_bill_amount(-10.00);

        match CreateBillRequest::new(&config, model).to_form() {
            Err(Error::InvalidParameter { field, reason }) => {
                assert_eq!(field, "billAmount");
                assert_eq!(reason, "amount must be positive");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_secret_key_is_reported_first() {
        let config = ToyyibpaySdkConfigBuilder::new("", "test-category").build();

        match CreateBillRequest::new(&config, valid_model()).to_form() {
            Err(Error::MissingParameter(field)) => assert_eq!(field, "userSecretKey"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
