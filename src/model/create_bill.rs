use super::additional_field::AdditionalField;
use super::charge_to_customer::ChargeToCustomer;
use super::display_merchant::DisplayMerchant;
use super::payment_channel::PaymentChannel;
use super::payor_info::PayorInfo;
use super::price_setting::PriceSetting;
use super::split_payment::SplitPayment;

/// createBill（创建账单）的业务参数。
/// 字段参考官方文档：https://toyyibpay.com/apireference/
#[derive(Debug, Clone, Default)]
pub struct CreateBillModel {
    /// 账单名称，显示在付款页上
    bill_name: String,
    /// 账单描述
    bill_description: String,
    /// 定价方式，默认固定价格
    price_setting: PriceSetting,
    /// 是否要求付款人信息，默认必填
    payor_info: PayorInfo,
    /// 账单金额，单位为令吉。
    /// 构建 payload 时才转换为仙，不要传入已转换的值
    bill_amount: f64,
    /// 付款完成后浏览器跳转回的地址
    bill_return_url: String,
    /// 网关回调通知地址
    bill_callback_url: String,
    /// 商户侧订单号
    bill_external_reference_no: String,
    /// 付款人姓名
    bill_to: String,
    /// 付款人邮箱
    bill_email: String,
    /// 付款人电话
    bill_phone: String,
    /// 分账开关，默认禁用
    split_payment: SplitPayment,
    /// 分账参数，仅在启用分账时有意义
    split_payment_args: Option<String>,
    /// 支付渠道，默认 FPX
    payment_channel: PaymentChannel,
    /// 是否展示商户信息，默认展示
    display_merchant: DisplayMerchant,
    /// 手续费承担方，默认付款人
    charge_to_customer: ChargeToCustomer,
    /// 账单邮件抄送地址
    content_email: Option<String>,
    /// 自定义附加数据
    additional_field: Option<AdditionalField>,
}

impl CreateBillModel {
    pub fn new() -> Self {
        CreateBillModel::default()
    }

    pub fn get_bill_name(&self) -> &str {
        self.bill_name.as_ref()
    }

    pub fn set_bill_name<S: Into<String>>(&mut self, bill_name: S) {
        self.bill_name = bill_name.into();
    }

    pub fn get_bill_description(&self) -> &str {
        self.bill_description.as_ref()
    }

    pub fn set_bill_description<S: Into<String>>(&mut self, bill_description: S) {
        self.bill_description = bill_description.into();
    }

    pub fn get_price_setting(&self) -> PriceSetting {
        self.price_setting
    }

    pub fn set_price_setting(&mut self, price_setting: PriceSetting) {
        self.price_setting = price_setting;
    }

    pub fn get_payor_info(&self) -> PayorInfo {
        self.payor_info
    }

    pub fn set_payor_info(&mut self, payor_info: PayorInfo) {
        self.payor_info = payor_info;
    }

    pub fn get_bill_amount(&self) -> f64 {
        self.bill_amount
    }

    pub fn set_bill_amount(&mut self, bill_amount: f64) {
        self.bill_amount = bill_amount;
    }

    pub fn get_bill_return_url(&self) -> &str {
        self.bill_return_url.as_ref()
    }

    pub fn set_bill_return_url<S: Into<String>>(&mut self, bill_return_url: S) {
        self.bill_return_url = bill_return_url.into();
    }

    pub fn get_bill_callback_url(&self) -> &str {
        self.bill_callback_url.as_ref()
    }

    pub fn set_bill_callback_url<S: Into<String>>(&mut self, bill_callback_url: S) {
        self.bill_callback_url = bill_callback_url.into();
    }

    pub fn get_bill_external_reference_no(&self) -> &str {
        self.bill_external_reference_no.as_ref()
    }

    pub fn set_bill_external_reference_no<S: Into<String>>(&mut self, reference_no: S) {
        self.bill_external_reference_no = reference_no.into();
    }

    pub fn get_bill_to(&self) -> &str {
        self.bill_to.as_ref()
    }

    pub fn set_bill_to<S: Into<String>>(&mut self, bill_to: S) {
        self.bill_to = bill_to.into();
    }

    pub fn get_bill_email(&self) -> &str {
        self.bill_email.as_ref()
    }

    pub fn set_bill_email<S: Into<String>>(&mut self, bill_email: S) {
        self.bill_email = bill_email.into();
    }

    pub fn get_bill_phone(&self) -> &str {
        self.bill_phone.as_ref()
    }

    pub fn set_bill_phone<S: Into<String>>(&mut self, bill_phone: S) {
        self.bill_phone = bill_phone.into();
    }

    pub fn get_split_payment(&self) -> SplitPayment {
        self.split_payment
    }

    pub fn set_split_payment(&mut self, split_payment: SplitPayment) {
        self.split_payment = split_payment;
    }

    pub fn get_split_payment_args(&self) -> Option<&str> {
        self.split_payment_args.as_deref()
    }

    pub fn set_split_payment_args<S: Into<String>>(&mut self, split_payment_args: S) {
        self.split_payment_args = Some(split_payment_args.into());
    }

    pub fn get_payment_channel(&self) -> PaymentChannel {
        self.payment_channel
    }

    pub fn set_payment_channel(&mut self, payment_channel: PaymentChannel) {
        self.payment_channel = payment_channel;
    }

    pub fn get_display_merchant(&self) -> DisplayMerchant {
        self.display_merchant
    }

    pub fn set_display_merchant(&mut self, display_merchant: DisplayMerchant) {
        self.display_merchant = display_merchant;
    }

    pub fn get_charge_to_customer(&self) -> ChargeToCustomer {
        self.charge_to_customer
    }

    pub fn set_charge_to_customer(&mut self, charge_to_customer: ChargeToCustomer) {
        self.charge_to_customer = charge_to_customer;
    }

    pub fn get_content_email(&self) -> Option<&str> {
        self.content_email.as_deref()
    }

    pub fn set_content_email<S: Into<String>>(&mut self, content_email: S) {
        self.content_email = Some(content_email.into());
    }

    pub fn get_additional_field(&self) -> Option<&AdditionalField> {
        self.additional_field.as_ref()
    }

    pub fn set_additional_field(&mut self, additional_field: AdditionalField) {
        self.additional_field = Some(additional_field);
    }
}

#[cfg(test)]
mod tests {
    use crate::model::charge_to_customer::ChargeToCustomer;
    use crate::model::display_merchant::DisplayMerchant;
    use crate::model::payment_channel::PaymentChannel;
    use crate::model::payor_info::PayorInfo;
    use crate::model::price_setting::PriceSetting;
    use crate::model::split_payment::SplitPayment;

    use super::CreateBillModel;

    #[test]
    fn defaults() {
        let model = CreateBillModel::new();

        assert_eq!(model.get_price_setting(), PriceSetting::FixedPrice);
        assert_eq!(model.get_payor_info(), PayorInfo::Required);
        assert_eq!(model.get_split_payment(), SplitPayment::Disabled);
        assert_eq!(model.get_payment_channel(), PaymentChannel::Fpx);
        assert_eq!(model.get_display_merchant(), DisplayMerchant::Show);
        assert_eq!(model.get_charge_to_customer(), ChargeToCustomer::Customer);
        assert_eq!(model.get_split_payment_args(), None);
        assert_eq!(model.get_content_email(), None);
        assert!(model.get_additional_field().is_none());
    }
}
