use rust_toyyibpay_sdk::{
    error::ToyyibpayResult,
    model::create_bill::CreateBillModel,
    request::bill_transactions_request::BillTransactionsRequest,
    toyyibpay::{ToyyibpaySdkConfigBuilder, ToyyibpaySDK},
};

const USER_SECRET_KEY: &str = "xxxx-xxxx-xxxx-xxxx";
const CATEGORY_CODE: &str = "xxxxxxxx";

fn main() -> ToyyibpayResult<()> {
    env_logger::init();

    let config = ToyyibpaySdkConfigBuilder::new(USER_SECRET_KEY, CATEGORY_CODE)
        .with_sandbox()
        .build();
    let sdk = ToyyibpaySDK::new(config);

    let mut model = CreateBillModel::new();
    model.set_bill_name("Test Bill");
    model.set_bill_description("Integration test bill");
    model.set_bill_amount(10.00);
    model.set_bill_return_url("https://example.com/return");
    model.set_bill_callback_url("https://example.com/callback");
    model.set_bill_external_reference_no("REF123");
    model.set_bill_to("John Doe");
    model.set_bill_email("john@example.com");
    model.set_bill_phone("0123456789");

    let response = sdk.create_bill(model)?;
    println!("redirect to: {}", response.get_redirect_url());

    let status = sdk.get_bill_transactions(BillTransactionsRequest::new(
        response.get_bill_code(),
    ))?;
    println!("payment status: {:?}", status.get_payment_status());

    Ok(())
}
