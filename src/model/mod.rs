pub mod additional_field;
pub mod bill_transaction;
pub mod charge_to_customer;
pub mod create_bill;
pub mod display_merchant;
pub mod payment_channel;
pub mod payor_info;
pub mod price_setting;
pub mod split_payment;
