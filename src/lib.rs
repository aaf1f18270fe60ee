pub mod error;
pub mod form;
pub mod model;
pub mod payment_status;
pub mod request;
pub mod response;
pub mod toyyibpay;
pub mod transport;
pub mod util;
pub mod validate;

#[macro_use]
extern crate log;

use serde_json::{Map, Value};

pub type ParamsMap = Map<String, Value>;
