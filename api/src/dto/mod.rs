pub mod sms_dto;

pub use cs_shared::errors::ErrorResponse;
pub use sms_dto::*;
