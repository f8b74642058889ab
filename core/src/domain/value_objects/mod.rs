//! Value objects produced by the gateway dispatcher.

pub mod gateway_outcome;
pub mod response_codes;

pub use gateway_outcome::{DispatchStatus, GatewayOutcome};
pub use response_codes::{
    describe_error, parse_response_code, GENERIC_ERROR_MESSAGE, RESPONSE_CODES,
    UNKNOWN_ERROR_MESSAGE,
};
