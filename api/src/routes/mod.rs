//! Route handlers

pub mod sms;

pub use sms::AppState;
