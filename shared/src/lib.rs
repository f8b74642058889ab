//! Shared utilities and common types for the CheckSMS server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (server, environment, SMS gateway)
//! - The JSON error envelope returned by every endpoint
//! - Utility functions (phone and DNI validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, GatewayConfig, LoggingConfig, ServerConfig};
pub use errors::ErrorResponse;
pub use utils::{phone, validation};
