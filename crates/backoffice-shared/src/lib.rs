//! # Back-office Shared
//! 
//! Shared configuration, telemetry, types and constants for the back-office.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
