//! Infrastructure adapters and runtime bootstrap.

pub mod console;
pub mod error;
pub mod http;
pub mod telemetry;
