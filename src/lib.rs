pub mod config;
pub mod error;
pub mod resume;
pub mod telemetry;
