pub mod config;
pub mod errors;
pub mod logger;
pub mod telemetry;
pub mod tracing;

pub use config::*;
pub use errors::*;
pub use logger::*;
