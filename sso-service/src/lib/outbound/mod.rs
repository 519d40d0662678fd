pub mod crypto;
pub mod repositories;
pub mod telemetry;
