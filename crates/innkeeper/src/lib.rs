pub mod config;
pub mod error;
pub mod inquiries;
pub mod rooms;
pub mod storage;
pub mod telemetry;
