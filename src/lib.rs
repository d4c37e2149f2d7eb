pub mod config;
pub mod convert;
pub mod display;
pub mod error;
pub mod monitor;
pub mod sensors;
pub mod telemetry;
pub mod test;
pub mod time;
pub mod utils;
