pub mod ds;
pub mod sampler;

pub const SAMPLE_INTERVAL_SECS: i64 = 60;
