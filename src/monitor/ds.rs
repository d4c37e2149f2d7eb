use crate::convert::{celsius_to_fahrenheit, lux_to_foot_candle, moisture_to_scale};

/// One cycle's raw sensor values. Immutable once taken; discarded after the
/// publish steps, nothing is retained across cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub lux: f64,
    /// Raw soil sensor units, 200 (very dry) to 2000 (very wet) nominal.
    pub moisture_raw: u16,
    pub temperature_c: f64,
}

/// The converted values in display/publish units: foot-candles, the 10-100
/// moisture scale, and degrees Fahrenheit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub sunlight: f64,
    pub moisture: f64,
    pub temperature: f64,
}

impl Measurements {
    pub fn from_reading(reading: &Reading) -> Self {
        Self {
            sunlight: lux_to_foot_candle(reading.lux),
            moisture: moisture_to_scale(reading.moisture_raw),
            temperature: celsius_to_fahrenheit(reading.temperature_c),
        }
    }
}

/// What a single poll of the loop did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// Interval not yet elapsed; nothing sampled.
    Idle,
    /// Full sample-convert-publish cycle completed.
    Published,
    /// A publish failed; session was reset, remaining channels dropped.
    TransportFault,
    /// A sensor read failed under the `skip` policy; cycle abandoned.
    SensorFault,
}
