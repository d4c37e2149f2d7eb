//! Unit conversions between raw sensor values and display/publish units.
//! All functions are pure; out-of-range inputs pass through unclamped.

/// One foot-candle is 10.764 lux.
pub const LUX_PER_FOOT_CANDLE: f64 = 10.764;

/// The soil sensor reports raw moisture between 200 (very dry) and 2000
/// (very wet); dividing by 20 maps that onto a 10-100 scale.
pub const MOISTURE_RAW_DIVISOR: f64 = 20.0;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

pub fn lux_to_foot_candle(lux: f64) -> f64 {
    lux / LUX_PER_FOOT_CANDLE
}

pub fn moisture_to_scale(raw: u16) -> f64 {
    f64::from(raw) / MOISTURE_RAW_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_formula() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(22.0), 71.6);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn foot_candle_formula() {
        assert_eq!(lux_to_foot_candle(0.0), 0.0);
        assert_eq!(lux_to_foot_candle(10.764), 1.0);
        assert!((lux_to_foot_candle(500.0) - 46.4511).abs() < 1e-3);
    }

    #[test]
    fn moisture_scale_endpoints() {
        assert_eq!(moisture_to_scale(200), 10.0);
        assert_eq!(moisture_to_scale(1000), 50.0);
        assert_eq!(moisture_to_scale(2000), 100.0);
    }

    #[test]
    fn moisture_scale_unclamped() {
        // Values outside the documented raw range pass through untouched.
        assert_eq!(moisture_to_scale(100), 5.0);
        assert_eq!(moisture_to_scale(4000), 200.0);
    }

    #[test]
    fn converters_are_pure() {
        assert_eq!(celsius_to_fahrenheit(17.3), celsius_to_fahrenheit(17.3));
        assert_eq!(lux_to_foot_candle(321.5), lux_to_foot_candle(321.5));
        assert_eq!(moisture_to_scale(777), moisture_to_scale(777));
    }
}
