use crate::error::{Result, require_non_negative, require_positive};
use crate::physics::constants::SPEED_OF_LIGHT;

/// Two-way propagation delay for a target at `range_m`.
pub fn range_to_time_delay(range_m: f64) -> Result<f64> {
    let range_m = require_non_negative("range_m", range_m)?;
    Ok(2.0 * range_m / SPEED_OF_LIGHT)
}

/// Target range for a two-way delay of `delay_s`.
pub fn time_delay_to_range(delay_s: f64) -> Result<f64> {
    let delay_s = require_non_negative("delay_s", delay_s)?;
    Ok(SPEED_OF_LIGHT * delay_s / 2.0)
}

/// Power ratio from decibels. Negative dB is attenuation; any real is accepted.
pub fn db_to_linear(db_value: f64) -> f64 {
    10.0f64.powf(db_value / 10.0)
}

/// Power ratio in decibels (10·log10, power convention).
pub fn linear_to_db(linear_value: f64) -> Result<f64> {
    let linear_value = require_positive("linear_value", linear_value)?;
    Ok(10.0 * linear_value.log10())
}

/// Free-space wavelength in meters. Caller guarantees `frequency_hz > 0`.
pub fn wavelength(frequency_hz: f64) -> f64 {
    SPEED_OF_LIGHT / frequency_hz
}
