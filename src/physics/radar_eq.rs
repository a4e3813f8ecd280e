use std::f64::consts::PI;
use crate::error::{InvalidInputError, Result, require_positive};
use crate::physics::constants::{BOLTZMANN_CONSTANT, SPEED_OF_LIGHT};
use crate::physics::conversions::{db_to_linear, linear_to_db};

/// Receiver thermal noise power `N = k·T·B·F` in watts.
///
/// Bandwidth is taken as `1 / pulse_width_s`, the matched-filter
/// approximation. There is intentionally no separate bandwidth parameter.
pub fn thermal_noise_power(pulse_width_s: f64, noise_figure_db: f64, system_temperature_k: f64) -> Result<f64> {
    let pulse_width_s = require_positive("pulse_width_s", pulse_width_s)?;
    let bandwidth_hz = 1.0 / pulse_width_s;
    let nf_lin = db_to_linear(noise_figure_db);
    Ok(BOLTZMANN_CONSTANT * system_temperature_k * bandwidth_hz * nf_lin)
}

/// SNR in dB from the monostatic radar equation with unity antenna gain.
pub fn snr_from_range(
    target_range_m: f64,
    target_rcs_sqm: f64,
    tx_power_w: f64,
    wavelength_m: f64,
    noise_power_w: f64,
) -> Result<f64> {
    let range = require_positive("target_range_m", target_range_m)?;
    let rcs = require_positive("target_rcs_sqm", target_rcs_sqm)?;
    let range_4 = range.powi(4);
    if !range_4.is_finite() || range_4 == 0.0 {
        return Err(InvalidInputError::new(
            "target_range_m",
            target_range_m,
            "fourth power must be a finite non-zero f64",
        ));
    }

    // SNR = (Pt * lambda^2 * sigma) / ((4pi)^3 * R^4 * N)
    let numerator = tx_power_w * wavelength_m.powi(2) * rcs;
    let denominator = (4.0 * PI).powi(3) * range_4 * noise_power_w;

    linear_to_db(numerator / denominator)
}

/// Range at which the radar equation yields exactly `required_snr_db`.
pub fn max_detection_range(
    required_snr_db: f64,
    target_rcs_sqm: f64,
    tx_power_w: f64,
    wavelength_m: f64,
    noise_power_w: f64,
) -> Result<f64> {
    let rcs = require_positive("target_rcs_sqm", target_rcs_sqm)?;
    let noise = require_positive("noise_power_w", noise_power_w)?;
    let snr_min_lin = db_to_linear(required_snr_db);

    // R = [ (Pt * lambda^2 * sigma) / ((4pi)^3 * N * SNR_min) ] ^ (1/4)
    let numerator = tx_power_w * wavelength_m.powi(2) * rcs;
    let denominator = (4.0 * PI).powi(3) * noise * snr_min_lin;

    Ok((numerator / denominator).powf(0.25))
}

/// Smallest separable range difference, `c·τ/2`.
pub fn range_resolution(pulse_width_s: f64) -> Result<f64> {
    let pulse_width_s = require_positive("pulse_width_s", pulse_width_s)?;
    Ok(SPEED_OF_LIGHT * pulse_width_s / 2.0)
}

/// Farthest range whose echo returns before the next pulse, `c/(2·PRF)`.
pub fn max_unambiguous_range(prf_hz: f64) -> Result<f64> {
    let prf_hz = require_positive("prf_hz", prf_hz)?;
    Ok(SPEED_OF_LIGHT / (2.0 * prf_hz))
}
