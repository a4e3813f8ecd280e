//! The radar link-budget model.
//!
//! [`RadarLinkBudgetModel`] owns a [`RadarConfig`] and derives everything
//! else from it on demand. Nothing is cached, so a model built from an
//! updated config never sees stale values.

use itertools::Itertools;
use serde::Serialize;
use crate::config::RadarConfig;
use crate::error::{InvalidInputError, Result, require_positive};
use crate::physics::conversions::{linear_to_db, wavelength};
use crate::physics::radar_eq;

/// Upper bound on the sample instants materialized for one pulse.
pub const MAX_PULSE_SAMPLES: usize = 10_000_000;

/// One point of an SNR-versus-range curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnrSample {
    pub range_m: f64,
    pub rcs_sqm: f64,
    pub snr_db: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadarLinkBudgetModel {
    config: RadarConfig,
}

impl RadarLinkBudgetModel {
    pub fn new(config: RadarConfig) -> Self {
        Self { config }
    }

    /// Builds a model after checking the config's domain preconditions.
    pub fn validated(config: RadarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn wavelength(&self) -> f64 {
        wavelength(self.config.transmitter.carrier_frequency_hz)
    }

    pub fn pri(&self) -> f64 {
        self.config.transmitter.pri_s()
    }

    /// Whole samples that fit in one pulse.
    pub fn samples_per_pulse(&self) -> usize {
        let tx = &self.config.transmitter;
        let rx = &self.config.receiver;
        (tx.pulse_width_s * rx.sampling_frequency_hz).floor().max(0.0) as usize
    }

    /// Sample instants `i / fs` covering `[0, pulse_width)`.
    pub fn pulse_sample_times(&self) -> Result<Vec<f64>> {
        let pw = require_positive("pulse_width_s", self.config.transmitter.pulse_width_s)?;
        let fs = require_positive("sampling_frequency_hz", self.config.receiver.sampling_frequency_hz)?;
        let count = (pw * fs).ceil();
        if !(count <= MAX_PULSE_SAMPLES as f64) {
            return Err(InvalidInputError::new(
                "samples_per_pulse",
                count,
                "pulse_width_s * sampling_frequency_hz exceeds the sample limit",
            ));
        }
        let dt = 1.0 / fs;
        Ok((0..count as usize)
            .map(|i| i as f64 * dt)
            .take_while(|t| *t < pw)
            .collect())
    }

    pub fn noise_power(&self) -> Result<f64> {
        let tx = &self.config.transmitter;
        let rx = &self.config.receiver;
        radar_eq::thermal_noise_power(tx.pulse_width_s, rx.noise_figure_db, rx.system_temperature_k)
    }

    pub fn noise_power_dbw(&self) -> Result<f64> {
        linear_to_db(self.noise_power()?)
    }

    pub fn snr_db(&self, target_range_m: f64, target_rcs_sqm: f64) -> Result<f64> {
        radar_eq::snr_from_range(
            target_range_m,
            target_rcs_sqm,
            self.config.transmitter.transmit_power_w,
            self.wavelength(),
            self.noise_power()?,
        )
    }

    pub fn default_snr_db(&self) -> Result<f64> {
        let sc = &self.config.scenario;
        self.snr_db(sc.default_target_range_m, sc.default_rcs_sqm)
    }

    pub fn range_resolution(&self) -> Result<f64> {
        radar_eq::range_resolution(self.config.transmitter.pulse_width_s)
    }

    pub fn max_unambiguous_range(&self) -> Result<f64> {
        radar_eq::max_unambiguous_range(self.config.transmitter.prf_hz)
    }

    pub fn max_detection_range(&self, required_snr_db: f64, target_rcs_sqm: f64) -> Result<f64> {
        radar_eq::max_detection_range(
            required_snr_db,
            target_rcs_sqm,
            self.config.transmitter.transmit_power_w,
            self.wavelength(),
            self.noise_power()?,
        )
    }

    pub fn is_range_in_scenario(&self, range_m: f64) -> bool {
        self.config.scenario.contains_range(range_m)
    }

    /// `count` evenly spaced ranges from the scenario minimum to maximum.
    pub fn scenario_range_grid(&self, count: usize) -> Result<Vec<f64>> {
        if count < 2 {
            return Err(InvalidInputError::new("count", count as f64, "must be >= 2"));
        }
        let sc = &self.config.scenario;
        let step = (sc.max_range_m - sc.min_range_m) / (count - 1) as f64;
        Ok((0..count).map(|i| sc.min_range_m + i as f64 * step).collect())
    }

    /// SNR at each range for a fixed RCS. Fails on the first bad range.
    pub fn snr_sweep(&self, ranges_m: &[f64], target_rcs_sqm: f64) -> Result<Vec<SnrSample>> {
        let samples = ranges_m.iter().map(|&range_m| {
            self.snr_db(range_m, target_rcs_sqm).map(|snr_db| SnrSample {
                range_m,
                rcs_sqm: target_rcs_sqm,
                snr_db,
            })
        });
        Itertools::try_collect(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_derived_quantities() {
        let model = RadarLinkBudgetModel::default();
        assert!((model.wavelength() - 0.03).abs() < 1e-15);
        assert!((model.pri() - 1e-3).abs() < 1e-15);
        assert_eq!(model.samples_per_pulse(), 100_000);
        assert!((model.range_resolution().unwrap() - 150.0).abs() < 1e-9);
        assert!((model.max_unambiguous_range().unwrap() - 150_000.0).abs() < 1e-6);
        assert!((model.noise_power_dbw().unwrap() - (-138.977)).abs() < 1e-3);
        assert!((model.default_snr_db().unwrap() - (-32.415)).abs() < 1e-3);
    }

    #[test]
    fn test_pulse_sample_times_span_pulse() {
        let mut cfg = RadarConfig::default();
        cfg.receiver.sampling_frequency_hz = 10e6;
        let times = RadarLinkBudgetModel::new(cfg).pulse_sample_times().unwrap();
        assert_eq!(times.len(), 10);
        assert_eq!(times[0], 0.0);
        assert!(times.iter().all(|t| *t < 1e-6));
    }

    #[test]
    fn test_pulse_sample_times_rejects_negative_sampling_rate() {
        let mut cfg = RadarConfig::default();
        cfg.receiver.sampling_frequency_hz = -1e12;
        let err = RadarLinkBudgetModel::new(cfg).pulse_sample_times().unwrap_err();
        assert_eq!(err.parameter, "sampling_frequency_hz");

        cfg.receiver.sampling_frequency_hz = f64::NAN;
        assert!(RadarLinkBudgetModel::new(cfg).pulse_sample_times().is_err());
    }

    #[test]
    fn test_pulse_sample_times_capped() {
        let mut cfg = RadarConfig::default();
        cfg.receiver.sampling_frequency_hz = 1e20;
        let err = RadarLinkBudgetModel::new(cfg).pulse_sample_times().unwrap_err();
        assert_eq!(err.parameter, "samples_per_pulse");

        cfg.receiver.sampling_frequency_hz = f64::INFINITY;
        assert!(RadarLinkBudgetModel::new(cfg).pulse_sample_times().is_err());
    }

    #[test]
    fn test_reference_pulse_has_one_sample_per_slot() {
        let times = RadarLinkBudgetModel::default().pulse_sample_times().unwrap();
        assert_eq!(times.len(), 100_000);
    }

    #[test]
    fn test_updated_config_is_seen_immediately() {
        let base = RadarLinkBudgetModel::default();
        let mut cfg = *base.config();
        cfg.transmitter.transmit_power_w *= 10.0;
        let boosted = RadarLinkBudgetModel::new(cfg);
        let delta = boosted.default_snr_db().unwrap() - base.default_snr_db().unwrap();
        assert!((delta - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_validated_rejects_bad_config() {
        let mut cfg = RadarConfig::default();
        cfg.transmitter.prf_hz = -1.0;
        assert!(RadarLinkBudgetModel::validated(cfg).is_err());
    }

    #[test]
    fn test_sweep_strictly_decreasing() {
        let model = RadarLinkBudgetModel::default();
        let ranges = model.scenario_range_grid(50).unwrap();
        assert_eq!(ranges.first(), Some(&100.0));
        assert!((ranges[49] - 15000.0).abs() < 1e-9);

        let sweep = model.snr_sweep(&ranges, 10.0).unwrap();
        assert_eq!(sweep.len(), 50);
        assert!(sweep.iter().tuple_windows().all(|(a, b)| a.snr_db > b.snr_db));
    }

    #[test]
    fn test_sweep_propagates_first_error() {
        let model = RadarLinkBudgetModel::default();
        let err = model.snr_sweep(&[1000.0, 0.0, -5.0], 10.0).unwrap_err();
        assert_eq!(err.parameter, "target_range_m");
        assert_eq!(err.value, 0.0);
    }

    #[test]
    fn test_range_grid_needs_two_points() {
        assert!(RadarLinkBudgetModel::default().scenario_range_grid(1).is_err());
    }

    #[test]
    fn test_scenario_membership() {
        let model = RadarLinkBudgetModel::default();
        assert!(model.is_range_in_scenario(100.0));
        assert!(model.is_range_in_scenario(15000.0));
        assert!(!model.is_range_in_scenario(15000.1));
    }
}
