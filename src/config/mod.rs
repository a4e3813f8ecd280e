//! Immutable radar configuration.
//!
//! Every value is fixed once a [`RadarConfig`] is built. Derived
//! quantities live in [`crate::model`] and are recomputed on each call.

use serde::{Deserialize, Serialize};
use crate::error::{InvalidInputError, Result, require_non_negative, require_positive};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransmitterConfig {
    pub carrier_frequency_hz: f64,
    pub pulse_width_s: f64,
    pub prf_hz: f64,
    pub transmit_power_w: f64,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            carrier_frequency_hz: 10e9, // X-band
            pulse_width_s: 1e-6,
            prf_hz: 1000.0,
            transmit_power_w: 1e3,
        }
    }
}

impl TransmitterConfig {
    /// Pulse repetition interval, `1 / PRF`.
    pub fn pri_s(&self) -> f64 {
        1.0 / self.prf_hz
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverConfig {
    pub sampling_frequency_hz: f64,
    pub noise_figure_db: f64,
    pub system_temperature_k: f64,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            sampling_frequency_hz: 100e9,
            noise_figure_db: 5.0,
            system_temperature_k: 290.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalProcessingConfig {
    /// Normalized detection threshold in `[0, 1]`.
    pub detection_threshold: f64,
}

impl Default for SignalProcessingConfig {
    fn default() -> Self {
        Self { detection_threshold: 0.5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub default_target_range_m: f64,
    pub min_range_m: f64,
    pub max_range_m: f64,
    pub default_rcs_sqm: f64,
    pub default_velocity_mps: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            default_target_range_m: 5000.0,
            min_range_m: 100.0,
            max_range_m: 15000.0,
            default_rcs_sqm: 10.0,
            default_velocity_mps: 100.0,
        }
    }
}

impl ScenarioConfig {
    pub fn contains_range(&self, range_m: f64) -> bool {
        range_m >= self.min_range_m && range_m <= self.max_range_m
    }
}

/// Half-open SNR grid `[start, stop)` with a fixed step, in dB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnrSweep {
    pub start_db: f64,
    pub stop_db: f64,
    pub step_db: f64,
}

impl Default for SnrSweep {
    fn default() -> Self {
        Self { start_db: -10.0, stop_db: 20.0, step_db: 2.0 }
    }
}

/// Upper bound on the number of points an [`SnrSweep`] may expand to.
pub const MAX_SWEEP_POINTS: usize = 100_000;

impl SnrSweep {
    /// Expands the grid. An empty interval yields no points.
    pub fn values(&self) -> Result<Vec<f64>> {
        if !self.start_db.is_finite() {
            return Err(InvalidInputError::new("snr_sweep_db.start_db", self.start_db, "must be finite"));
        }
        if !self.stop_db.is_finite() {
            return Err(InvalidInputError::new("snr_sweep_db.stop_db", self.stop_db, "must be finite"));
        }
        require_positive("snr_sweep_db.step_db", self.step_db)?;
        if self.stop_db <= self.start_db {
            return Ok(Vec::new());
        }
        let count = ((self.stop_db - self.start_db) / self.step_db).ceil();
        if !(count <= MAX_SWEEP_POINTS as f64) {
            return Err(InvalidInputError::new(
                "snr_sweep_db.step_db",
                self.step_db,
                "too small for the sweep point limit",
            ));
        }
        Ok((0..count as usize).map(|i| self.start_db + i as f64 * self.step_db).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub monte_carlo_trials: u32,
    pub snr_sweep_db: SnrSweep,
    pub target_false_alarm_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            monte_carlo_trials: 1000,
            snr_sweep_db: SnrSweep::default(),
            target_false_alarm_rate: 1e-6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClutterConfig {
    pub clutter_to_noise_ratio_db: f64,
    /// 0 is white, 1 is fully correlated.
    pub clutter_correlation: f64,
}

impl Default for ClutterConfig {
    fn default() -> Self {
        Self { clutter_to_noise_ratio_db: 20.0, clutter_correlation: 0.8 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub transmitter: TransmitterConfig,
    pub receiver: ReceiverConfig,
    pub signal_processing: SignalProcessingConfig,
    pub scenario: ScenarioConfig,
    pub simulation: SimulationConfig,
    pub clutter: ClutterConfig,
}

impl RadarConfig {
    /// Checks every domain precondition and reports the first violation.
    pub fn validate(&self) -> Result<()> {
        let tx = &self.transmitter;
        require_positive("carrier_frequency_hz", tx.carrier_frequency_hz)?;
        require_positive("pulse_width_s", tx.pulse_width_s)?;
        require_positive("prf_hz", tx.prf_hz)?;
        require_positive("transmit_power_w", tx.transmit_power_w)?;

        let rx = &self.receiver;
        require_positive("sampling_frequency_hz", rx.sampling_frequency_hz)?;
        require_positive("system_temperature_k", rx.system_temperature_k)?;

        let sc = &self.scenario;
        require_positive("min_range_m", sc.min_range_m)?;
        require_positive("max_range_m", sc.max_range_m)?;
        require_positive("default_rcs_sqm", sc.default_rcs_sqm)?;
        require_non_negative("default_velocity_mps", sc.default_velocity_mps)?;
        if sc.max_range_m < sc.min_range_m {
            return Err(InvalidInputError::new("max_range_m", sc.max_range_m, "must be >= min_range_m"));
        }
        if !sc.contains_range(sc.default_target_range_m) {
            return Err(InvalidInputError::new(
                "default_target_range_m",
                sc.default_target_range_m,
                "must lie within [min_range_m, max_range_m]",
            ));
        }

        let pfa = self.simulation.target_false_alarm_rate;
        if !(pfa > 0.0 && pfa < 1.0) {
            return Err(InvalidInputError::new("target_false_alarm_rate", pfa, "must lie within (0, 1)"));
        }
        self.simulation.snr_sweep_db.values()?;

        let rho = self.clutter.clutter_correlation;
        if !(0.0..=1.0).contains(&rho) {
            return Err(InvalidInputError::new("clutter_correlation", rho, "must lie within [0, 1]"));
        }
        Ok(())
    }

    /// Whether sampling covers twice the matched-filter bandwidth.
    /// Assumed by downstream processing, never enforced.
    pub fn satisfies_nyquist(&self) -> bool {
        self.receiver.sampling_frequency_hz >= 2.0 / self.transmitter.pulse_width_s
    }
}
