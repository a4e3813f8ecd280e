//! Human-readable configuration summary.
//!
//! Pure presentation: every number comes from [`RadarLinkBudgetModel`].

use std::fmt;
use crate::error::Result;
use crate::model::RadarLinkBudgetModel;

const RULE_WIDTH: usize = 70;

pub struct ConfigSummary<'a> {
    model: &'a RadarLinkBudgetModel,
}

impl<'a> ConfigSummary<'a> {
    pub fn new(model: &'a RadarLinkBudgetModel) -> Self {
        Self { model }
    }
}

/// Formats a fallible quantity, or `n/a` when its inputs are out of domain.
fn scaled(value: Result<f64>, scale: f64, precision: usize) -> String {
    match value {
        Ok(v) => format!("{:.*}", precision, v * scale),
        Err(_) => "n/a".to_string(),
    }
}

impl fmt::Display for ConfigSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cfg = self.model.config();
        let tx = &cfg.transmitter;
        let rx = &cfg.receiver;
        let sc = &cfg.scenario;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "RADAR SYSTEM CONFIGURATION")?;
        writeln!(f, "{}", rule)?;

        writeln!(f, "\nTRANSMITTER:")?;
        writeln!(f, "  carrier frequency: {:.1} GHz", tx.carrier_frequency_hz / 1e9)?;
        writeln!(f, "  pulse width: {:.1} μs", tx.pulse_width_s * 1e6)?;
        writeln!(f, "  PRF: {} Hz", tx.prf_hz)?;
        writeln!(f, "  transmit power: {:.1} kW", tx.transmit_power_w / 1e3)?;

        writeln!(f, "\nRECEIVER:")?;
        writeln!(f, "  sampling frequency: {:.1} GHz", rx.sampling_frequency_hz / 1e9)?;
        writeln!(f, "  noise figure: {} dB", rx.noise_figure_db)?;
        writeln!(f, "  thermal noise power: {} dBW", scaled(self.model.noise_power_dbw(), 1.0, 1))?;

        writeln!(f, "\nSCENARIO:")?;
        writeln!(f, "  max range: {:.1} km", sc.max_range_m / 1e3)?;
        writeln!(f, "  default target range: {:.1} km", sc.default_target_range_m / 1e3)?;
        writeln!(f, "  default RCS: {} m²", sc.default_rcs_sqm)?;

        writeln!(f, "\nPERFORMANCE:")?;
        writeln!(f, "  wavelength: {:.2} cm", self.model.wavelength() * 100.0)?;
        writeln!(f, "  range resolution: {} m", scaled(self.model.range_resolution(), 1.0, 1))?;
        writeln!(f, "  max unambiguous range: {} km", scaled(self.model.max_unambiguous_range(), 1e-3, 1))?;
        writeln!(f, "  SNR at default range: {} dB", scaled(self.model.default_snr_db(), 1.0, 1))?;

        write!(f, "{}", rule)
    }
}
