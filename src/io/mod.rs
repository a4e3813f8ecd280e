use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use anyhow::{Context, Result};
use log::debug;
use crate::config::RadarConfig;
use crate::model::SnrSample;

/// Reads a [`RadarConfig`] from JSON. Missing fields keep their defaults.
pub fn load_config_from_json(path: impl AsRef<Path>) -> Result<RadarConfig> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: RadarConfig = serde_json::from_reader(reader)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!("Loaded radar config from {}", path.display());
    Ok(config)
}

pub fn config_to_json(config: &RadarConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Writes sweep samples as CSV with a `range_m,rcs_sqm,snr_db` header.
pub fn write_snr_sweep_csv<W: Write>(writer: W, samples: &[SnrSample]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for sample in samples {
        wtr.serialize(sample)?;
    }
    wtr.flush()?;
    debug!("Wrote {} sweep samples", samples.len());
    Ok(())
}

pub fn save_snr_sweep_csv(path: impl AsRef<Path>, samples: &[SnrSample]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_snr_sweep_csv(file, samples)
}
