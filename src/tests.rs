use std::thread;
use itertools::Itertools;
use crate::config::RadarConfig;
use crate::model::RadarLinkBudgetModel;
use crate::physics::conversions::{db_to_linear, linear_to_db, range_to_time_delay, time_delay_to_range};
use crate::physics::radar_eq::{snr_from_range, thermal_noise_power};

#[test]
fn test_reference_scenario_end_to_end() {
    // 10 GHz, 1 us, 1 kW, NF 5 dB, 290 K, 5 km, 10 m^2
    let noise = thermal_noise_power(1e-6, 5.0, 290.0).unwrap();
    let snr = snr_from_range(5000.0, 10.0, 1e3, 3e8 / 10e9, noise).unwrap();

    let model = RadarLinkBudgetModel::default();
    assert_eq!(model.noise_power().unwrap(), noise);
    assert_eq!(model.default_snr_db().unwrap(), snr);
    assert!(snr.is_finite());
}

#[test]
fn test_snr_monotonic_over_wide_range() {
    let model = RadarLinkBudgetModel::default();
    let ranges: Vec<f64> = (1..=200).map(|i| i as f64 * 75.0).collect();
    let snrs: Vec<f64> = ranges.iter().map(|&r| model.snr_db(r, 1.0).unwrap()).collect();
    assert!(snrs.iter().tuple_windows().all(|(a, b)| a > b));
}

#[test]
fn test_doubling_range_costs_twelve_db() {
    let model = RadarLinkBudgetModel::default();
    let expected = 10.0 * 16.0f64.log10();
    for r in [100.0, 750.0, 5000.0, 7500.0] {
        let loss = model.snr_db(r, 10.0).unwrap() - model.snr_db(2.0 * r, 10.0).unwrap();
        assert!((loss - expected).abs() < 1e-9, "range {}: {}", r, loss);
    }
}

#[test]
fn test_conversions_compose() {
    let delay = range_to_time_delay(15000.0).unwrap();
    assert!((delay - 1e-4).abs() < 1e-16);
    assert!((time_delay_to_range(delay).unwrap() - 15000.0).abs() < 1e-9);
    assert!((linear_to_db(db_to_linear(-138.97)).unwrap() + 138.97).abs() < 1e-9);
}

#[test]
fn test_detection_range_within_unambiguous_range() {
    let model = RadarLinkBudgetModel::default();
    let r_det = model.max_detection_range(13.0, 10.0).unwrap();
    assert!(r_det < model.max_unambiguous_range().unwrap());
    assert!(model.is_range_in_scenario(r_det));
}

#[test]
fn test_model_shared_across_threads() {
    let mut cfg = RadarConfig::default();
    cfg.scenario.default_rcs_sqm = 2.5;
    let model = RadarLinkBudgetModel::new(cfg);
    let expected = model.default_snr_db().unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| model.default_snr_db().unwrap())).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
