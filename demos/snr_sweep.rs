use radar_link_budget::config::RadarConfig;
use radar_link_budget::model::RadarLinkBudgetModel;

fn main() {
    let mut config = RadarConfig::default();
    config.transmitter.transmit_power_w = 50_000.0;

    let model = RadarLinkBudgetModel::new(config);
    println!("Noise floor: {:.2} dBW", model.noise_power_dbw().unwrap());

    let grid = model.config().simulation.snr_sweep_db.values().unwrap();
    println!("Detection study SNR grid: {:?} dB", grid);

    for rcs in [0.1, 1.0, 10.0] {
        println!("RCS {} m²", rcs);
        for range_km in [0.5, 1.0, 2.0, 5.0, 10.0, 15.0] {
            let snr = model.snr_db(range_km * 1e3, rcs).unwrap();
            println!("  {:>5.1} km: {:>7.2} dB", range_km, snr);
        }
        let r_det = model.max_detection_range(13.0, rcs).unwrap();
        println!("  13 dB detection range: {:.2} km", r_det / 1e3);
    }
}
