use anyhow::{Context, Result, bail};
use log::{info, warn};

use radar_link_budget::config::RadarConfig;
use radar_link_budget::io::{config_to_json, load_config_from_json, save_snr_sweep_csv};
use radar_link_budget::model::RadarLinkBudgetModel;
use radar_link_budget::report::ConfigSummary;

const SWEEP_POINTS: usize = 150;

const USAGE: &str = "usage: radar_link_budget [CONFIG.json] [--sweep OUT.csv] [--print-config]";

struct Args {
    config_path: Option<String>,
    sweep_path: Option<String>,
    print_config: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config_path: None, sweep_path: None, print_config: false };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sweep" => {
                let path = iter.next().context("--sweep needs an output path")?;
                args.sweep_path = Some(path);
            }
            "--print-config" => args.print_config = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown flag {}\n{}", other, USAGE),
            other => {
                if args.config_path.replace(other.to_string()).is_some() {
                    bail!("only one config file may be given\n{}", USAGE);
                }
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => load_config_from_json(path)?,
        None => {
            info!("No config file given, using reference X-band parameters");
            RadarConfig::default()
        }
    };

    if !config.satisfies_nyquist() {
        warn!(
            "Sampling at {:.3e} Hz is below twice the matched-filter bandwidth ({:.3e} Hz)",
            config.receiver.sampling_frequency_hz,
            2.0 / config.transmitter.pulse_width_s
        );
    }

    let model = RadarLinkBudgetModel::validated(config).context("invalid radar configuration")?;
    println!("{}", ConfigSummary::new(&model));

    if args.print_config {
        // effective config after defaults are filled in
        println!("{}", config_to_json(model.config())?);
    }

    if let Some(path) = &args.sweep_path {
        let ranges = model.scenario_range_grid(SWEEP_POINTS)?;
        let samples = model.snr_sweep(&ranges, model.config().scenario.default_rcs_sqm)?;
        save_snr_sweep_csv(path, &samples)?;
        info!("SNR sweep ({} points) written to {}", samples.len(), path);
    }

    Ok(())
}
