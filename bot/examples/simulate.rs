use log::info;
use ninth_planet_bot::{run_all, SimulationConfig};
use once_cell::sync::Lazy;

static CONFIG: Lazy<SimulationConfig> = Lazy::new(|| {
    let path = std::env::args_os()
        .nth(1)
        .unwrap_or_else(|| "simulate.json".into());
    match SimulationConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}, using defaults", e);
            SimulationConfig::default()
        }
    }
});

fn main() {
    env_logger::init();
    info!("simulating: {:?}", *CONFIG);
    match run_all(&CONFIG) {
        Ok(tally) => println!(
            "{} missions, {} succeeded, {} failed, success rate {:.1}%",
            CONFIG.missions,
            tally.successes,
            tally.failures,
            100.0 * tally.success_rate()
        ),
        Err(e) => {
            eprintln!("simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}
