use std::sync::Arc;

use helios_clock::{SystemClock, TokioTimer};
use helios_gateway::{BtceConfig, BtceConnector};
use helios_runner::{RunnerArgs, cli::USAGE, spawn_event_loggers};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match RunnerArgs::parse(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    info!("Loading configuration from: {}", args.config_path.display());
    let config = BtceConfig::load(&args.config_path)?.with_env_overrides();
    config.validate()?;
    info!("{:?}", config);

    let timer = TokioTimer::new();
    let gateway = BtceConnector::new(&args.pair, &timer, Arc::new(SystemClock::new()), &config)?;
    info!(
        "Connected {} for {} (make fee {}, take fee {})",
        gateway.details.name(),
        args.pair,
        gateway.details.make_fee(),
        gateway.details.take_fee()
    );

    let loggers = spawn_event_loggers(&gateway);

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    for logger in loggers {
        logger.abort();
    }
    drop(gateway);
    drop(timer);
    Ok(())
}
