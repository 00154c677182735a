use clap::Parser;
use env_logger::Env;
use log::{error, info};
use roster::configuration::config::{CliArgs, Config};
use roster::controller::controller_handler::Controller;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default level
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    info!("roster v{}", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();

    let config = Config::load(&args).unwrap_or_else(|e| {
        error!("Unable to load configuration: {}", e);
        std::process::exit(1);
    });

    info!("Configuration loaded successfully");

    let controller = Controller::new(config).await.unwrap_or_else(|e| {
        error!("Unable to create a controller instance: {}, exiting...", e);
        std::process::exit(1);
    });

    if let Err(e) = controller.run().await {
        error!("Error occured in the controller process: {}, exiting...", e);
        std::process::exit(1);
    }
}
