use clap::Parser;
use eyre::Result;
use log::info;

use retry::cli::Cli;
use retry::config::Config;
use retry::executor::ProcessExecutor;
use retry::logger::Logger;
use retry::runner::Runner;

fn setup_logging() {
    // Diagnostics are opt-in via RUST_LOG so the child's passthrough
    // output stays clean by default.
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = Config::from(&cli);
    info!("starting with {config:?}");

    let logger = Logger::new(config.verbose, config.quiet);
    let mut runner = Runner::new(config, logger, ProcessExecutor);
    runner.run(&cli.args).await?;

    Ok(())
}
