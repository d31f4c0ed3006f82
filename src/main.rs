use anyhow::Result;
use clap::Parser;

use waitlist::{cli::Cli, runtime::Orchestrator, utils::{init_logger, log_error}};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // RUST_LOG still overrides either level
    init_logger(if cli.verbose { "debug" } else { "warn" });

    let orchestrator = Orchestrator::new(cli)?;
    match orchestrator.run().await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log_error("[waitlist]", format!("{:#}", e));
            Err(e)
        }
    }
}
