use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    app::{load_config, load_config_from, Config},
    cli::{check_email, init, list_members, show_count, show_status, show_version, Cli, Commands},
    runtime::NonInteractiveRunner,
    session::{Phase, SubmissionController},
    storage::{FileKvStore, KeyValueStore, MemoryKvStore},
    tui::{run_ui, App, Variant},
    utils::{log_debug, log_info, log_warn},
    waitlist::WaitlistStore,
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let mut config = if let Some(config_path) = &cli.config {
            load_config_from(config_path)?
        } else {
            match load_config() {
                Ok(cfg) => cfg,
                Err(e) => {
                    log_warn("[config]", format!("Failed to load config: {}. Using defaults.", e));
                    Config::default()
                }
            }
        };

        // CLI flags win over files and environment
        if let Some(data_dir) = &cli.data_dir {
            config.storage.data_dir = Some(data_dir.clone());
        }
        if let Some(variant) = &cli.variant {
            config.ui.variant = variant.clone();
        }

        Ok(Self { cli, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Storage file path, `None` when running in memory
    pub fn storage_path(&self) -> Result<Option<PathBuf>> {
        if self.cli.in_memory {
            Ok(None)
        } else {
            Ok(Some(self.config.storage.storage_path()?))
        }
    }

    /// Open the waitlist on the configured backend
    pub fn open_store(&self) -> Result<WaitlistStore> {
        let backend: Box<dyn KeyValueStore> = match self.storage_path()? {
            Some(path) => {
                log_debug(format!("Using storage file {}", path.display()));
                Box::new(FileKvStore::open(path))
            }
            None => {
                log_debug("Using in-memory storage");
                Box::new(MemoryKvStore::new())
            }
        };
        Ok(WaitlistStore::open(backend))
    }

    pub fn variant(&self) -> Result<Variant> {
        Ok(self.config.ui.variant.parse()?)
    }

    /// Run the orchestrator. Returns `false` when the command failed in a way
    /// the user should see in the exit code.
    pub async fn run(self) -> Result<bool> {
        let command = self.cli.command.clone().unwrap_or(Commands::Ui);

        match command {
            Commands::Init => init(),
            Commands::Version => show_version(),
            Commands::Count => show_count(&self.open_store()?),
            Commands::List => list_members(&self.open_store()?),
            Commands::Check { email } => check_email(&self.open_store()?, &email),
            Commands::Status => {
                let storage_path = self.storage_path()?;
                show_status(
                    &self.config,
                    self.cli.config.as_deref(),
                    storage_path.as_deref(),
                    &self.open_store()?,
                )
            }
            Commands::Join {
                email,
                output_format,
                no_delay,
            } => {
                let latency = if no_delay {
                    Duration::ZERO
                } else {
                    self.config.submission.latency()
                };
                let mut runner = NonInteractiveRunner::new(self.open_store()?, latency, self.variant()?);
                let report = runner.join(&email).await;
                log_info("[join]", format!("{} -> {}", report.email, report.outcome));
                println!("{}", runner.format_report(&report, output_format));
                Ok(report.is_success())
            }
            Commands::Ui => self.run_interactive(),
        }
    }

    fn run_interactive(&self) -> Result<bool> {
        let variant = self.variant()?;
        let controller =
            SubmissionController::new(self.open_store()?, self.config.submission.latency());

        let app = run_ui(App::new(controller, variant))?;

        if app.controller.phase() == Phase::Done {
            println!("{}", app.variant.wording().confirmation.green());
        }
        Ok(true)
    }
}
