use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "waitlist")]
#[command(version)]
#[command(about = "Join the waitlist: validates, deduplicates and stores email signups", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the signup storage file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Visual variant (midnight, paper, aurora, terminal)
    #[arg(long)]
    pub variant: Option<String>,

    /// Keep signups in memory only; nothing is written to disk
    #[arg(long)]
    pub in_memory: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive signup form (default)
    Ui,
    /// Submit one email address
    Join {
        /// Email address to add
        email: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output_format: OutputFormat,

        /// Skip the simulated round-trip delay
        #[arg(long)]
        no_delay: bool,
    },
    /// Show how many people are on the waitlist
    Count,
    /// Check whether an email is already on the waitlist
    Check {
        /// Email address to look up
        email: String,
    },
    /// List enrolled emails in signup order
    List,
    /// Initialize configuration
    Init,
    /// Show configuration and storage status
    Status,
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_join() {
        let cli = Cli::try_parse_from([
            "waitlist",
            "--in-memory",
            "join",
            "a@example.com",
            "--output-format",
            "json",
            "--no-delay",
        ])
        .unwrap();

        assert!(cli.in_memory);
        match cli.command {
            Some(Commands::Join {
                email,
                output_format,
                no_delay,
            }) => {
                assert_eq!(email, "a@example.com");
                assert_eq!(output_format, OutputFormat::Json);
                assert!(no_delay);
            }
            other => panic!("Expected join, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_ui() {
        let cli = Cli::try_parse_from(["waitlist", "--variant", "paper"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.variant.as_deref(), Some("paper"));
    }
}
