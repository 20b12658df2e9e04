// Command-line interface definitions and parsing for hostprobe

use crate::config::CliConfig;
use crate::core::constants::{defaults, output_formats};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with one host per line ('-' or omitted reads stdin)
    pub input: Option<String>,

    // Core Options
    /// Timeout per request in seconds (default: 3)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Number of hosts probed concurrently (default: 10)
    #[arg(
        short = 'w',
        long,
        value_name = "COUNT",
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "Core Options"
    )]
    pub workers: Option<u64>,

    // Output & Verbosity
    /// Suppress progress output and logging
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

impl Cli {
    /// Input path, with stdin as the fallback
    pub fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(defaults::STDIN_PATH)
    }
}

/// Convert parsed arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        workers: cli.workers.map(|w| w as usize),
        user_agent: cli.user_agent.clone(),
        insecure: cli.insecure,
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
