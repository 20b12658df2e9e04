use clap::Parser;
use hostprobe::config::{CliConfig, Config};
use hostprobe::input::read_hosts;
use hostprobe::probe::{Prober, probe_all_with_progress};
use hostprobe::reporting::logging;
use hostprobe::ui::{Cli, ProgressReporter, cli_to_config, write_results};

use std::io::{self, IsTerminal};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_hostprobe_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main probing logic extracted from main() for testing
pub async fn run_hostprobe_logic(cli: &Cli) -> hostprobe::Result<i32> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let input_path = cli.input_path();
    let hosts = read_hosts(input_path).inspect_err(|e| {
        logging::log_error(&format!("Could not read hosts from '{input_path}'"), Some(e));
    })?;
    let host_count = hosts.len();
    logging::log_input_info(host_count, input_path);

    let prober = Arc::new(Prober::from_config(&config)?);
    let progress = create_progress_reporter(&cli_config);

    let live_urls = probe_all_with_progress(
        prober,
        hosts,
        config.timeout_duration(),
        config.worker_count(),
        progress.as_ref(),
    )
    .await?;

    if let Some(ref progress) = progress {
        progress.finish_and_clear();
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_results(&mut handle, &live_urls, host_count, config.output_format())?;

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> hostprobe::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI arguments take precedence over the config file
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Progress is only drawn for interactive sessions
pub fn create_progress_reporter(cli_config: &CliConfig) -> Option<ProgressReporter> {
    let show_progress = !cli_config.quiet && !cli_config.no_progress && io::stderr().is_terminal();
    show_progress.then(|| ProgressReporter::new(true))
}
