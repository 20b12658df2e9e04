use crate::config::Config;
use log::{debug, error, info, warn};

/// Log level for the given verbosity flags; `quiet` wins over `verbose`.
pub fn log_level(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = log_level(verbose, quiet);

    // `try_init` so a second call (tests) is harmless
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let workers = config.worker_count();
    let insecure = config.insecure.unwrap_or(false);
    let format = config.output_format();

    info!("Configuration: workers={workers}, timeout={timeout}s, format={format}");
    info!("HTTP: insecure={insecure}");
    if let Some(ref user_agent) = config.user_agent {
        debug!("HTTP: user_agent={user_agent}");
    }
}

/// Log host list information
pub fn log_input_info(host_count: usize, source: &str) {
    info!("Read {host_count} host(s) from {source}");
}

/// Log probing start
pub fn log_probe_start(host_count: usize, workers: usize) {
    let in_flight = workers.min(host_count);
    info!("Probing {host_count} host(s) with up to {in_flight} concurrent probe(s)");
}

/// Log probing completion
pub fn log_probe_complete(host_count: usize, live_count: usize, duration_ms: u128) {
    if live_count == 0 && host_count > 0 {
        warn!("Probe complete: no live URLs among {host_count} host(s) ({duration_ms}ms)");
    } else {
        info!("Probe complete: {live_count} live URL(s) across {host_count} host(s) ({duration_ms}ms)");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
