/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the defaults and literal values shared by the
/// prober, the scheduler and the CLI.
/// Output format constants
pub mod output_formats {
    /// Text output format - one live URL per line
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// First status code that marks a URL as dead (4xx and 5xx are rejected)
    pub const DEAD_THRESHOLD: u16 = 400;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 3;
    /// Maximum accepted timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Default number of hosts probed at the same time
    pub const WORKERS: usize = 10;
    /// Upper bound on the worker count accepted from config or CLI
    pub const MAX_WORKERS: usize = 10_000;
    /// Name of the config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".hostprobe.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Input path meaning "read hosts from stdin"
    pub const STDIN_PATH: &str = "-";
}
