use std::fmt;

/// Error types for hostprobe operations
#[derive(Debug)]
pub enum HostProbeError {
    /// IO error (reading the host list, writing output)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error (building the client)
    Http(reqwest::Error),

    /// A single request failed before a status code was received
    Transport(String),

    /// The bounded worker pool could not run or finish a probe task
    WorkerPool(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for HostProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostProbeError::Io(err) => write!(f, "IO error: {err}"),
            HostProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            HostProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            HostProbeError::Transport(msg) => write!(f, "Transport error: {msg}"),
            HostProbeError::WorkerPool(msg) => write!(f, "Worker pool error: {msg}"),
            HostProbeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            HostProbeError::Json(err) => write!(f, "JSON error: {err}"),
            HostProbeError::FileNotFound(path) => write!(f, "File not found: {path}"),
            HostProbeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for HostProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostProbeError::Io(err) => Some(err),
            HostProbeError::Http(err) => Some(err),
            HostProbeError::TomlParsing(err) => Some(err),
            HostProbeError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HostProbeError {
    fn from(err: std::io::Error) -> Self {
        HostProbeError::Io(err)
    }
}

impl From<reqwest::Error> for HostProbeError {
    fn from(err: reqwest::Error) -> Self {
        HostProbeError::Http(err)
    }
}

impl From<toml::de::Error> for HostProbeError {
    fn from(err: toml::de::Error) -> Self {
        HostProbeError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for HostProbeError {
    fn from(err: serde_json::Error) -> Self {
        HostProbeError::Json(err)
    }
}

impl From<tokio::task::JoinError> for HostProbeError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            HostProbeError::WorkerPool(format!("probe task panicked: {err}"))
        } else {
            HostProbeError::WorkerPool(format!("probe task was cancelled: {err}"))
        }
    }
}

impl From<tokio::sync::AcquireError> for HostProbeError {
    fn from(err: tokio::sync::AcquireError) -> Self {
        HostProbeError::WorkerPool(format!("could not acquire a worker slot: {err}"))
    }
}

/// Type alias for Results using HostProbeError
pub type Result<T> = std::result::Result<T, HostProbeError>;
