use crate::core::constants::{defaults, output_formats, timeouts};
use crate::core::error::{HostProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Timeout in seconds for each HTTP request
    pub timeout: Option<u64>,

    /// Number of hosts probed concurrently
    pub workers: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Accept invalid TLS certificates
    pub insecure: Option<bool>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            workers: Some(defaults::WORKERS),
            user_agent: None,
            insecure: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HostProbeError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for a config file in `dir` and up to three of its parents,
    /// falling back to defaults.
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut current = dir.to_path_buf();
        for _ in 0..=defaults::CONFIG_SEARCH_DEPTH {
            let candidate = current.join(defaults::CONFIG_FILE_NAME);
            if candidate.is_file() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return config,
                    Err(e) => log::warn!(
                        "Ignoring config file '{}': {e}",
                        candidate.display()
                    ),
                }
            }
            current = current.join("..");
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(workers) = cli_config.workers {
            self.workers = Some(workers);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.insecure {
            self.insecure = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Worker bound to use for a run
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or(defaults::WORKERS)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN_TIMEOUT_SECONDS {
                return Err(HostProbeError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(HostProbeError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(HostProbeError::Config(
                    "Worker count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if workers > defaults::MAX_WORKERS {
                return Err(HostProbeError::Config(format!(
                    "Worker count of {workers} is extremely high and may exhaust file descriptors. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(HostProbeError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,
    pub workers: Option<usize>,
    pub user_agent: Option<String>,
    pub insecure: bool,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub no_progress: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timeout, Some(3));
        assert_eq!(config.workers, Some(10));
        assert_eq!(config.insecure, Some(false));
        assert_eq!(config.output_format(), "text");
        assert_eq!(config.timeout_duration(), Duration::from_secs(3));
        assert_eq!(config.worker_count(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        file.write_all(
            b"timeout = 7\nworkers = 42\nuser_agent = \"probe/1.0\"\ninsecure = true\n",
        )?;

        let config = Config::load_from_file(file.path())?;

        assert_eq!(config.timeout, Some(7));
        assert_eq!(config.workers, Some(42));
        assert_eq!(config.user_agent.as_deref(), Some("probe/1.0"));
        assert_eq!(config.insecure, Some(true));
        // Keys missing from the file stay unset
        assert_eq!(config.output_format, None);
        assert_eq!(config.worker_count(), 42);
        Ok(())
    }

    #[test]
    fn test_load_from_file__missing_file() {
        let result = Config::load_from_file("does-not-exist.toml");
        assert!(matches!(result, Err(HostProbeError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_file__invalid_toml() -> TestResult {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"timeout = \"three\"")?;

        let result = Config::load_from_file(file.path());

        assert!(matches!(result, Err(HostProbeError::TomlParsing(_))));
        Ok(())
    }

    #[test]
    fn test_load_from_dir__finds_file_in_parent() -> TestResult {
        let root = TempDir::new()?;
        fs::write(root.path().join(".hostprobe.toml"), "workers = 3\n")?;
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested)?;

        let config = Config::load_from_dir(&nested);

        assert_eq!(config.workers, Some(3));
        Ok(())
    }

    #[test]
    fn test_load_from_dir__falls_back_to_defaults() -> TestResult {
        let root = TempDir::new()?;
        let nested = root.path().join("a").join("b").join("c").join("d");
        fs::create_dir_all(&nested)?;
        // Four levels up is out of reach
        fs::write(root.path().join(".hostprobe.toml"), "workers = 3\n")?;

        let config = Config::load_from_dir(&nested);

        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_merge_with_cli__cli_takes_precedence() {
        let mut config = Config {
            timeout: Some(10),
            workers: Some(5),
            user_agent: Some("from-file".to_string()),
            ..Default::default()
        };
        let cli_config = CliConfig {
            timeout: Some(1),
            user_agent: Some("from-cli".to_string()),
            insecure: true,
            output_format: Some("json".to_string()),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.timeout, Some(1));
        assert_eq!(config.workers, Some(5));
        assert_eq!(config.user_agent.as_deref(), Some("from-cli"));
        assert_eq!(config.insecure, Some(true));
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_validate__zero_timeout() {
        let config = Config {
            timeout: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HostProbeError::Config(_))));
    }

    #[test]
    fn test_validate__huge_timeout() {
        let config = Config {
            timeout: Some(86_401),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate__zero_workers() {
        let config = Config {
            workers: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Worker count cannot be 0"));
    }

    #[test]
    fn test_validate__too_many_workers() {
        let config = Config {
            workers: Some(10_001),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate__unknown_output_format() {
        let config = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid output format 'xml'. Expected one of: text, json."
        );
    }
}
