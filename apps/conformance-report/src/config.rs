//! Centralized configuration for conformance-report.
//!
//! All environment variables are loaded and validated at startup to fail fast
//! on misconfiguration rather than partway through a report run.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Report configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to write the JSON report; stdout when unset (REPORT_OUTPUT)
    pub output: Option<PathBuf>,
    /// Exit non-zero if any object fails to build (REPORT_STRICT)
    pub strict: bool,
    /// Log format (REPORT_LOG_FORMAT: pretty|json)
    pub log_format: LogFormat,
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// Fails fast on invalid configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Output path
        let output = env::var("REPORT_OUTPUT").ok().map(PathBuf::from);
        if let Some(path) = &output {
            if path.as_os_str().is_empty() {
                return Err(ConfigError {
                    field: "REPORT_OUTPUT",
                    message: "Must not be empty when set".into(),
                });
            }
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() && !dir.is_dir() {
                    return Err(ConfigError {
                        field: "REPORT_OUTPUT",
                        message: format!("Directory {} does not exist", dir.display()),
                    });
                }
            }
        }

        // Strict mode
        let strict_raw = env::var("REPORT_STRICT").unwrap_or_default();
        let strict = matches!(strict_raw.to_lowercase().as_str(), "1" | "true" | "yes");

        // Log format
        let log_format =
            LogFormat::from_str(&env::var("REPORT_LOG_FORMAT").unwrap_or_else(|_| "pretty".into()));

        Ok(Self {
            output,
            strict,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_pretty() {
        assert_eq!(LogFormat::from_str("anything"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("JSON"), LogFormat::Json);
    }
}
