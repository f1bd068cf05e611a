//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging and access-log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Path to the HTTP access log file. The parent directory is created on
    /// first use if absent.
    #[serde(default = "default_access_log")]
    pub access_log: String,
    /// Maximum request/response body size captured per access-log record,
    /// in bytes. Larger bodies are recorded as truncated.
    #[serde(default = "default_capture_limit")]
    pub body_capture_limit: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            access_log: default_access_log(),
            body_capture_limit: default_capture_limit(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_access_log() -> String {
    "logs/api.log".to_string()
}

fn default_capture_limit() -> usize {
    64 * 1024
}
