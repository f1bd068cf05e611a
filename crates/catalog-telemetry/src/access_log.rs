//! Append-only HTTP access log.
//!
//! One JSON object per completed request, one line per object. Writes are
//! fire-and-forget: a sink failure is reported to the diagnostic log and
//! never surfaces into request handling.

use std::fs::{File, OpenOptions, create_dir_all};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;

/// One completed HTTP request, as written to the access log.
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogRecord {
    /// Completion time.
    pub timestamp: DateTime<Utc>,
    /// HTTP method.
    pub method: String,
    /// Request URL (path and query).
    pub url: String,
    /// Response status code.
    pub status: u16,
    /// Total handling duration in milliseconds.
    pub duration_ms: u64,
    /// Request body, parsed as JSON when possible.
    pub request_body: serde_json::Value,
    /// Response body as sent to the client, parsed as JSON when possible.
    pub response_body: serde_json::Value,
    /// `User-Agent` header, if present.
    pub user_agent: Option<String>,
    /// Client socket address, if known.
    pub client_addr: Option<String>,
}

/// Durable append-only sink for [`AccessLogRecord`]s.
#[derive(Debug)]
pub struct AccessLogWriter {
    file: Mutex<File>,
}

impl AccessLogWriter {
    /// Open (creating if needed) the log file at `path`.
    ///
    /// The parent directory is created when absent, matching the sink
    /// contract: first write must not require manual setup.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent).map_err(AppError::from)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(AppError::from)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one record as a single JSON line.
    ///
    /// Never returns an error: serialization or I/O failures are logged to
    /// diagnostic output and the record is dropped.
    pub fn append(&self, record: &AccessLogRecord) {
        let mut line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Failed to serialize access log record");
                return;
            }
        };
        line.push('\n');

        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // One write per record keeps lines whole even with a second writer
        // appending to the same file.
        if let Err(e) = file.write_all(line.as_bytes()) {
            warn!(error = %e, "Failed to append access log record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("catalog-telemetry-{}-{name}", std::process::id()))
            .join("api.log")
    }

    fn sample_record() -> AccessLogRecord {
        AccessLogRecord {
            timestamp: Utc::now(),
            method: "POST".to_string(),
            url: "/api/products".to_string(),
            status: 201,
            duration_ms: 12,
            request_body: serde_json::json!({"name": "Widget", "price": 9.99}),
            response_body: serde_json::json!({"id": 1, "name": "Widget", "price": 9.99}),
            user_agent: Some("curl/8.5.0".to_string()),
            client_addr: Some("127.0.0.1:55123".to_string()),
        }
    }

    #[test]
    fn test_creates_directory_and_appends_one_line_per_record() {
        let path = temp_log_path("append");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let writer = AccessLogWriter::open(&path).unwrap();
        writer.append(&sample_record());
        writer.append(&sample_record());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["method"], "POST");
        assert_eq!(parsed["status"], 201);
        assert_eq!(parsed["request_body"]["name"], "Widget");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
