/// Server configuration
///
/// All items can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database, logs) |
/// | HTTP_PORT | 8000 | HTTP API port |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_TO_FILE | false | also write daily log files under WORK_DIR/logs |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level filter
    pub log_level: String,
    /// Whether to write log files in addition to stdout
    pub log_to_file: bool,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override work dir and port (used by tests)
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the SQLite database file
    pub fn db_path(&self) -> String {
        format!("{}/guedes.db", self.work_dir)
    }

    /// Log directory, when file logging is enabled
    pub fn log_dir(&self) -> Option<String> {
        self.log_to_file.then(|| format!("{}/logs", self.work_dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
