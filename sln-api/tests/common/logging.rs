use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Captures log output of the current thread into a temporary file
pub struct TestLogger {
    log_file: NamedTempFile,
    _guard: tracing::subscriber::DefaultGuard,
}

impl TestLogger {
    pub fn new() -> Self {
        let log_file = NamedTempFile::new().expect("Failed to create test log file");
        let writer = log_file.reopen().expect("Failed to open test log file");

        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("sln_api=debug"))
            .with(
                fmt::layer()
                    .with_writer(Mutex::new(writer))
                    .with_ansi(false)
                    .with_target(false)
                    .compact(),
            );

        let guard = tracing::subscriber::set_default(subscriber);

        Self {
            log_file,
            _guard: guard,
        }
    }

    pub fn read_logs(&self) -> String {
        std::fs::read_to_string(self.log_file.path()).expect("Failed to read test log file")
    }

    /// Lines logged at ERROR level
    pub fn error_lines(&self) -> Vec<String> {
        self.read_logs()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(|line| line.to_string())
            .collect()
    }
}

impl Default for TestLogger {
    fn default() -> Self {
        Self::new()
    }
}
