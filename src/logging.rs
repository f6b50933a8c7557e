use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var overriding `logging.level`, using `EnvFilter` directive syntax.
pub const LOG_ENV_VAR: &str = "BACKSTACK_LOG";

/// Initialize tracing from the logging config.
///
/// Logs go to stderr unless `logging.file` is set, with RFC 3339 UTC
/// timestamps. Log files get a
/// timestamp and pid suffix (`{path}.{timestamp}.{pid}`) so simultaneous
/// instances don't clobber each other.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = &config.file else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(UtcTime::rfc_3339())
            .with_target(true)
            .with_level(true);
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_logs_carry_utc_timestamps() {
        let dir = TempDir::new().unwrap();
        init_tracing(&LoggingConfig {
            level: "debug".to_string(),
            file: Some(dir.path().join("backstack.log")),
        });
        tracing::info!("written to the log file");

        let log = std::fs::read_dir(dir.path())
            .unwrap()
            .next()
            .unwrap()
            .unwrap()
            .path();
        let name = log.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("backstack.log."), "unexpected name {name}");

        let contents = std::fs::read_to_string(&log).unwrap();
        let line = contents
            .lines()
            .find(|line| line.contains("written to the log file"))
            .unwrap();
        let timestamp = line.split_whitespace().next().unwrap();
        assert!(timestamp.contains('T') && timestamp.ends_with('Z'), "{line}");
    }
}
