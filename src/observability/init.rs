//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "spotfinder.log";

/// Initializes the tracing subscriber with a rotating file sink.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, otherwise `"info"`. Events are formatted without
/// ANSI colors and appended to `<data dir>/spotfinder.log`.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Returns silently if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use spotfinder::observability::init_tracing;
/// use spotfinder::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let data_dir = config.data_dir_path();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(RotatingFile::new(data_dir.join(LOG_FILE_NAME)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
