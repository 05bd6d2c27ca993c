use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber writing to stdout.
///
/// The level is read from the `LOGLEVEL` environment variable (`ERROR`, `WARN`,
/// `INFO`, `DEBUG`, `TRACE`), defaulting to `INFO`. Calling it more than once is
/// harmless: only the first call installs anything.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from(env::var("LOGLEVEL").ok().as_deref());

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

/// Maps a `LOGLEVEL` value to a tracing level
pub(crate) fn log_level_from(value: Option<&str>) -> Level {
    match value.map(|v| v.trim().to_uppercase()).as_deref() {
        Some("ERROR") => Level::ERROR,
        Some("WARN") => Level::WARN,
        Some("DEBUG") => Level::DEBUG,
        Some("TRACE") => Level::TRACE,
        _ => Level::INFO,
    }
}
