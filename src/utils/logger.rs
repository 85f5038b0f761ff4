/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::LOG_LEVEL_ENV;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` fmt subscriber
///
/// The level comes from the `LOGLEVEL` environment variable (`ERROR`, `WARN`,
/// `INFO`, `DEBUG`, `TRACE`) and defaults to `INFO`. Calling it more than once
/// is a no-op, and so is calling it after another subscriber was installed.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("global subscriber already set");
        }
    });
}

/// Reads the log level from `LOGLEVEL`, falling back to `INFO`
pub fn log_level_from_env() -> Level {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.trim().to_uppercase().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}
