/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from the `LOGLEVEL` environment variable (`ERROR`, `WARN`,
/// `INFO`, `DEBUG` or `TRACE`, case insensitive) and defaults to `INFO`.
/// Calling this more than once is harmless: only the first call installs the
/// subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .ok()
            .and_then(|l| parse_level(&l))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global tracing subscriber already set");
        }
    });
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}
