//! Desktop platform implementation.

use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::formatter::CustomFormatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Sleeps away the remainder of a frame.
pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Configure and initialize logging for the application.
///
/// Logs go to stderr so that stdout only ever carries the final score.
pub fn init_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        // Allow RUST_LOG to override levels; default to info
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::fmt()
            .with_ansi(true)
            .event_format(CustomFormatter)
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Could not set global default subscriber: {e}");
        }
    });
}
