//! # Logging Infrastructure Module
//!
//! Centralized logging for the tracker, built on the `tracing` ecosystem. Every
//! delivery failure, skipped report and missing board id ends up here, since
//! nothing is surfaced to the host application.
//!
//! ## Log Levels
//!
//! - **WARN**: Missing board id, failed deliveries, non-2xx responses
//! - **INFO**: Runtime errors being reported, startup report sent, config saved
//! - **DEBUG**: Successful deliveries, disabled tracker, hook installation
//!
//! ## Environment Configuration
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mentor_tracker=debug` - Show all logs from this crate
//! - `RUST_LOG=warn` - Show only warnings and errors globally

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global logger.
///
/// Host applications that already install their own `tracing` subscriber should
/// skip this; the tracker logs through whatever subscriber is active.
///
/// ## Configuration
///
/// - **Environment-based filtering**: Respects `RUST_LOG`
/// - **Default level**: `debug` for this crate, `warn` for dependencies
/// - **Thread information**: Delivery happens on worker threads, so thread ids are shown
/// - **Source locations**: Line numbers are included
///
/// Multiple calls are safe; only the first one installs the subscriber.
pub fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    static INIT: Lazy<()> = Lazy::new(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mentor_tracker=debug,warn"));

        // try_init: a host may have installed a subscriber already
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init();
    });

    Lazy::force(&INIT);
    Ok(())
}

/// Convenience re-export of log macros
///
/// ```rust
/// use mentor_tracker::logger::log;
///
/// log::warn!("Mentor error log failed: {}", "connection refused");
/// log::info!(board_id = "ffb9d5d2d6324e80bbe143b6", "Mentor tracking: logging runtime error");
/// ```
pub mod log {
    pub use tracing::{debug, error, info, warn};
}
