//! # Lifecycle Hooks
//!
//! Wires a `Reporter` into the process so failures are reported without the host
//! calling it explicitly:
//!
//! - **Panics** go through a chained panic hook and are reported as runtime errors.
//!   The previous hook still runs, so the panic message still reaches stderr.
//! - **Failed tasks** spawned through [`spawn_tracked`] are reported as unhandled
//!   rejections when they resolve to `Err`.
//! - **Startup** is reported once, shortly after [`report_startup`] is called.
//!
//! The reporter is passed in explicitly. The only process-global state touched
//! here is the panic hook slot itself.

use crate::event::{RejectionReason, RuntimeError};
use crate::reporter::{Reporter, DELIVERY_THREAD_NAME};
use std::any::Any;
use std::backtrace::Backtrace;
use std::future::Future;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const PANIC_WAIT_POLL: Duration = Duration::from_millis(10);

/// Install the panic hook and schedule the startup report
pub fn install(reporter: Arc<Reporter>) -> JoinHandle<()> {
    install_panic_hook(Arc::clone(&reporter));
    report_startup(reporter)
}

/// Report every panic as a runtime error, then hand over to the previous hook.
///
/// The panicking thread waits for the delivery for at most the configured request
/// timeout, so a panic on `main` is reported before the process exits.
pub fn install_panic_hook(reporter: Arc<Reporter>) {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        // A panic while delivering must not trigger another delivery
        if std::thread::current().name() == Some(DELIVERY_THREAD_NAME) {
            previous(info);
            return;
        }

        let mut error = RuntimeError {
            message: panic_message(info.payload()),
            stack: Some(Backtrace::force_capture().to_string()),
            ..RuntimeError::default()
        };
        if let Some(location) = info.location() {
            error = error.with_location(location.file(), location.line(), location.column());
        }

        // The panic may be about to end the process, so delivery gets a bounded
        // wait before the previous hook runs
        if let Some(delivery) = reporter.report_runtime_error(&error) {
            if !wait_bounded(delivery, reporter.config().request_timeout()) {
                debug!("Mentor error log still in flight after panic wait expired");
            }
        }

        previous(info);
    }));

    debug!("Mentor tracking panic hook installed");
}

/// Wait for a delivery worker to finish, giving up after `limit`.
/// Returns whether the worker finished in time.
fn wait_bounded(delivery: JoinHandle<()>, limit: Duration) -> bool {
    let deadline = Instant::now() + limit;
    while !delivery.is_finished() {
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(PANIC_WAIT_POLL);
    }
    let _ = delivery.join();
    true
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        Some((*s).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

/// Send the startup report after the configured delay.
///
/// The delay gives the host time to finish loading before the success event goes out.
pub fn report_startup(reporter: Arc<Reporter>) -> JoinHandle<()> {
    let delay = reporter.config().load_report_delay();

    std::thread::spawn(move || {
        std::thread::sleep(delay);
        if let Some(delivery) = reporter.report_page_loaded() {
            let _ = delivery.join();
            info!("Mentor tracking startup report sent");
        }
    })
}

/// Spawn a fallible task on the current tokio runtime and report it if it fails.
///
/// An `Err` returned by a tracked task is treated as unhandled: it is reported as
/// a promise rejection and the handle resolves to `None`. `Ok` values pass through.
/// Any error that converts into a boxed error works, including `String` and
/// `Box<dyn Error + Send + Sync>`.
///
/// # Panics
///
/// Panics if called outside a tokio runtime, like `tokio::spawn`.
pub fn spawn_tracked<F, T, E>(reporter: Arc<Reporter>, future: F) -> tokio::task::JoinHandle<Option<T>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync>> + Send + 'static,
{
    tokio::spawn(async move {
        match future.await {
            Ok(value) => Some(value),
            Err(err) => {
                let err: Box<dyn std::error::Error + Send + Sync> = err.into();
                let _ = reporter.report_unhandled_rejection(&RejectionReason::from_error(&*err));
                None
            }
        }
    })
}
