//! # Reporter
//!
//! Turns lifecycle occurrences into `TrackingEvent`s and sends them to the Mentor
//! API without blocking the caller.
//!
//! ## Delivery Model
//!
//! Each report is fire-and-forget: the event is handed to a short-lived worker
//! thread that owns a single-threaded tokio runtime, so reports can be made from
//! plain threads, panic hooks and async tasks alike. A failed delivery is logged
//! and dropped. Nothing is retried or queued.
//!
//! ## Board Id Resolution
//!
//! The board id is re-read from `api_url` on every report. When it cannot be
//! found the report is skipped entirely and no request is made.

use crate::board_id::{extract_board_id, BoardId};
use crate::config::TrackerConfig;
use crate::error::TransportError;
use crate::event::{RejectionReason, RuntimeError, TrackingEvent};
use crate::transport::{HttpTransport, Transport};
use chrono::Utc;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

pub struct Reporter {
    config: TrackerConfig,
    transport: Arc<dyn Transport>,
}

impl Reporter {
    /// Create a reporter that posts over HTTP
    pub fn new(config: TrackerConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: TrackerConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn board_id(&self) -> Option<BoardId> {
        extract_board_id(&self.config.api_url)
    }

    pub fn endpoint(&self) -> String {
        self.config.endpoint()
    }

    /// Report that the host application finished starting up
    pub fn report_page_loaded(&self) -> Option<JoinHandle<()>> {
        let board_id = self.resolve("success")?;
        self.dispatch(TrackingEvent::page_loaded(&board_id, Utc::now()))
    }

    /// Report an uncaught runtime failure
    pub fn report_runtime_error(&self, error: &RuntimeError) -> Option<JoinHandle<()>> {
        let board_id = self.resolve("error")?;
        info!(%board_id, "Mentor tracking: logging runtime error");
        self.dispatch(TrackingEvent::runtime_error(&board_id, error, Utc::now()))
    }

    /// Report a task that failed with nobody handling its error
    pub fn report_unhandled_rejection(&self, reason: &RejectionReason) -> Option<JoinHandle<()>> {
        let board_id = self.resolve("promise rejection")?;
        self.dispatch(TrackingEvent::unhandled_rejection(&board_id, reason, Utc::now()))
    }

    fn resolve(&self, kind: &str) -> Option<BoardId> {
        if !self.config.enabled {
            debug!("Mentor tracking disabled, skipping {} log", kind);
            return None;
        }

        let board_id = self.board_id();
        if board_id.is_none() {
            warn!(
                api_url = %self.config.api_url,
                "Mentor tracking: board id not found, skipping {} log", kind
            );
        }
        board_id
    }

    /// Send an event on a background worker.
    ///
    /// The returned handle only needs joining when the caller wants to wait for the
    /// attempt to finish; dropping it detaches the worker. `None` means the worker
    /// could not be started and the event was dropped.
    pub fn dispatch(&self, event: TrackingEvent) -> Option<JoinHandle<()>> {
        let transport = Arc::clone(&self.transport);
        let endpoint = self.endpoint();
        let label = event.event_type.label();

        let spawned = std::thread::Builder::new()
            .name(DELIVERY_THREAD_NAME.to_string())
            .spawn(move || {
                // The calling thread may not be inside a tokio runtime
                let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let err = TransportError::Runtime(e.to_string());
                        warn!("Mentor {} log failed: {}", label, err);
                        return;
                    }
                };

                if let Err(e) = rt.block_on(transport.post_event(&endpoint, &event)) {
                    warn!("Mentor {} log failed: {}", label, e);
                }
            });

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("Mentor {} log failed: could not start delivery worker: {}", label, e);
                None
            }
        }
    }
}

/// Name given to delivery worker threads
pub const DELIVERY_THREAD_NAME: &str = "mentor-tracker-delivery";
