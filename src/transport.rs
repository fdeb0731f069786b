//! Delivery of tracking events to the Mentor API.
//!
//! `Transport` is the seam between building an event and putting it on the wire.
//! The reporter only ever talks to a `dyn Transport`, which lets tests observe
//! deliveries without a network.

use crate::error::TransportError;
use crate::event::TrackingEvent;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Post a single event to `endpoint`. Anything but a 2xx response is an error.
    async fn post_event(&self, endpoint: &str, event: &TrackingEvent) -> Result<(), TransportError>;
}

/// JSON-over-HTTP transport backed by `reqwest`
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        // Every send runs on its own short-lived runtime, so pooled connections
        // would outlive the runtime that opened them
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_event(&self, endpoint: &str, event: &TrackingEvent) -> Result<(), TransportError> {
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        debug!(
            event_type = event.event_type.label(),
            status = status.as_u16(),
            "Delivered tracking event"
        );
        Ok(())
    }
}
