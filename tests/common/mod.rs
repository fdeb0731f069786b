#![allow(dead_code)]

use async_trait::async_trait;
use mentor_tracker::{TrackerConfig, TrackingEvent, Transport, TransportError};
use mockall::mock;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub Sink {}

    #[async_trait]
    impl Transport for Sink {
        async fn post_event(&self, endpoint: &str, event: &TrackingEvent) -> Result<(), TransportError>;
    }
}

pub const TEST_API_URL: &str = "https://webapiffb9d5d2d6324e80bbe143b6-production.up.railway.app";
pub const TEST_BOARD_ID: &str = "ffb9d5d2d6324e80bbe143b6";

pub fn config_with_url(api_url: &str) -> TrackerConfig {
    TrackerConfig {
        api_url: api_url.to_string(),
        mentor_api_base_url: "http://mentor.test".to_string(),
        load_report_delay_ms: 10,
        ..TrackerConfig::default()
    }
}

/// A sink that forwards every delivery to the returned channel
pub fn recording_sink() -> (Arc<MockSink>, Receiver<(String, TrackingEvent)>) {
    let (tx, rx) = mpsc::channel();
    let mut sink = MockSink::new();
    sink.expect_post_event().returning(move |endpoint, event| {
        let _ = tx.send((endpoint.to_string(), event.clone()));
        Ok(())
    });
    (Arc::new(sink), rx)
}

/// Assert that nothing reaches the sink within a short window.
///
/// Checked on the calling thread; a mock expectation failing on a delivery worker
/// would be swallowed there.
pub fn assert_nothing_sent(rx: &Receiver<(String, TrackingEvent)>) {
    if let Ok((_, event)) = rx.recv_timeout(Duration::from_millis(300)) {
        panic!("expected no delivery, got {:?}", event);
    }
}
