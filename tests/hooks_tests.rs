mod common;

use common::*;
use mentor_tracker::hooks;
use mentor_tracker::{EventType, Reporter};
use serial_test::serial;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn reset_panic_hook() {
    drop(std::panic::take_hook());
}

#[test]
#[serial]
fn test_panic_is_reported_as_runtime_error() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));
    hooks::install_panic_hook(reporter);

    let result = std::panic::catch_unwind(|| {
        panic!("widget {} failed to render", 3);
    });
    reset_panic_hook();
    assert!(result.is_err());

    let (endpoint, event) = rx.recv_timeout(WAIT).expect("panic should be reported");
    assert!(endpoint.ends_with("/api/Mentor/runtime-error-frontend"));
    assert_eq!(event.event_type, EventType::RuntimeError);
    assert_eq!(event.message, "widget 3 failed to render");
    assert!(event.file.as_deref().unwrap().ends_with("hooks_tests.rs"));
    assert!(event.line.is_some());
    assert!(event.stack.is_some());
}

#[test]
#[serial]
fn test_panic_without_board_id_is_not_reported() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url("https://localhost:5000"), sink));
    hooks::install_panic_hook(reporter);

    let result = std::panic::catch_unwind(|| panic!("nobody hears this"));
    reset_panic_hook();
    assert!(result.is_err());
    assert_nothing_sent(&rx);
}

#[test]
#[serial]
fn test_panic_waits_for_delivery_before_unwinding() {
    // A slow endpoint: the panicking thread must still see the delivery through
    let (tx, rx) = mpsc::channel();
    let mut sink = MockSink::new();
    sink.expect_post_event().returning(move |_, event| {
        std::thread::sleep(Duration::from_millis(300));
        let _ = tx.send(event.clone());
        Ok(())
    });
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), Arc::new(sink)));
    hooks::install_panic_hook(reporter);

    let result = std::panic::catch_unwind(|| panic!("main thread crashed"));
    reset_panic_hook();
    assert!(result.is_err());

    let event = rx
        .try_recv()
        .expect("delivery should finish before the panic hook returns");
    assert_eq!(event.message, "main thread crashed");
}

#[test]
#[serial]
fn test_startup_report_is_sent_after_delay() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));

    hooks::report_startup(reporter).join().unwrap();

    let (_, event) = rx.recv_timeout(WAIT).expect("startup should be reported");
    assert_eq!(event.event_type, EventType::Success);
}

#[test]
#[serial]
fn test_install_wires_panic_hook_and_startup() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));

    hooks::install(reporter).join().unwrap();
    let (_, first) = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(first.event_type, EventType::Success);

    let _ = std::panic::catch_unwind(|| panic!("after install"));
    reset_panic_hook();

    let (_, second) = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(second.event_type, EventType::RuntimeError);
    assert_eq!(second.message, "after install");
}

#[tokio::test]
#[serial]
async fn test_spawn_tracked_passes_ok_through() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));

    let handle = hooks::spawn_tracked(reporter, async { Ok::<_, std::io::Error>(42) });
    assert_eq!(handle.await.unwrap(), Some(42));

    tokio::task::spawn_blocking(move || assert_nothing_sent(&rx))
        .await
        .unwrap();
}

#[tokio::test]
#[serial]
async fn test_spawn_tracked_reports_err_as_rejection() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));

    let handle = hooks::spawn_tracked(reporter, async {
        Err::<u32, _>(std::io::Error::new(std::io::ErrorKind::TimedOut, "GET /api/boards timed out"))
    });
    assert_eq!(handle.await.unwrap(), None);

    let (_, event) = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("rejection should be reported");
    assert_eq!(event.event_type, EventType::PromiseRejection);
    assert_eq!(event.message, "GET /api/boards timed out");
}

#[tokio::test]
#[serial]
async fn test_spawn_tracked_accepts_boxed_errors() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));

    let handle = hooks::spawn_tracked(reporter, async {
        let err: Box<dyn std::error::Error + Send + Sync> = "board sync rejected".into();
        Err::<(), _>(err)
    });
    assert_eq!(handle.await.unwrap(), None);

    let (_, event) = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("boxed error should be reported");
    assert_eq!(event.event_type, EventType::PromiseRejection);
    assert_eq!(event.message, "board sync rejected");
}

#[tokio::test]
#[serial]
async fn test_spawn_tracked_accepts_string_errors() {
    let (sink, rx) = recording_sink();
    let reporter = Arc::new(Reporter::with_transport(config_with_url(TEST_API_URL), sink));

    let handle = hooks::spawn_tracked(reporter, async { Err::<(), _>(format!("status {}", 502)) });
    assert_eq!(handle.await.unwrap(), None);

    let (_, event) = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.message, "status 502");
}
