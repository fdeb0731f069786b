//! # Tracking Events
//!
//! The JSON payload posted to the Mentor runtime error collector. One event is
//! built per occurrence and sent on its own; nothing is buffered.
//!
//! ```json
//! {
//!   "boardId": "ffb9d5d2d6324e80bbe143b6",
//!   "type": "FRONTEND_RUNTIME",
//!   "message": "index out of bounds",
//!   "file": "src/app.rs",
//!   "line": 42,
//!   "column": 9,
//!   "stack": "...",
//!   "timestamp": "2026-10-17T09:30:00.000Z"
//! }
//! ```

use crate::board_id::BoardId;
use crate::constants::{
    MISSING_STACK, PAGE_LOADED_MESSAGE, UNHANDLED_REJECTION_MESSAGE, UNKNOWN_ERROR_MESSAGE, UNKNOWN_FILE,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Kind of lifecycle event being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventType {
    #[serde(rename = "FRONTEND_SUCCESS")]
    Success,
    #[serde(rename = "FRONTEND_RUNTIME")]
    RuntimeError,
    #[serde(rename = "FRONTEND_PROMISE_REJECTION")]
    PromiseRejection,
}

impl EventType {
    /// Short label used when a delivery of this kind fails
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Success => "success",
            EventType::RuntimeError => "error",
            EventType::PromiseRejection => "promise rejection",
        }
    }
}

/// Raw details of a runtime failure, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeError {
    pub message: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub stack: Option<String>,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, file: impl Into<String>, line: u32, column: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// Why a tracked task failed without anyone handling the error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionReason {
    pub message: Option<String>,
    pub stack: Option<String>,
}

impl RejectionReason {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: None,
        }
    }

    /// Build a reason from an error value.
    ///
    /// The message is the error's `Display` output. Errors carry no stack trace, so
    /// the `source()` chain stands in for one, one cause per line.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut current = err.source();
        while let Some(cause) = current {
            causes.push(format!("caused by: {cause}"));
            current = cause.source();
        }

        Self {
            message: Some(err.to_string()),
            stack: if causes.is_empty() { None } else { Some(causes.join("\n")) },
        }
    }
}

/// Payload accepted by `/api/Mentor/runtime-error-frontend`
///
/// Only the constructors below build one, so every event carries a board id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub board_id: BoardId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub timestamp: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl TrackingEvent {
    pub fn page_loaded(board_id: &BoardId, at: DateTime<Utc>) -> Self {
        Self {
            board_id: board_id.clone(),
            event_type: EventType::Success,
            message: PAGE_LOADED_MESSAGE.to_string(),
            file: None,
            line: None,
            column: None,
            stack: None,
            timestamp: format_timestamp(at),
        }
    }

    pub fn runtime_error(board_id: &BoardId, error: &RuntimeError, at: DateTime<Utc>) -> Self {
        Self {
            board_id: board_id.clone(),
            event_type: EventType::RuntimeError,
            message: non_empty(&error.message).unwrap_or(UNKNOWN_ERROR_MESSAGE).to_string(),
            file: Some(non_empty(&error.file).unwrap_or(UNKNOWN_FILE).to_string()),
            // A zero line or column is treated as unknown
            line: error.line.filter(|&l| l > 0),
            column: error.column.filter(|&c| c > 0),
            stack: Some(non_empty(&error.stack).unwrap_or(MISSING_STACK).to_string()),
            timestamp: format_timestamp(at),
        }
    }

    pub fn unhandled_rejection(board_id: &BoardId, reason: &RejectionReason, at: DateTime<Utc>) -> Self {
        Self {
            board_id: board_id.clone(),
            event_type: EventType::PromiseRejection,
            message: non_empty(&reason.message)
                .unwrap_or(UNHANDLED_REJECTION_MESSAGE)
                .to_string(),
            file: None,
            line: None,
            column: None,
            stack: Some(non_empty(&reason.stack).unwrap_or(MISSING_STACK).to_string()),
            timestamp: format_timestamp(at),
        }
    }
}
