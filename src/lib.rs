//! # Mentor Tracker
//!
//! Client-side runtime error and lifecycle reporting for the Mentor API.
//!
//! A host application builds a [`TrackerConfig`], wraps it in a [`Reporter`] and
//! installs the [`hooks`]. From then on panics, failed tracked tasks and the
//! startup milestone are posted to `{mentor_api_base_url}/api/Mentor/runtime-error-frontend`,
//! correlated by the board id embedded in the configured backend URL.
//!
//! ```text
//! TrackerConfig ──► Reporter ──► Transport ──► POST /api/Mentor/runtime-error-frontend
//!                      ▲
//!      panic hook ─────┤
//!      spawn_tracked ──┤
//!      report_startup ─┘
//! ```
//!
//! Reporting is best-effort. Missing board ids and failed deliveries are logged
//! through `tracing` and otherwise ignored.

pub mod board_id;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod hooks;
pub mod logger;
pub mod reporter;
pub mod transport;

pub use board_id::{extract_board_id, BoardId};
pub use config::TrackerConfig;
pub use error::{ConfigError, InvalidBoardId, TransportError};
pub use event::{EventType, RejectionReason, RuntimeError, TrackingEvent};
pub use reporter::Reporter;
pub use transport::{HttpTransport, Transport};
