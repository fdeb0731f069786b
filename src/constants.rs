//! # Application Constants
//!
//! Endpoints, wire strings and configuration defaults shared across the crate.
//! Everything that has to stay consistent with the Mentor backend lives here so
//! it can be updated in a single location.

/// Backend service URL for this deployment (automatically configured).
/// The board id is parsed out of this value.
pub const DEFAULT_API_URL: &str = "https://webapiffb9d5d2d6324e80bbe143b6-production.up.railway.app";

/// Mentor API base URL that receives frontend diagnostics
pub const DEFAULT_MENTOR_API_BASE_URL: &str = "https://dev.skill-in.com";

/// Path of the runtime error collector on the Mentor API
pub const FRONTEND_LOG_PATH: &str = "/api/Mentor/runtime-error-frontend";

/// Number of hex characters in a board id
pub const BOARD_ID_LEN: usize = 24;

/// Delay before the startup report is sent, giving the host time to finish loading config
pub const DEFAULT_LOAD_REPORT_DELAY_MS: u64 = 100;

/// Per-request timeout for event delivery
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub const PAGE_LOADED_MESSAGE: &str = "Frontend page loaded successfully";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
pub const UNKNOWN_FILE: &str = "Unknown";
pub const UNHANDLED_REJECTION_MESSAGE: &str = "Unhandled promise rejection";
pub const MISSING_STACK: &str = "N/A";
