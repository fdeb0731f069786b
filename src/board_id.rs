//! # Board Id Extraction
//!
//! Every event sent to the Mentor API is correlated with a board id, a 24 character
//! hex token embedded in the backend service URL right after `webapi`:
//!
//! ```text
//! https://webapiffb9d5d2d6324e80bbe143b6-production.up.railway.app
//!               └──────── board id ──────┘
//! ```
//!
//! There is no fallback. If the URL does not carry a board id the caller gets
//! `None` and must skip reporting.

use crate::constants::BOARD_ID_LEN;
use crate::error::InvalidBoardId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

static BOARD_ID_IN_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)webapi([a-f0-9]{24})").expect("board id pattern is valid"));

/// Correlation identifier for a board on the Mentor backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BoardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BoardId {
    type Err = InvalidBoardId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == BOARD_ID_LEN && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(BoardId(s.to_string()))
        } else {
            Err(InvalidBoardId(s.to_string()))
        }
    }
}

/// Extract the board id from a backend service URL.
///
/// Matches `webapi` followed by 24 hex digits anywhere in the string, ignoring
/// case, and returns the digits as written. Logs a warning and returns `None`
/// when the URL is empty or has no such token.
pub fn extract_board_id(api_url: &str) -> Option<BoardId> {
    let found = if api_url.is_empty() {
        None
    } else {
        BOARD_ID_IN_URL
            .captures(api_url)
            .and_then(|caps| caps.get(1))
            .map(|m| BoardId(m.as_str().to_string()))
    };

    if found.is_none() {
        warn!(
            api_url,
            "Mentor tracking: api_url not available or does not contain a valid board id"
        );
    }
    found
}
