//! Binary review label shared by prompts and images.
//!
//! Stored as the text values `GOOD` / `BAD`; a missing value means `GOOD`.
//! Any other stored value is rejected here rather than passed upward as a
//! third option.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Stored value for an accepted prompt or image.
pub const FEEDBACK_GOOD: &str = "GOOD";

/// Stored value for a rejected prompt or image.
pub const FEEDBACK_BAD: &str = "BAD";

/// All valid stored values, in display order.
pub const VALID_FEEDBACK: &[&str] = &[FEEDBACK_GOOD, FEEDBACK_BAD];

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Review label attached to a prompt or an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Feedback {
    #[default]
    Good,
    Bad,
}

impl Feedback {
    /// The stored/wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => FEEDBACK_GOOD,
            Self::Bad => FEEDBACK_BAD,
        }
    }

    /// Resolve a nullable stored value, defaulting absent values to `GOOD`.
    pub fn from_stored(value: Option<&str>) -> Result<Self, CoreError> {
        value.map_or(Ok(Self::default()), str::parse)
    }
}

impl FromStr for Feedback {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            FEEDBACK_GOOD => Ok(Self::Good),
            FEEDBACK_BAD => Ok(Self::Bad),
            other => Err(CoreError::Validation(format!(
                "Invalid feedback '{other}'. Must be one of: {}",
                VALID_FEEDBACK.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
