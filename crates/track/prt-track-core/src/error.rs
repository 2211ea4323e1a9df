//! Error types for track construction and pose composition.

use serde::{Deserialize, Serialize};

/// Errors raised by the track core.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TrackError {
    /// A segment violates its construction invariants; the track is unusable.
    #[error("Invalid segment at index {index}: {reason}")]
    InvalidSegment { index: usize, reason: String },

    /// Progress lies outside `[0, total_length]` (or is not finite).
    #[error("Progress {progress} is out of range [0, {total_length}]")]
    OutOfRange { progress: f64, total_length: f64 },

    /// Motion or baking configuration is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Stored track document could not be decoded.
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

impl TrackError {
    pub(crate) fn invalid_segment(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix the input and retry (e.g. wrap progress).
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidSegment { .. } => "construction",
            Self::OutOfRange { .. } => "range",
            Self::InvalidConfig { .. } => "config",
            Self::Parse { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
