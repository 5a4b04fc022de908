//! Error types for the count-up core.

use serde::{Deserialize, Serialize};

/// Error type for counter operations.
///
/// Validation errors are raised synchronously when a definition is loaded,
/// never mid-run: a run that has started always produces well-formed renders.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CountError {
    /// Non-finite target bound, or non-finite/non-positive duration.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// Counter not present in the engine's library.
    #[error("Counter not found: {id}")]
    CounterNotFound { id: u32 },

    /// Run not live (already finished, cancelled, or never started).
    #[error("Run not found: {id}")]
    RunNotFound { id: u32 },
}

impl CountError {
    /// Create an `InvalidParameter` error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Get error category for logging/metrics.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "validation",
            Self::CounterNotFound { .. } | Self::RunNotFound { .. } => "registry",
        }
    }
}
