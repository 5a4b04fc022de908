//! Time handling for counter runs.
//!
//! Durations and elapsed time are kept as integer nanoseconds so that
//! ordering and arithmetic stay exact; conversions validate at the boundary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CountError;

/// A validated moment or span of animation time (nanoseconds).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize, Default)]
pub struct AnimationTime(u64);

impl AnimationTime {
    /// Create animation time from nanoseconds.
    #[inline]
    pub fn from_nanos(nanoseconds: u64) -> Self {
        Self(nanoseconds)
    }

    /// Create animation time from milliseconds.
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, CountError> {
        Self::from_seconds(milliseconds / 1000.0)
    }

    /// Create animation time from seconds.
    /// Rejects negative and non-finite input with `InvalidParameter`.
    #[inline]
    pub fn from_seconds(seconds: f64) -> Result<Self, CountError> {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(CountError::invalid(format!(
                "time must be finite and non-negative, got {seconds}"
            )));
        }
        let nanos = (seconds * 1_000_000_000.0) as u64;
        Ok(Self(nanos))
    }

    /// Zero time.
    #[inline]
    pub fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Get time in seconds.
    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Get time in milliseconds.
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Get time in nanoseconds.
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Normalized progress of this elapsed time against a duration,
    /// clamped to [0, 1]. A zero duration maps to 1.0 (already complete).
    #[inline]
    pub fn progress_against(&self, duration: AnimationTime) -> f64 {
        if duration.0 == 0 {
            return 1.0;
        }
        (self.0 as f64 / duration.0 as f64).clamp(0.0, 1.0)
    }
}

impl std::ops::Add for AnimationTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for AnimationTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for AnimationTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<Duration> for AnimationTime {
    fn from(duration: Duration) -> Self {
        AnimationTime::from_nanos(duration.as_nanos() as u64)
    }
}

impl From<AnimationTime> for Duration {
    fn from(time: AnimationTime) -> Self {
        Duration::from_nanos(time.0)
    }
}
