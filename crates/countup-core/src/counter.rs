//! Counter definitions: the data model loaded into the engine.

use serde::{Deserialize, Serialize};

use crate::error::CountError;
use crate::format::DisplayFormat;
use crate::time::AnimationTime;

/// One animated bound. `end` is the authoritative final displayed value:
/// the terminal render uses it directly, never an eased approximation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountTarget {
    pub start: f64,
    pub end: f64,
}

impl CountTarget {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Target counting up from zero, the common page case.
    pub fn rising(end: f64) -> Self {
        Self { start: 0.0, end }
    }

    fn validate(&self, name: &str) -> Result<(), CountError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(CountError::invalid(format!(
                "counter '{name}': target bounds must be finite (start={}, end={})",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

/// What a counter animates: a single value, or a min/max pair sharing one
/// duration and one display slot, rendered jointly as `"<min> - <max>"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CounterKind {
    Value(CountTarget),
    Range { min: CountTarget, max: CountTarget },
}

/// A complete counter definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterDef {
    /// Human-readable name for diagnostics.
    pub name: String,
    /// Display slot key the rendered text is addressed to.
    pub slot: String,
    pub kind: CounterKind,
    pub duration: AnimationTime,
    #[serde(default)]
    pub format: DisplayFormat,
}

impl CounterDef {
    /// Validate invariants: duration > 0, finite bounds.
    /// Called once at load time; a loaded counter never fails mid-run.
    pub fn validate(&self) -> Result<(), CountError> {
        if self.duration.is_zero() {
            return Err(CountError::invalid(format!(
                "counter '{}': duration must be > 0",
                self.name
            )));
        }
        match &self.kind {
            CounterKind::Value(t) => t.validate(&self.name)?,
            CounterKind::Range { min, max } => {
                min.validate(&self.name)?;
                max.validate(&self.name)?;
            }
        }
        Ok(())
    }
}
