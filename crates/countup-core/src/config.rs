//! Core configuration for countup-core.

use serde::{Deserialize, Serialize};

/// Configuration for engine sizing.
/// Kept minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hint for the counter library.
    pub counters_capacity: usize,
    /// Initial capacity hint for the live-run list.
    pub runs_capacity: usize,
    /// Maximum events to retain per tick; further events are dropped.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counters_capacity: 16,
            runs_capacity: 8,
            max_events_per_tick: 256,
        }
    }
}
