//! Output contracts from the core engine.
//!
//! Outputs carry the rendered text for each live run this tick, keyed by
//! display slot, and a separate list of semantic events. Adapters drain
//! changes into their display layer and transport events.

use serde::{Deserialize, Serialize};

use crate::ids::{CounterId, RunId};
use crate::sink::DisplaySink;

/// One rendered display update produced by a run this tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Change {
    pub run: RunId,
    pub counter: CounterId,
    /// Display slot key (small string key).
    pub slot: String,
    pub text: String,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CounterEvent {
    RunStarted {
        run: RunId,
        counter: CounterId,
    },
    /// The run reached progress 1.0; `text` is the exact terminal render.
    RunFinished {
        run: RunId,
        counter: CounterId,
        text: String,
    },
    RunCancelled {
        run: RunId,
        counter: CounterId,
    },
    /// Catch-all for forward-compatible payloads.
    Custom {
        kind: String,
        data: serde_json::Value,
    },
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<CounterEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: CounterEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Write every change into the sink in emission order, so concurrent
    /// runs on one slot resolve to the last writer.
    pub fn apply_to(&self, sink: &mut dyn DisplaySink) {
        for change in &self.changes {
            sink.set_text(&change.slot, &change.text);
        }
    }
}
