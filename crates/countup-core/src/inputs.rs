//! Input contracts for the core engine.
//!
//! Adapters build these and pass them into Engine::update() each tick.

use serde::{Deserialize, Serialize};

use crate::ids::{CounterId, RunId};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<CounterCommand>,
}

impl Inputs {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CounterCommand {
    /// Start a counter's run. Idempotent: a counter that has already been
    /// triggered in this engine's lifetime is left alone.
    Trigger { counter: CounterId },
    /// Start an additional run regardless of the trigger guard. Concurrent
    /// runs on one slot interleave with last write winning.
    Restart { counter: CounterId },
    /// Mark a run for removal; it is dropped on its next tick without a
    /// terminal write.
    Cancel { run: RunId },
}
