//! Engine: counter ownership and the tick-driven stepping API.
//!
//! Methods:
//! - new, load_counter, trigger/restart/cancel, update (advance -> sample -> emit)
//!
//! Single-threaded and cooperative: the host calls update() once per display
//! tick with the elapsed time since the previous call. Each run owns its
//! display slot for the tick; no shared mutable state exists between runs.

use crate::config::Config;
use crate::counter::CounterDef;
use crate::error::CountError;
use crate::ids::{CounterId, IdAllocator, RunId};
use crate::inputs::{CounterCommand, Inputs};
use crate::outputs::{Change, CounterEvent, Outputs};
use crate::sample::sample_counter;
use crate::time::AnimationTime;

/// One live count-up run. Ephemeral: created on trigger, dropped when
/// progress reaches 1.0 or the run is cancelled.
#[derive(Debug)]
pub struct Run {
    pub id: RunId,
    pub counter: CounterId,
    pub elapsed: AnimationTime,
    pub cancelled: bool,
}

/// Per-counter bookkeeping: the definition plus its trigger guard.
/// The guard is the explicit form of the page-lifetime "already animated"
/// flag; it belongs to the engine, not to process-wide state.
#[derive(Debug)]
struct CounterEntry {
    id: CounterId,
    def: CounterDef,
    triggered: bool,
}

/// Minimal counter library storage.
#[derive(Default, Debug)]
struct CounterLib {
    items: Vec<CounterEntry>,
}

impl CounterLib {
    fn insert(&mut self, id: CounterId, def: CounterDef) {
        self.items.push(CounterEntry {
            id,
            def,
            triggered: false,
        });
    }
    fn get(&self, id: CounterId) -> Option<&CounterEntry> {
        self.items.iter().find(|e| e.id == id)
    }
    fn get_mut(&mut self, id: CounterId) -> Option<&mut CounterEntry> {
        self.items.iter_mut().find(|e| e.id == id)
    }
}

/// Engine (core): owns counter definitions, trigger state, and live runs.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    ids: IdAllocator,
    counters: CounterLib,
    runs: Vec<Run>,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            counters: CounterLib {
                items: Vec::with_capacity(cfg.counters_capacity),
            },
            runs: Vec::with_capacity(cfg.runs_capacity),
            outputs: Outputs::default(),
            cfg,
        }
    }

    /// Validate and store a counter definition, returning a CounterId.
    /// All invariants are checked here, never mid-run.
    pub fn load_counter(&mut self, def: CounterDef) -> Result<CounterId, CountError> {
        def.validate()?;
        let id = self.ids.alloc_counter();
        self.counters.insert(id, def);
        Ok(id)
    }

    /// Look up a loaded counter definition.
    pub fn counter(&self, id: CounterId) -> Option<&CounterDef> {
        self.counters.get(id).map(|e| &e.def)
    }

    /// Whether the counter's once-per-lifetime trigger has fired.
    pub fn has_triggered(&self, id: CounterId) -> bool {
        self.counters.get(id).map(|e| e.triggered).unwrap_or(false)
    }

    /// Number of runs currently live.
    pub fn live_runs(&self) -> usize {
        self.runs.len()
    }

    /// Start the counter's run unless it has already been triggered.
    /// Returns `Ok(None)` when the guard suppressed the start.
    pub fn trigger(&mut self, counter: CounterId) -> Result<Option<RunId>, CountError> {
        let entry = self
            .counters
            .get_mut(counter)
            .ok_or(CountError::CounterNotFound { id: counter.0 })?;
        if entry.triggered {
            return Ok(None);
        }
        entry.triggered = true;
        Ok(Some(self.start_run(counter)))
    }

    /// Start an additional run, bypassing the trigger guard. Concurrent runs
    /// on the same slot interleave; the last writer each tick wins, and the
    /// terminal render is still the exact end value.
    pub fn restart(&mut self, counter: CounterId) -> Result<RunId, CountError> {
        let entry = self
            .counters
            .get_mut(counter)
            .ok_or(CountError::CounterNotFound { id: counter.0 })?;
        entry.triggered = true;
        Ok(self.start_run(counter))
    }

    /// Mark a live run for cancellation; it is dropped on its next tick
    /// without a terminal write.
    pub fn cancel(&mut self, run: RunId) -> Result<(), CountError> {
        let r = self
            .runs
            .iter_mut()
            .find(|r| r.id == run)
            .ok_or(CountError::RunNotFound { id: run.0 })?;
        r.cancelled = true;
        Ok(())
    }

    fn start_run(&mut self, counter: CounterId) -> RunId {
        let id = self.ids.alloc_run();
        self.runs.push(Run {
            id,
            counter,
            elapsed: AnimationTime::zero(),
            cancelled: false,
        });
        id
    }

    /// Apply commands for this tick. Commands naming unknown counters or
    /// dead runs are skipped; command-driven starts emit RunStarted.
    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                CounterCommand::Trigger { counter } => {
                    if let Ok(Some(run)) = self.trigger(counter) {
                        self.push_event(CounterEvent::RunStarted { run, counter });
                    }
                }
                CounterCommand::Restart { counter } => {
                    if let Ok(run) = self.restart(counter) {
                        self.push_event(CounterEvent::RunStarted { run, counter });
                    }
                }
                CounterCommand::Cancel { run } => {
                    let _ = self.cancel(run);
                }
            }
        }
    }

    fn push_event(&mut self, event: CounterEvent) {
        if self.outputs.events.len() < self.cfg.max_events_per_tick {
            self.outputs.push_event(event);
        }
    }

    /// Step every live run by dt with the given inputs, producing outputs.
    ///
    /// Per run: advance elapsed, compute progress = clamp(elapsed/duration),
    /// sample the eased display text, and emit one Change. Runs that reach
    /// progress 1.0 render the exact end value and retire this tick; runs
    /// marked cancelled are dropped before rendering.
    pub fn update(&mut self, dt: AnimationTime, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        self.apply_inputs(inputs);

        let mut i = 0;
        while i < self.runs.len() {
            if self.runs[i].cancelled {
                let run = self.runs.remove(i);
                self.push_event(CounterEvent::RunCancelled {
                    run: run.id,
                    counter: run.counter,
                });
                continue;
            }

            self.runs[i].elapsed += dt;
            let run_id = self.runs[i].id;
            let counter = self.runs[i].counter;
            let elapsed = self.runs[i].elapsed;

            let (progress, text, slot) = match self.counters.get(counter) {
                Some(entry) => {
                    let u = elapsed.progress_against(entry.def.duration);
                    (u, sample_counter(&entry.def, u), entry.def.slot.clone())
                }
                None => {
                    // Definition vanished out from under the run; retire it.
                    self.runs.remove(i);
                    continue;
                }
            };

            self.outputs.push_change(Change {
                run: run_id,
                counter,
                slot,
                text: text.clone(),
            });

            if progress >= 1.0 {
                self.runs.remove(i);
                self.push_event(CounterEvent::RunFinished {
                    run: run_id,
                    counter,
                    text,
                });
            } else {
                i += 1;
            }
        }

        &self.outputs
    }
}
