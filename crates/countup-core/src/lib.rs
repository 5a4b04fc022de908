//! Count-up animation core (display-agnostic).
//!
//! This crate animates numeric counters from a start value to an exact end
//! value along a fixed quartic ease-out curve. It owns no clock and performs
//! no I/O: hosts feed elapsed time into [`Engine::update`] once per tick and
//! drain the returned [`Outputs`] into a [`DisplaySink`].

pub mod config;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod error;
pub mod format;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod sample;
pub mod sink;
pub mod time;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use counter::{CountTarget, CounterDef, CounterKind};
pub use engine::{Engine, Run};
pub use error::CountError;
pub use format::DisplayFormat;
pub use ids::{CounterId, IdAllocator, RunId};
pub use inputs::{CounterCommand, Inputs};
pub use outputs::{Change, CounterEvent, Outputs};
pub use sample::sample_counter;
pub use sink::DisplaySink;
pub use time::AnimationTime;
