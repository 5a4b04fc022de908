//! Visibility-driven trigger guard.
//!
//! The page triggers its counters when their section first scrolls into
//! view, and never again. This module is that policy made explicit: hosts
//! report section visibility, the guard turns the first report per section
//! into engine trigger commands.

use countup_core::{CounterCommand, CounterId, Inputs};
use hashbrown::HashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Observed page sections.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    HeroStats,
    Pricing,
}

/// Maps section-entered-viewport reports to counter triggers, at most once
/// per section per page lifetime.
#[derive(Default, Debug)]
pub struct VisibilityGuard {
    bindings: Vec<(Section, CounterId)>,
    fired: HashSet<Section>,
}

impl VisibilityGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a counter to a section. Several counters may share a section.
    pub fn bind(&mut self, section: Section, counter: CounterId) {
        self.bindings.push((section, counter));
    }

    /// Report that a section entered the viewport. The first report yields
    /// the trigger commands for its counters; repeats yield nothing.
    pub fn on_visible(&mut self, section: Section) -> Inputs {
        if !self.fired.insert(section) {
            warn!("section {section:?} reported visible again; triggers already fired");
            return Inputs::default();
        }
        let commands: Vec<CounterCommand> = self
            .bindings
            .iter()
            .filter(|(s, _)| *s == section)
            .map(|(_, counter)| CounterCommand::Trigger { counter: *counter })
            .collect();
        debug!(
            "section {section:?} visible; triggering {} counter(s)",
            commands.len()
        );
        Inputs { commands }
    }

    /// Whether the section's triggers have fired.
    pub fn has_fired(&self, section: Section) -> bool {
        self.fired.contains(&section)
    }
}
