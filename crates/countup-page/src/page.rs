//! End-to-end page wiring: engine, visibility guard, sink, and theme.

use anyhow::Result;
use countup_core::{AnimationTime, Config, CounterEvent, Engine, Inputs};
use log::debug;

use crate::sink::MemorySink;
use crate::stats::{brand_range_counter, hero_counters, main_price_counter};
use crate::theme::{PreferenceStore, Theme};
use crate::visibility::{Section, VisibilityGuard};

/// The page's data: what the original markup declared via attributes.
#[derive(Clone, Debug)]
pub struct PageContent {
    /// Main price target in whole currency units.
    pub main_price: i64,
    /// Brand price ranges as (slot, "min-max") pairs.
    pub brand_ranges: Vec<(String, String)>,
}

/// The assembled page behavior. Owns the engine and its collaborators;
/// hosts feed it visibility reports and ticks.
pub struct PageBehavior {
    engine: Engine,
    guard: VisibilityGuard,
    sink: MemorySink,
    theme: Theme,
    pending: Inputs,
}

impl PageBehavior {
    /// Build the behavior from page content, restoring the theme flag.
    pub fn new(content: &PageContent, store: &dyn PreferenceStore) -> Result<Self> {
        let mut engine = Engine::new(Config::default());
        let mut guard = VisibilityGuard::new();

        for def in hero_counters() {
            let id = engine.load_counter(def)?;
            guard.bind(Section::HeroStats, id);
        }

        let id = engine.load_counter(main_price_counter(content.main_price))?;
        guard.bind(Section::Pricing, id);

        for (slot, range) in &content.brand_ranges {
            let def = brand_range_counter(slot, range)?;
            let id = engine.load_counter(def)?;
            guard.bind(Section::Pricing, id);
        }

        Ok(Self {
            engine,
            guard,
            sink: MemorySink::new(),
            theme: Theme::load(store),
            pending: Inputs::default(),
        })
    }

    /// Report that a section entered the viewport. Resulting triggers are
    /// queued for the next tick.
    pub fn section_visible(&mut self, section: Section) {
        let inputs = self.guard.on_visible(section);
        self.pending.commands.extend(inputs.commands);
    }

    /// Advance the page by one tick of `dt_ms` milliseconds, applying any
    /// queued triggers and draining renders into the sink.
    pub fn tick(&mut self, dt_ms: f64) -> Result<()> {
        let dt = AnimationTime::from_millis(dt_ms)?;
        let inputs = std::mem::take(&mut self.pending);
        let outputs = self.engine.update(dt, inputs);
        for event in &outputs.events {
            if let CounterEvent::RunFinished { counter, text, .. } = event {
                debug!("counter {counter:?} finished at {text:?}");
            }
        }
        outputs.apply_to(&mut self.sink);
        Ok(())
    }

    /// Current text of a display slot.
    pub fn display(&self, slot: &str) -> Option<&str> {
        self.sink.text(slot)
    }

    /// Whether any counter run is still live.
    pub fn animating(&self) -> bool {
        self.engine.live_runs() > 0
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the new flag.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        self.theme.store(store);
        self.theme
    }
}
