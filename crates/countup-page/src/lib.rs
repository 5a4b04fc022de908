//! Page-behavior orchestration on top of countup-core.
//!
//! Models an educational single-page site's counter behavior without a DOM:
//! the concrete hero/pricing counters, a once-per-lifetime visibility
//! trigger guard, an in-memory display sink, and the single persisted theme
//! preference flag.

pub mod page;
pub mod sink;
pub mod stats;
pub mod theme;
pub mod visibility;

pub use page::{PageBehavior, PageContent};
pub use sink::MemorySink;
pub use theme::{MemoryStore, PreferenceStore, Theme};
pub use visibility::{Section, VisibilityGuard};
