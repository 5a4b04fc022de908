//! Display sink seam.
//!
//! The core only renders formatted strings; what "displaying" means is up to
//! the host. Adapters implement this trait and drain Outputs into it.

/// An addressable text destination, keyed by display slot.
pub trait DisplaySink {
    fn set_text(&mut self, slot: &str, text: &str);
}
