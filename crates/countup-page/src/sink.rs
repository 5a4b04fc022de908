//! In-memory display sink.

use countup_core::DisplaySink;
use hashbrown::HashMap;

/// Sink that records the latest text per slot. Stands in for the page's
/// text-bearing elements; also the sink used throughout the tests.
#[derive(Default, Debug)]
pub struct MemorySink {
    slots: HashMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a slot, if anything has been written to it.
    pub fn text(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl DisplaySink for MemorySink {
    fn set_text(&mut self, slot: &str, text: &str) {
        self.slots.insert(slot.to_string(), text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut sink = MemorySink::new();
        sink.set_text("a", "1");
        sink.set_text("a", "2");
        assert_eq!(sink.text("a"), Some("2"));
        assert_eq!(sink.text("b"), None);
    }
}
