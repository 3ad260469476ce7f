//! Test narrator — captures narration instead of printing it.

use std::cell::RefCell;

use osgiliath_core::narrator::Narrator;

/// A narrator that records every line it is given, in order.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    lines: RefCell<Vec<String>>,
}

impl RecordingNarrator {
    /// Create an empty recording narrator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all lines narrated so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
