//! Narration sink abstraction.
//!
//! Every observable effect of the scene is a line of narration. Production
//! code writes to stdout; tests inject a recording implementation.

use std::fmt::Debug;
use std::io::{self, Write};

/// Abstraction over where narration lines end up.
pub trait Narrator: Debug {
    /// Emits a single line of narration.
    fn narrate(&self, line: &str);
}

/// Production narrator that writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNarrator;

impl Narrator for StdoutNarrator {
    fn narrate(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}") {
            tracing::warn!(error = %e, "failed to write narration line");
        }
    }
}
