//! Command abstractions.

use std::fmt::Debug;

/// A reified, reversible action.
pub trait Command: Debug {
    /// The type name for this command (for logging).
    fn command_type(&self) -> &'static str;

    /// Performs the action.
    fn execute(&self);

    /// Reverses the action.
    fn undo(&self);
}

/// An ordered group of commands executed and undone together.
///
/// Both `execute` and `undo` walk the children front to back. Undo is not
/// reversed.
#[derive(Debug, Default)]
pub struct Scheme {
    actions: Vec<Box<dyn Command>>,
}

impl Scheme {
    /// Creates a scheme from its actions, in the order they will run.
    #[must_use]
    pub fn new(actions: Vec<Box<dyn Command>>) -> Self {
        Self { actions }
    }

    /// Number of actions in the scheme.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the scheme has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Command for Scheme {
    fn command_type(&self) -> &'static str {
        "scheme"
    }

    fn execute(&self) {
        tracing::debug!(actions = self.actions.len(), "executing scheme");
        for action in &self.actions {
            action.execute();
        }
    }

    fn undo(&self) {
        tracing::debug!(actions = self.actions.len(), "undoing scheme");
        for action in &self.actions {
            action.undo();
        }
    }
}
