//! Test commands — spies that log every `execute` and `undo` call.

use std::cell::RefCell;
use std::rc::Rc;

use osgiliath_core::command::Command;

/// Shared, ordered log of command invocations.
///
/// Entries have the form `"<label>.execute"` or `"<label>.undo"`.
#[derive(Debug, Clone, Default)]
pub struct CommandJournal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl CommandJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded invocations.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    fn record(&self, entry: String) {
        self.entries.borrow_mut().push(entry);
    }
}

/// A command that does nothing but write to a `CommandJournal`.
#[derive(Debug)]
pub struct RecordingCommand {
    label: String,
    journal: CommandJournal,
}

impl RecordingCommand {
    /// Create a spy with the given label, logging into `journal`.
    #[must_use]
    pub fn new(label: &str, journal: &CommandJournal) -> Self {
        Self {
            label: label.to_owned(),
            journal: journal.clone(),
        }
    }

    /// Convenience for building `Scheme` children.
    #[must_use]
    pub fn boxed(label: &str, journal: &CommandJournal) -> Box<dyn Command> {
        Box::new(Self::new(label, journal))
    }
}

impl Command for RecordingCommand {
    fn command_type(&self) -> &'static str {
        "recording"
    }

    fn execute(&self) {
        self.journal.record(format!("{}.execute", self.label));
    }

    fn undo(&self) {
        self.journal.record(format!("{}.undo", self.label));
    }
}
