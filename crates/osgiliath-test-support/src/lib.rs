//! Shared test spies and utilities for the Osgiliath scene.

mod command;
mod narrator;

pub use command::{CommandJournal, RecordingCommand};
pub use narrator::RecordingNarrator;
