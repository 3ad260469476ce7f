//! Actors and action bindings.

pub mod actors;
pub mod commands;
