//! Osgiliath Core — shared command abstractions.
//!
//! This crate defines the reversible `Command` trait, the composite
//! `Scheme`, the capability traits actors implement, and the narration
//! sink every observable effect flows through. It contains no actors.

pub mod capability;
pub mod command;
pub mod error;
pub mod narrator;
