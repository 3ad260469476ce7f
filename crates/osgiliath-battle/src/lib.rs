//! Osgiliath — the battle scene.
//!
//! Responsible for the cast of actors, the bindings that turn their
//! capabilities into commands, and the scripted scene that plays them.

pub mod application;
pub mod domain;
