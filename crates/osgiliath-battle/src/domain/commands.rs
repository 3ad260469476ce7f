//! Leaf commands binding a single actor capability.
//!
//! Bindings hold a `Weak` handle: the scene owns its cast, and Faramir keeps
//! a plan that targets Faramir.

use std::fmt::Debug;
use std::rc::{Rc, Weak};

use osgiliath_core::capability::{Combatant, Rider};
use osgiliath_core::command::Command;

/// Binds a combatant: execute starts combat, undo stops it.
#[derive(Debug)]
pub struct CombatCommand<C> {
    combatant: Weak<C>,
}

impl<C: Combatant + Debug + 'static> CombatCommand<C> {
    /// Creates a binding to `combatant`.
    #[must_use]
    pub fn new(combatant: &Rc<C>) -> Self {
        Self {
            combatant: Rc::downgrade(combatant),
        }
    }

    /// Creates a binding ready to be placed in a `Scheme`.
    #[must_use]
    pub fn boxed(combatant: &Rc<C>) -> Box<dyn Command> {
        Box::new(Self::new(combatant))
    }
}

impl<C: Combatant + Debug> Command for CombatCommand<C> {
    fn command_type(&self) -> &'static str {
        "combat"
    }

    fn execute(&self) {
        tracing::debug!(command = self.command_type(), "execute");
        match self.combatant.upgrade() {
            Some(combatant) => combatant.start_combat(),
            None => tracing::warn!("combatant has left the scene"),
        }
    }

    fn undo(&self) {
        tracing::debug!(command = self.command_type(), "undo");
        match self.combatant.upgrade() {
            Some(combatant) => combatant.stop_combat(),
            None => tracing::warn!("combatant has left the scene"),
        }
    }
}

/// Binds a rider: execute rides out, undo retreats.
#[derive(Debug)]
pub struct RideCommand<R> {
    rider: Weak<R>,
}

impl<R: Rider + Debug + 'static> RideCommand<R> {
    /// Creates a binding to `rider`.
    #[must_use]
    pub fn new(rider: &Rc<R>) -> Self {
        Self {
            rider: Rc::downgrade(rider),
        }
    }

    /// Creates a binding ready to be placed in a `Scheme`.
    #[must_use]
    pub fn boxed(rider: &Rc<R>) -> Box<dyn Command> {
        Box::new(Self::new(rider))
    }
}

impl<R: Rider + Debug> Command for RideCommand<R> {
    fn command_type(&self) -> &'static str {
        "ride"
    }

    fn execute(&self) {
        tracing::debug!(command = self.command_type(), "execute");
        match self.rider.upgrade() {
            Some(rider) => rider.ride_to_victory(),
            None => tracing::warn!("rider has left the scene"),
        }
    }

    fn undo(&self) {
        tracing::debug!(command = self.command_type(), "undo");
        match self.rider.upgrade() {
            Some(rider) => rider.retreat_to_minas_tirith(),
            None => tracing::warn!("rider has left the scene"),
        }
    }
}
