//! The cast of the battle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use osgiliath_core::capability::{Combatant, Rider};
use osgiliath_core::command::{Command, Scheme};
use osgiliath_core::error::DomainError;
use osgiliath_core::narrator::Narrator;

use super::commands::{CombatCommand, RideCommand};

/// Denethor's ride flow state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RidePhase {
    /// No scheme has been drawn up yet.
    NotPlanned,
    /// Schemes are ready, nobody has ridden out.
    Planned,
    /// The ride scheme has been executed.
    Riding,
    /// The ride scheme has been undone.
    Recalled,
}

/// Faramir's attack plan state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPhase {
    /// The slot is empty.
    Unassigned,
    /// A plan is held but not under way.
    Ready,
    /// The plan has been executed and not yet undone.
    Engaged,
}

/// Steward of Gondor. Draws up the schemes and gives the orders.
#[derive(Debug)]
pub struct Denethor {
    narrator: Rc<dyn Narrator>,
    faramir: Rc<Faramir>,
    horseman: Rc<Horseman>,
    pippin: Rc<Pippin>,
    ride_scheme: Option<Scheme>,
    phase: RidePhase,
}

impl Denethor {
    /// Creates Denethor with the peers his schemes will command.
    #[must_use]
    pub fn new(
        narrator: Rc<dyn Narrator>,
        faramir: Rc<Faramir>,
        horseman: Rc<Horseman>,
        pippin: Rc<Pippin>,
    ) -> Self {
        Self {
            narrator,
            faramir,
            horseman,
            pippin,
            ride_scheme: None,
            phase: RidePhase::NotPlanned,
        }
    }

    /// Current state of the ride flow.
    #[must_use]
    pub fn ride_phase(&self) -> RidePhase {
        self.phase
    }

    /// Builds the ride scheme and hands the attack plan to Faramir.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the schemes were already drawn up.
    pub fn elaborate_schemes(&mut self) -> Result<(), DomainError> {
        if self.phase != RidePhase::NotPlanned {
            return Err(DomainError::InvalidState(
                "Denethor has already elaborated his schemes".to_owned(),
            ));
        }

        self.narrator
            .narrate("Denethor elaborates his battle schemes...");

        self.ride_scheme = Some(Scheme::new(vec![
            RideCommand::boxed(&self.faramir),
            RideCommand::boxed(&self.horseman),
        ]));

        self.faramir
            .assign_attack_plan(Box::new(Scheme::new(vec![
                CombatCommand::boxed(&self.faramir),
                CombatCommand::boxed(&self.horseman),
                CombatCommand::boxed(&self.pippin),
            ])));

        self.transition(RidePhase::Planned);
        Ok(())
    }

    /// Sends the troops out by executing the ride scheme.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if no scheme exists yet or the
    /// troops are already riding.
    pub fn order_to_ride(&mut self) -> Result<(), DomainError> {
        match self.phase {
            RidePhase::Planned | RidePhase::Recalled => {}
            RidePhase::NotPlanned => {
                return Err(DomainError::InvalidState(
                    "Denethor cannot order a ride before elaborating his schemes".to_owned(),
                ));
            }
            RidePhase::Riding => {
                return Err(DomainError::InvalidState(
                    "the troops are already riding".to_owned(),
                ));
            }
        }
        let scheme = self.ride_scheme()?;

        self.narrator
            .narrate("Denethor orders his troops to ride to Osgiliath!");
        scheme.execute();

        self.transition(RidePhase::Riding);
        Ok(())
    }

    /// Calls the troops back by undoing the ride scheme.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` unless the troops are riding.
    pub fn call_troops_back(&mut self) -> Result<(), DomainError> {
        if self.phase != RidePhase::Riding {
            return Err(DomainError::InvalidState(
                "Denethor cannot call back troops that are not riding".to_owned(),
            ));
        }
        let scheme = self.ride_scheme()?;

        self.narrator.narrate("Denethor calls his troops back");
        scheme.undo();

        self.transition(RidePhase::Recalled);
        Ok(())
    }

    fn ride_scheme(&self) -> Result<&Scheme, DomainError> {
        self.ride_scheme
            .as_ref()
            .ok_or_else(|| DomainError::InvalidState("Denethor has no ride scheme".to_owned()))
    }

    fn transition(&mut self, to: RidePhase) {
        tracing::debug!(from = ?self.phase, to = ?to, "ride phase changed");
        self.phase = to;
    }
}

/// Captain of Gondor. Rides, fights, and carries out the attack plan.
#[derive(Debug)]
pub struct Faramir {
    narrator: Rc<dyn Narrator>,
    attack_plan: RefCell<Option<Box<dyn Command>>>,
    phase: Cell<AttackPhase>,
}

impl Faramir {
    /// Creates Faramir with an empty attack plan slot.
    #[must_use]
    pub fn new(narrator: Rc<dyn Narrator>) -> Self {
        Self {
            narrator,
            attack_plan: RefCell::new(None),
            phase: Cell::new(AttackPhase::Unassigned),
        }
    }

    /// Current state of the attack plan.
    #[must_use]
    pub fn attack_phase(&self) -> AttackPhase {
        self.phase.get()
    }

    /// Puts `plan` in the slot, replacing whatever was there.
    pub fn assign_attack_plan(&self, plan: Box<dyn Command>) {
        tracing::debug!(command = plan.command_type(), "attack plan assigned");
        *self.attack_plan.borrow_mut() = Some(plan);
        self.phase.set(AttackPhase::Ready);
    }

    /// Spots an orc and executes the attack plan.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if no plan is assigned or the plan
    /// is already under way.
    pub fn spot_orc(&self) -> Result<(), DomainError> {
        match self.phase.get() {
            AttackPhase::Ready => {}
            AttackPhase::Unassigned => {
                return Err(DomainError::InvalidState(
                    "Faramir has not been given an attack plan".to_owned(),
                ));
            }
            AttackPhase::Engaged => {
                return Err(DomainError::InvalidState(
                    "Faramir is already engaged".to_owned(),
                ));
            }
        }

        self.narrator.narrate("Faramir spots an evil orc!");
        if let Some(plan) = self.attack_plan.borrow().as_ref() {
            plan.execute();
        }

        self.phase.set(AttackPhase::Engaged);
        Ok(())
    }

    /// Gives up on the fight and undoes the attack plan.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` unless the plan is under way.
    pub fn realize_there_is_no_hope(&self) -> Result<(), DomainError> {
        if self.phase.get() != AttackPhase::Engaged {
            return Err(DomainError::InvalidState(
                "Faramir has not engaged the enemy".to_owned(),
            ));
        }

        self.narrator
            .narrate("Wounded, Faramir realizes there is no hope!");
        if let Some(plan) = self.attack_plan.borrow().as_ref() {
            plan.undo();
        }

        self.phase.set(AttackPhase::Ready);
        Ok(())
    }
}

impl Rider for Faramir {
    fn ride_to_victory(&self) {
        self.narrator.narrate("Faramir rides to Osgiliath!");
    }

    fn retreat_to_minas_tirith(&self) {
        self.narrator.narrate("Faramir retreats to Minas Tirith!");
    }
}

impl Combatant for Faramir {
    fn start_combat(&self) {
        self.narrator.narrate("Faramir start fighting orcs!");
    }

    fn stop_combat(&self) {
        self.narrator.narrate("Faramir hides...");
    }
}

/// A hobbit of the Shire, in the Steward's service.
#[derive(Debug)]
pub struct Pippin {
    narrator: Rc<dyn Narrator>,
}

impl Pippin {
    /// Creates Pippin.
    #[must_use]
    pub fn new(narrator: Rc<dyn Narrator>) -> Self {
        Self { narrator }
    }
}

impl Combatant for Pippin {
    fn start_combat(&self) {
        self.narrator.narrate("Pippin starts singing...");
    }

    fn stop_combat(&self) {
        self.narrator.narrate("Pippin stops singing...");
    }
}

/// One of Faramir's riders.
#[derive(Debug)]
pub struct Horseman {
    narrator: Rc<dyn Narrator>,
}

impl Horseman {
    /// Creates the horseman.
    #[must_use]
    pub fn new(narrator: Rc<dyn Narrator>) -> Self {
        Self { narrator }
    }
}

impl Rider for Horseman {
    fn ride_to_victory(&self) {
        self.narrator.narrate("The Horseman rides to Osgiliath!");
    }

    fn retreat_to_minas_tirith(&self) {
        self.narrator.narrate("Dead horsemen can't retreat!");
    }
}

impl Combatant for Horseman {
    fn start_combat(&self) {
        self.narrator.narrate("The Horseman start fighting orcs!");
    }

    fn stop_combat(&self) {
        self.narrator
            .narrate("The Horseman is killed while trying to retreat :(");
    }
}
