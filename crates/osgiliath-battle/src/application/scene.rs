//! The Battle for Osgiliath, played once from start to finish.

use std::rc::Rc;

use osgiliath_core::error::DomainError;
use osgiliath_core::narrator::Narrator;
use uuid::Uuid;

use crate::domain::actors::{Denethor, Faramir, Horseman, Pippin};

/// The scene: its cast and the narrator they all speak through.
#[derive(Debug)]
pub struct BattleForOsgiliath {
    narrator: Rc<dyn Narrator>,
    denethor: Denethor,
    faramir: Rc<Faramir>,
}

impl BattleForOsgiliath {
    /// Assembles the cast, giving each actor only the peers it needs.
    #[must_use]
    pub fn new(narrator: Rc<dyn Narrator>) -> Self {
        let faramir = Rc::new(Faramir::new(Rc::clone(&narrator)));
        let horseman = Rc::new(Horseman::new(Rc::clone(&narrator)));
        let pippin = Rc::new(Pippin::new(Rc::clone(&narrator)));
        let denethor = Denethor::new(Rc::clone(&narrator), Rc::clone(&faramir), horseman, pippin);

        Self {
            narrator,
            denethor,
            faramir,
        }
    }

    /// Returns Denethor.
    #[must_use]
    pub fn denethor(&self) -> &Denethor {
        &self.denethor
    }

    /// Returns Faramir.
    #[must_use]
    pub fn faramir(&self) -> &Faramir {
        &self.faramir
    }

    /// Plays the fixed script.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the scene has already been
    /// played, since Denethor only draws up his schemes once.
    pub fn play_scene(&mut self) -> Result<(), DomainError> {
        let correlation_id = Uuid::new_v4();
        let span = tracing::info_span!("play_scene", %correlation_id);
        let _guard = span.enter();

        tracing::info!("curtain up");

        self.denethor.elaborate_schemes()?;
        self.denethor.order_to_ride()?;
        self.faramir.spot_orc()?;
        self.narrator.narrate("** Epic combat actions take place **");
        self.faramir.realize_there_is_no_hope()?;
        self.denethor.call_troops_back()?;
        self.narrator.narrate("** THE END **");

        tracing::info!("curtain down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actors::{AttackPhase, RidePhase};
    use osgiliath_test_support::RecordingNarrator;

    #[test]
    fn test_new_scene_has_nothing_planned() {
        // Arrange
        let narrator = Rc::new(RecordingNarrator::new());

        // Act
        let battle = BattleForOsgiliath::new(narrator.clone());

        // Assert
        assert_eq!(battle.denethor().ride_phase(), RidePhase::NotPlanned);
        assert_eq!(battle.faramir().attack_phase(), AttackPhase::Unassigned);
        assert!(narrator.lines().is_empty());
    }

    #[test]
    fn test_play_scene_leaves_troops_recalled_and_plan_ready() {
        // Arrange
        let narrator = Rc::new(RecordingNarrator::new());
        let mut battle = BattleForOsgiliath::new(narrator);

        // Act
        let result = battle.play_scene();

        // Assert
        assert!(result.is_ok());
        assert_eq!(battle.denethor().ride_phase(), RidePhase::Recalled);
        assert_eq!(battle.faramir().attack_phase(), AttackPhase::Ready);
    }

    #[test]
    fn test_play_scene_twice_fails_without_narrating() {
        // Arrange
        let narrator = Rc::new(RecordingNarrator::new());
        let mut battle = BattleForOsgiliath::new(narrator.clone());
        battle.play_scene().unwrap();
        let lines_after_first_run = narrator.lines().len();

        // Act
        let result = battle.play_scene();

        // Assert
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
        assert_eq!(narrator.lines().len(), lines_after_first_run);
    }
}
