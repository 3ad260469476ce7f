//! End-to-end test for the scripted battle scene.

use std::rc::Rc;

use osgiliath_battle::application::scene::BattleForOsgiliath;
use osgiliath_test_support::RecordingNarrator;

#[test]
fn test_play_scene_narrates_the_full_script_in_order() {
    // Arrange
    let narrator = Rc::new(RecordingNarrator::new());
    let mut battle = BattleForOsgiliath::new(narrator.clone());

    // Act
    let result = battle.play_scene();

    // Assert
    assert!(result.is_ok());
    assert_eq!(
        narrator.lines(),
        vec![
            "Denethor elaborates his battle schemes...",
            "Denethor orders his troops to ride to Osgiliath!",
            "Faramir rides to Osgiliath!",
            "The Horseman rides to Osgiliath!",
            "Faramir spots an evil orc!",
            "Faramir start fighting orcs!",
            "The Horseman start fighting orcs!",
            "Pippin starts singing...",
            "** Epic combat actions take place **",
            "Wounded, Faramir realizes there is no hope!",
            "Faramir hides...",
            "The Horseman is killed while trying to retreat :(",
            "Pippin stops singing...",
            "Denethor calls his troops back",
            "Faramir retreats to Minas Tirith!",
            "Dead horsemen can't retreat!",
            "** THE END **",
        ]
    );
}
