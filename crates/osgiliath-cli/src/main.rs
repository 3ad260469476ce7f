//! Osgiliath entry point: plays the battle scene once on stdout.

use std::error::Error;
use std::rc::Rc;

use osgiliath_battle::application::scene::BattleForOsgiliath;
use osgiliath_core::narrator::StdoutNarrator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber. Logs go to stderr, narration owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let mut battle = BattleForOsgiliath::new(Rc::new(StdoutNarrator));
    if let Err(e) = battle.play_scene() {
        tracing::error!(error = %e, "scene aborted");
        return Err(e.into());
    }

    Ok(())
}
