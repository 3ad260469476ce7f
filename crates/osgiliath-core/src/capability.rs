//! Capabilities an actor may bring to the battle.

/// Something that can enter and leave a fight.
pub trait Combatant {
    /// Joins the fight.
    fn start_combat(&self);

    /// Leaves the fight, one way or another.
    fn stop_combat(&self);
}

/// Something that can ride out and come back.
pub trait Rider {
    /// Rides out towards Osgiliath.
    fn ride_to_victory(&self);

    /// Falls back to the city.
    fn retreat_to_minas_tirith(&self);
}
