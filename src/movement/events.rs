//! Movement domain: jump lifecycle and ladder zone messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The character left the ground after a jump takeoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerJumped {
    pub player: Entity,
}

impl Message for PlayerJumped {}

/// The character touched ground again after `PlayerJumped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLanded {
    pub player: Entity,
}

impl Message for PlayerLanded {}

/// The jump button was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStopJump {
    pub player: Entity,
}

impl Message for PlayerStopJump {}

/// A character's collider started or stopped overlapping a ladder zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderZoneSignal {
    Enter { player: Entity, ladder: Entity },
    Exit { player: Entity, ladder: Entity },
}

impl Message for LadderZoneSignal {}
