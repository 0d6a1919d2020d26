//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Ladder zones - sensors, never block movement
    Ladder,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    /// Ground contact as reported by the ground probe.
    pub on_ground: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Half extents of the character sprite, used to align ladder handles.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterBody {
    pub half_size: Vec2,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Climbable ladder zone. Handles are offsets from the ladder's transform and
/// bound the climb range.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ladder {
    pub top_handle: Vec2,
    pub bottom_handle: Vec2,
}
