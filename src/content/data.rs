//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization only; the movement domain consumes them through
//! `MovementTuning` and `LevelLayout`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

// ============================================================================
// Movement tuning (movement.ron) - Single struct
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MovementTuningDef {
    pub schema_version: u32,
    pub max_speed: f32,
    pub jump_take_off_speed: f32,
    pub jump_deceleration: f32,
    pub jump_modifier: f32,
    pub climb_speed: f32,
    pub gravity: f32,
    pub ground_probe_distance: f32,
}

impl From<MovementTuningDef> for MovementTuning {
    fn from(def: MovementTuningDef) -> Self {
        Self {
            max_speed: def.max_speed,
            jump_take_off_speed: def.jump_take_off_speed,
            jump_deceleration: def.jump_deceleration,
            jump_modifier: def.jump_modifier,
            climb_speed: def.climb_speed,
            gravity: def.gravity,
            ground_probe_distance: def.ground_probe_distance,
        }
    }
}

// ============================================================================
// Level layout (level.ron) - Single struct
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// A static solid block (floor, platform, wall) centred at `position`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BlockDef {
    pub position: Vec2Def,
    pub size: Vec2Def,
}

/// A ladder zone centred at `position`. Handles are offsets from the centre.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LadderDef {
    pub position: Vec2Def,
    pub size: Vec2Def,
    pub top_handle: Vec2Def,
    pub bottom_handle: Vec2Def,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PlayerDef {
    pub spawn: Vec2Def,
    pub size: Vec2Def,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Resource)]
pub struct LevelLayout {
    pub schema_version: u32,
    pub name: String,
    pub player: PlayerDef,
    pub blocks: Vec<BlockDef>,
    pub ladders: Vec<LadderDef>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        let v = |x, y| Vec2Def { x, y };
        Self {
            schema_version: 1,
            name: "fallback".to_string(),
            player: PlayerDef {
                spawn: v(-4.0, -2.0),
                size: v(0.75, 1.0),
            },
            blocks: vec![
                BlockDef {
                    position: v(0.0, -3.0),
                    size: v(24.0, 1.0),
                },
                BlockDef {
                    position: v(5.0, 1.0),
                    size: v(6.0, 0.5),
                },
            ],
            ladders: vec![LadderDef {
                position: v(1.5, -0.75),
                size: v(1.0, 3.5),
                top_handle: v(0.0, 1.75),
                bottom_handle: v(0.0, -1.75),
            }],
        }
    }
}
