//! Debug tools for iterating on the controller (dev-tools feature).
//!
//! Features:
//! - F2 toggles player control (exercises the control-disabled path)
//! - Climb flag changes are logged instead of drawn

mod systems;

use bevy::prelude::*;

use crate::debug::systems::{log_climb_flags, toggle_player_control};

/// Last climb flags seen per player, for change logging.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClimbFlagsSnapshot {
    pub near: bool,
    pub held: bool,
    pub started: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_player_control, log_climb_flags));
    }
}
