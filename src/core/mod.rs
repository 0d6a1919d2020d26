//! Core domain: camera setup and the gameplay pause gate.

mod resources;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, toggle_pause};

/// Screen pixels per world unit (one grid cell).
pub const PIXELS_PER_UNIT: f32 = 48.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_pause);
    }
}
