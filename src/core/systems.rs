//! Core domain: camera and pause systems.

use bevy::prelude::*;

use crate::core::{GameplayPaused, PIXELS_PER_UNIT};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Escape pauses gameplay systems and virtual time, which also stops the
/// fixed-rate schedules and the physics step.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if paused.toggle("menu") {
        time.pause();
        info!("Gameplay paused");
    } else {
        time.unpause();
        info!("Gameplay resumed");
    }
}
