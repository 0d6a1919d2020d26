//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ControlEnabled, MoveIntent, MovementInput, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (ladder climbing)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
}

pub(crate) fn sample_intent(
    input: Res<MovementInput>,
    mut query: Query<(&ControlEnabled, &mut MoveIntent), With<Player>>,
) {
    for (control, mut intent) in &mut query {
        *intent = MoveIntent::sample(&input, *control);

        if intent.horizontal_active() || intent.vertical_active() {
            trace!("[INPUT] x={} y={}", intent.axis.x, intent.axis.y);
        }
    }
}
