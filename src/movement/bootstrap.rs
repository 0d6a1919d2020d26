//! Movement domain: player and level bootstrap from the loaded layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelLayout;
use crate::movement::{
    AnimationSignals, CharacterBody, ClimbController, ControlEnabled, GameLayer, Ground,
    JumpController, Ladder, MoveIntent, MovementState, MovementTuning, Player, TargetVelocity,
};

/// Spawn the player at the layout's spawn point.
pub(crate) fn bootstrap_player_from_data(
    mut commands: Commands,
    level: Res<LevelLayout>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn: Vec2 = level.player.spawn.into();
    let size: Vec2 = level.player.size.into();

    let player = commands
        .spawn((
            // Identity & control state
            (
                Player,
                ControlEnabled::default(),
                MoveIntent::default(),
                MovementState::default(),
                JumpController::default(),
                ClimbController::default(),
                TargetVelocity::default(),
                AnimationSignals::default(),
                CharacterBody {
                    half_size: size * 0.5,
                },
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is applied by integrate_motion
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Ladder]),
            ),
        ))
        .id();

    info!(
        "Spawning player {:?} at ({}, {}): max_speed={}, takeoff={}",
        player,
        spawn.x,
        spawn.y,
        tuning.max_speed,
        tuning.takeoff_velocity()
    );
}

/// Spawn static geometry and ladder zones.
pub(crate) fn spawn_level(mut commands: Commands, level: Res<LevelLayout>) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let ladder_color = Color::srgba(0.6, 0.45, 0.25, 0.8);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let ladder_layers = CollisionLayers::new(GameLayer::Ladder, [GameLayer::Player]);

    for block in &level.blocks {
        let size: Vec2 = block.size.into();
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(block.position.x, block.position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    for ladder in &level.ladders {
        let size: Vec2 = ladder.size.into();
        commands.spawn((
            Ladder {
                top_handle: ladder.top_handle.into(),
                bottom_handle: ladder.bottom_handle.into(),
            },
            Sprite {
                color: ladder_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(ladder.position.x, ladder.position.y, 0.5),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            ladder_layers,
        ));
    }

    info!(
        "Spawned level '{}' with {} blocks and {} ladders",
        level.name,
        level.blocks.len(),
        level.ladders.len()
    );
}
