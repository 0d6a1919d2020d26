//! Content domain: RON-backed movement tuning and level layout.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{BlockDef, LadderDef, LevelLayout, MovementTuningDef, PlayerDef, Vec2Def};
pub use loader::{ContentLoadError, load_all_content, parse_single};
pub use validation::{ValidationError, validate_level, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load content into resources, falling back to built-in defaults on any
/// load or validation failure.
fn load_content(mut commands: Commands) {
    let (tuning, level) = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                warn!("[CONTENT] {}", e);
            }
            warn!("[CONTENT] Using built-in movement tuning and level");
            (MovementTuning::default(), LevelLayout::default())
        }
    };

    let tuning = checked_or_default(tuning, validate_tuning, "movement tuning");
    let level = checked_or_default(level, validate_level, "level layout");

    info!(
        "[CONTENT] Loaded level '{}': {} blocks, {} ladders, jump height {:.2}",
        level.name,
        level.blocks.len(),
        level.ladders.len(),
        tuning.single_jump_height()
    );

    commands.insert_resource(tuning);
    commands.insert_resource(level);
}

fn checked_or_default<T: Default>(
    value: T,
    validate: fn(&T) -> Vec<ValidationError>,
    what: &str,
) -> T {
    let errors = validate(&value);
    if errors.is_empty() {
        return value;
    }
    for e in &errors {
        warn!("[CONTENT] Invalid {}: {}", what, e);
    }
    T::default()
}
