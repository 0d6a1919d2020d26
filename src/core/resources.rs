//! Core domain: shared resources for gameplay gating.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Flip a single source. Returns whether that source is now pausing.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if self.sources.remove(&source) {
            false
        } else {
            self.sources.insert(source);
            true
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Option<Res<GameplayPaused>>) -> bool {
    paused.is_none_or(|p| !p.is_paused())
}
