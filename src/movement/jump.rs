//! Movement domain: jump lifecycle state machine.

use bevy::prelude::*;

/// The jump lifecycle. `Grounded` and `InFlight` are the only states that can
/// hold across ticks; `PrepareToJump` and `Landed` always advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum JumpState {
    #[default]
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

/// Lifecycle notifications produced by the jump state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpLifecycle {
    Jumped,
    Landed,
    StopJump,
}

#[derive(Component, Debug, Default, Clone)]
pub struct JumpController {
    pub state: JumpState,
    /// Takeoff request. True for exactly one tick per jump, until consumed.
    pub jump: bool,
    /// Early-release request, consumed by the velocity resolver.
    pub stop_jump: bool,
}

impl JumpController {
    /// Jump-release edge. Applies in every state.
    pub fn release_jump(&mut self) -> JumpLifecycle {
        self.stop_jump = true;
        JumpLifecycle::StopJump
    }

    /// Advance the lifecycle by exactly one step. `jump_pressed` is the
    /// press edge observed this frame; only `Grounded` looks at it.
    pub fn tick(&mut self, jump_pressed: bool, grounded: bool) -> Option<JumpLifecycle> {
        self.jump = false;

        match self.state {
            JumpState::Grounded => {
                if jump_pressed {
                    self.state = JumpState::PrepareToJump;
                }
                None
            }
            JumpState::PrepareToJump => {
                self.state = JumpState::Jumping;
                self.jump = true;
                self.stop_jump = false;
                None
            }
            JumpState::Jumping => {
                if grounded {
                    return None;
                }
                self.state = JumpState::InFlight;
                Some(JumpLifecycle::Jumped)
            }
            JumpState::InFlight => {
                if !grounded {
                    return None;
                }
                self.state = JumpState::Landed;
                Some(JumpLifecycle::Landed)
            }
            JumpState::Landed => {
                self.state = JumpState::Grounded;
                None
            }
        }
    }
}
