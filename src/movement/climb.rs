//! Movement domain: ladder proximity, climb lock, and bounded climb motion.
//!
//! The controller owns the physics body mode while a climb is latched. Every
//! reset path hands it back as [`BodyMode::Dynamic`]; `sync_body_mode` is the
//! only system that mirrors it onto the rigid body.

use bevy::prelude::*;

use crate::movement::{Ladder, MoveIntent, MovementTuning};

/// Align a coordinate to the centre of its 1-unit grid cell.
pub fn snap(value: f32) -> f32 {
    value.floor() + 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Simulated by the motion integrator.
    #[default]
    Dynamic,
    /// Force-immune, moved directly by the climb step.
    Kinematic,
}

/// World-space capture of a ladder's handles, taken on zone enter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderAnchor {
    pub ladder: Entity,
    /// Horizontal position the climber is pinned to.
    pub x: f32,
    pub top_handle: f32,
    pub bottom_handle: f32,
}

impl LadderAnchor {
    pub fn capture(ladder: Entity, handles: &Ladder, transform: &Transform) -> Self {
        let origin = transform.translation.truncate();
        Self {
            ladder,
            x: origin.x,
            top_handle: origin.y + handles.top_handle.y,
            bottom_handle: origin.y + handles.bottom_handle.y,
        }
    }

    /// Snapped `(bottom, top)` range for a body centre of the given half height.
    pub fn range(&self, half_height: f32) -> (f32, f32) {
        (
            snap(self.bottom_handle + half_height),
            snap(self.top_handle + half_height),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    ZoneExit,
    HorizontalRelease,
    OutOfBounds,
    MissingAnchor,
}

/// Outcome of one fixed-rate climb step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClimbStep {
    /// Not climbing this step: the motion integrator steps the body. Also
    /// returned while latched but still a cell outside the ladder's range.
    #[default]
    Integrate,
    /// Latched but not holding a direction: idle stance, no motion.
    Hold,
    /// The climb was released this step; the body is back with the integrator.
    Reset(ResetCause),
    /// Kinematic climb: place the body at `position`. When `rising`, the
    /// climb-assist velocity is left on the body to carry it upward.
    Climb { position: Vec2, rising: bool },
}

/// Animation-facing summary of the climb sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClimbPose {
    #[default]
    None,
    Idle,
    Climbing,
}

#[derive(Component, Debug, Default, Clone)]
pub struct ClimbController {
    pub is_near_ladder: bool,
    pub climb_held: bool,
    pub has_started_climb: bool,
    /// Ladders whose zones currently contain the character, in entry order.
    pub(crate) overlapping: Vec<LadderAnchor>,
    /// Ladder the active climb is bound to. Cleared on every reset.
    pub(crate) anchor: Option<LadderAnchor>,
    pub(crate) body_mode: BodyMode,
    pub(crate) last_step: ClimbStep,
}

impl ClimbController {
    pub fn body_mode(&self) -> BodyMode {
        self.body_mode
    }

    pub fn anchor(&self) -> Option<&LadderAnchor> {
        self.anchor.as_ref()
    }

    /// Ladder a new climb would bind to: the most recently entered one still
    /// overlapping.
    pub fn candidate(&self) -> Option<&LadderAnchor> {
        self.overlapping.last()
    }

    pub fn last_step(&self) -> ClimbStep {
        self.last_step
    }

    pub fn pose(&self) -> ClimbPose {
        match (self.has_started_climb, self.climb_held) {
            (true, true) if self.body_mode == BodyMode::Kinematic => ClimbPose::Climbing,
            (true, false) => ClimbPose::Idle,
            _ => ClimbPose::None,
        }
    }

    /// Ladder-zone enter. The most recently entered ladder becomes the
    /// candidate anchor.
    pub fn enter_zone(&mut self, anchor: LadderAnchor) {
        self.overlapping.retain(|a| a.ladder != anchor.ladder);
        self.overlapping.push(anchor);
        self.is_near_ladder = true;
    }

    /// Ladder-zone exit. Proximity falls back to the ladders still
    /// overlapping. Leaving the ladder being climbed, or the last ladder,
    /// resets the climb immediately. Returns whether anything changed.
    pub fn exit_zone(&mut self, ladder: Entity) -> bool {
        let before = self.overlapping.len();
        self.overlapping.retain(|a| a.ladder != ladder);
        let left_overlap = self.overlapping.len() != before;
        let left_anchor = self.anchor.is_some_and(|a| a.ladder == ladder);

        self.is_near_ladder = !self.overlapping.is_empty();
        if !self.is_near_ladder {
            self.climb_held = false;
        }

        if left_anchor || (left_overlap && !self.is_near_ladder) {
            self.reset(ResetCause::ZoneExit);
            self.last_step = ClimbStep::Reset(ResetCause::ZoneExit);
        }
        left_overlap || left_anchor
    }

    /// Variable-rate derivation of `climb_held` and the climb latch.
    /// Returns true on the frame the climb latches.
    pub fn derive(&mut self, intent: &MoveIntent) -> bool {
        self.climb_held = self.is_near_ladder && intent.vertical_active();

        if !self.climb_held || self.has_started_climb {
            return false;
        }

        debug_assert!(
            !self.overlapping.is_empty(),
            "near a ladder without a captured anchor"
        );
        self.has_started_climb = true;
        self.anchor = self.candidate().copied();
        true
    }

    /// Release the climb and hand the body back to the integrator.
    /// Returns whether a climb was actually latched.
    pub fn reset(&mut self, cause: ResetCause) -> bool {
        let was_climbing = self.has_started_climb;
        self.has_started_climb = false;
        self.anchor = None;
        self.body_mode = BodyMode::Dynamic;
        if was_climbing {
            debug!("[CLIMB] Reset: {:?}", cause);
        }
        was_climbing
    }

    /// Fixed-rate climb step.
    pub fn step(
        &mut self,
        intent: &MoveIntent,
        position: Vec2,
        half_height: f32,
        dt: f32,
        tuning: &MovementTuning,
    ) -> ClimbStep {
        let step = self.compute_step(intent, position, half_height, dt, tuning);
        self.last_step = step;
        step
    }

    fn compute_step(
        &mut self,
        intent: &MoveIntent,
        position: Vec2,
        half_height: f32,
        dt: f32,
        tuning: &MovementTuning,
    ) -> ClimbStep {
        if !self.has_started_climb {
            return ClimbStep::Integrate;
        }

        if !self.climb_held {
            if intent.axis.x != 0.0 {
                self.reset(ResetCause::HorizontalRelease);
                return ClimbStep::Reset(ResetCause::HorizontalRelease);
            }
            return ClimbStep::Hold;
        }

        let Some(anchor) = self.anchor else {
            debug_assert!(false, "climb latched without a ladder anchor");
            error!("[CLIMB] Climb latched without a ladder anchor, resetting");
            self.reset(ResetCause::MissingAnchor);
            return ClimbStep::Reset(ResetCause::MissingAnchor);
        };

        let (bottom, top) = anchor.range(half_height);
        let current = snap(position.y);
        let next = current + intent.axis.y;

        if next > top || next < bottom {
            self.reset(ResetCause::OutOfBounds);
            return ClimbStep::Reset(ResetCause::OutOfBounds);
        }

        // One cell outside and heading in: stay latched, not pinned yet.
        if current > top || current < bottom {
            self.body_mode = BodyMode::Dynamic;
            return ClimbStep::Integrate;
        }

        if self.body_mode != BodyMode::Kinematic {
            debug!("[CLIMB] Body -> kinematic on ladder {:?}", anchor.ladder);
        }
        self.body_mode = BodyMode::Kinematic;

        let mut target = Vec2::new(anchor.x, position.y);
        // Only downward intent is translated here; upward motion comes from
        // the climb-assist velocity.
        if intent.axis.y < 0.0 {
            target.y += intent.axis.y * dt * tuning.climb_speed;
        }

        ClimbStep::Climb {
            position: target,
            rising: intent.axis.y > 0.0,
        }
    }
}
