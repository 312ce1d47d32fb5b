//! Per-fencer combat state
//!
//! One instance per side. Timers gate which actions are legal; the pose
//! state carries the body that the blade geometry is read from.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::{DuelConfig, Side};
use crate::geometry::SlopeBox;
use crate::pose::PoseState;

/// Combat state for one fencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FencerState {
    pub side: Side,
    /// Hip position on the piste
    pub location: Vec3,
    /// Nonzero while out of line (missed a parry, or was parried)
    pub parry_timer: u32,
    /// Nonzero while a deceive is under way
    pub deception_timer: u32,
    /// The blade is being held off by the opponent's taken blade
    pub deflected_wrist: bool,
    pub pose: PoseState,
}

/// Gray levels for the renderer's blade and forearm tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BladeShade {
    pub blade: u8,
    pub forearm: u8,
}

impl FencerState {
    /// A fencer at rest on their starting mark
    pub fn new(side: Side, config: &DuelConfig) -> Self {
        let location = Vec3::new(-side.facing() * config.start_offset, 0.0, 0.0);
        Self {
            side,
            location,
            parry_timer: 0,
            deception_timer: 0,
            deflected_wrist: false,
            pose: PoseState::at_rest(location, side, config),
        }
    }

    /// Count both timers down by one tick
    pub fn decay_timers(&mut self) {
        self.parry_timer = self.parry_timer.saturating_sub(1);
        self.deception_timer = self.deception_timer.saturating_sub(1);
    }

    /// Out of line: most actions are locked
    pub fn is_out_of_line(&self) -> bool {
        self.parry_timer > 0
    }

    pub fn is_deceiving(&self) -> bool {
        self.deception_timer > 0
    }

    /// Current wrist-to-tip blade segment
    pub fn weapon(&self) -> SlopeBox {
        self.pose.skeleton.weapon()
    }

    pub fn current_pose(&self) -> Vec2 {
        self.pose.target
    }

    pub fn joint_angles(&self) -> [f32; 4] {
        self.pose.joint_angles
    }

    /// Darker blade while out of line, darker forearm while deceiving
    pub fn blade_shade(&self) -> BladeShade {
        fn fade(timer: u32, idle: u8) -> u8 {
            if timer == 0 {
                idle
            } else {
                128u32.saturating_sub(timer.saturating_mul(2)) as u8
            }
        }
        BladeShade {
            blade: fade(self.parry_timer, 255),
            forearm: fade(self.deception_timer, 211),
        }
    }
}

/// Borrow a fencer and their opponent mutably at the same time
pub fn pair_mut(fencers: &mut [FencerState; 2], side: Side) -> (&mut FencerState, &mut FencerState) {
    let (left, right) = fencers.split_at_mut(1);
    match side {
        Side::Left => (&mut left[0], &mut right[0]),
        Side::Right => (&mut right[0], &mut left[0]),
    }
}
