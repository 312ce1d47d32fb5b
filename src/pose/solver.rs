//! Per-frame joint stepping and the solid-blade wrist correction

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::keyframes::{target_angle, Joint, PoseName, ARTICULATED_JOINTS};
use super::skeleton::Skeleton;
use crate::core::{DuelConfig, Side};
use crate::geometry::{angle_from, lerp, point_in_quad};

/// Everything the pose solver remembers about one fencer's body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseState {
    /// Desired stick direction, each axis in [-1, 1]
    pub target: Vec2,
    /// Current hip, shoulder, elbow and wrist angles in degrees
    pub joint_angles: [f32; ARTICULATED_JOINTS],
    /// Wrist angle at the end of the previous solve
    pub previous_wrist_angle: f32,
    /// Joint positions from the latest forward-kinematics pass
    pub skeleton: Skeleton,
    /// Joint positions from the pass before that
    pub previous_skeleton: Skeleton,
}

impl PoseState {
    /// A body at the rest keyframe, already placed in the world
    pub fn at_rest(location: Vec3, side: Side, config: &DuelConfig) -> Self {
        let joint_angles = PoseName::Rest.angles();
        let skeleton = Skeleton::solve(location, &joint_angles, side, config);
        Self {
            target: Vec2::ZERO,
            joint_angles,
            previous_wrist_angle: joint_angles[Joint::Wrist.index()],
            skeleton,
            previous_skeleton: skeleton,
        }
    }

    /// Move every joint one step toward its interpolated target.
    ///
    /// Joint `i` turns at most `i + 1` degrees per frame and snaps onto the
    /// target once within that margin, so the wrist is quicker than the
    /// shoulder.
    pub fn step_toward_target(&mut self) {
        for joint in 0..ARTICULATED_JOINTS {
            let desired = target_angle(self.target, joint);
            let rate = (joint + 1) as f32;
            let difference = self.joint_angles[joint] - desired;
            if difference.abs() <= rate {
                self.joint_angles[joint] = desired;
            } else if difference < 0.0 {
                self.joint_angles[joint] += rate;
            } else if difference > 0.0 {
                self.joint_angles[joint] -= rate;
            }
        }
    }

    /// Bend the wrist toward `contact` instead of through it.
    ///
    /// The constraint angle is measured from where the wrist stood last frame
    /// and blended with last frame's wrist angle, so the correction settles
    /// over a few frames instead of popping. Both fencers measure the angle
    /// in world coordinates.
    pub fn deflect_toward(&mut self, contact: Vec3, blend: f32) {
        let constrained = angle_from(self.skeleton.wrist(), contact);
        self.joint_angles[Joint::Wrist.index()] =
            lerp(constrained, self.previous_wrist_angle, blend);
    }

    /// Remember this frame's wrist angle for the next deflection blend
    pub fn commit_wrist_angle(&mut self) {
        self.previous_wrist_angle = self.joint_angles[Joint::Wrist.index()];
    }

    /// Did the blade sweep across `point` between the last two passes?
    ///
    /// The quad is wrist, tip, previous tip, previous wrist.
    pub fn sweeps_through(&self, point: Vec3) -> bool {
        point_in_quad(
            point,
            self.skeleton.wrist(),
            self.skeleton.sword_tip(),
            self.previous_skeleton.sword_tip(),
            self.previous_skeleton.wrist(),
        )
    }

    /// Recompute joint positions, keeping the old ones for sweep tests
    pub fn update_skeleton(&mut self, location: Vec3, side: Side, config: &DuelConfig) {
        self.previous_skeleton = self.skeleton;
        self.skeleton = Skeleton::solve(location, &self.joint_angles, side, config);
    }
}
