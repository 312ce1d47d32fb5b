//! Forward kinematics for the stick figure
//!
//! The figure stands on the X axis with its hip at the fencer's location.
//! Each bone is rotated by its own joint angle (not the accumulated chain
//! angle) and the right-hand fencer is mirrored in X.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::keyframes::{Joint, ARTICULATED_JOINTS};
use crate::core::{DuelConfig, Side};
use crate::geometry::SlopeBox;

/// World-space joint positions: hip, shoulder, elbow, wrist, sword tip
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Skeleton {
    pub joints: [Vec3; Joint::POINTS],
}

impl Skeleton {
    /// Bone vectors in the unrotated figure
    fn bones(config: &DuelConfig) -> [Vec3; ARTICULATED_JOINTS] {
        [
            Vec3::new(0.0, -config.torso_length, 0.0),
            Vec3::new(config.limb_length, 0.0, 0.0),
            Vec3::new(config.limb_length, 0.0, 0.0),
            Vec3::new(config.limb_length * config.blade_limbs, 0.0, 0.0),
        ]
    }

    /// Place every joint from the hip outward
    pub fn solve(
        location: Vec3,
        angles: &[f32; ARTICULATED_JOINTS],
        side: Side,
        config: &DuelConfig,
    ) -> Self {
        let bones = Self::bones(config);
        let mut joints = [Vec3::ZERO; Joint::POINTS];
        joints[Joint::Hip.index()] = location;

        for (i, bone) in bones.iter().enumerate() {
            let mut offset = Quat::from_rotation_z(angles[i].to_radians()) * *bone;
            if side == Side::Right {
                offset.x = -offset.x;
            }
            joints[i + 1] = joints[i] + offset;
        }

        Self { joints }
    }

    pub fn joint(&self, joint: Joint) -> Vec3 {
        self.joints[joint.index()]
    }

    pub fn wrist(&self) -> Vec3 {
        self.joint(Joint::Wrist)
    }

    pub fn sword_tip(&self) -> Vec3 {
        self.joint(Joint::SwordTip)
    }

    /// The blade as a wrist-to-tip segment
    pub fn weapon(&self) -> SlopeBox {
        SlopeBox::new(self.wrist(), self.sword_tip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::PoseName;

    fn close(a: Vec3, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 0.01 && (a.y - y).abs() < 0.01
    }

    #[test]
    fn test_straight_figure() {
        let config = DuelConfig::default();
        let skel = Skeleton::solve(Vec3::ZERO, &[0.0; 4], Side::Left, &config);
        assert!(close(skel.joint(Joint::Shoulder), 0.0, -200.0));
        assert!(close(skel.joint(Joint::Elbow), 100.0, -200.0));
        assert!(close(skel.wrist(), 200.0, -200.0));
        assert!(close(skel.sword_tip(), 450.0, -200.0));
    }

    #[test]
    fn test_rest_pose_left() {
        let config = DuelConfig::default();
        let skel = Skeleton::solve(
            Vec3::new(-300.0, 0.0, 0.0),
            &PoseName::Rest.angles(),
            Side::Left,
            &config,
        );
        assert!(close(skel.joint(Joint::Elbow), -213.397, -150.0));
        assert!(close(skel.wrist(), -113.397, -150.0));
        assert!(close(skel.sword_tip(), 128.085, -214.705));
    }

    #[test]
    fn test_right_fencer_is_mirrored() {
        let config = DuelConfig::default();
        let angles = PoseName::Rest.angles();
        let left = Skeleton::solve(Vec3::new(-300.0, 0.0, 0.0), &angles, Side::Left, &config);
        let right = Skeleton::solve(Vec3::new(300.0, 0.0, 0.0), &angles, Side::Right, &config);
        for (l, r) in left.joints.iter().zip(right.joints.iter()) {
            assert!((l.x + r.x).abs() < 0.01);
            assert!((l.y - r.y).abs() < 0.01);
        }
    }

    #[test]
    fn test_weapon_runs_wrist_to_tip() {
        let config = DuelConfig::default();
        let skel = Skeleton::solve(Vec3::ZERO, &[0.0; 4], Side::Left, &config);
        let blade = skel.weapon();
        assert_eq!(blade.start, skel.wrist());
        assert_eq!(blade.end, skel.sword_tip());
    }
}
