//! Pose solving
//!
//! Stick input picks a point between nine keyframes; each joint eases toward
//! the interpolated angle at its own rate. Forward kinematics then turns the
//! angles into world-space joint positions for blade collision.

pub mod keyframes;
pub mod skeleton;
pub mod solver;

pub use keyframes::{target_angle, Joint, PoseName, ARTICULATED_JOINTS, KEYFRAMES};
pub use skeleton::Skeleton;
pub use solver::PoseState;
