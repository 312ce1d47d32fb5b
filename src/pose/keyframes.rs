//! Keyframe table and bilinear target interpolation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::lerp;

/// Joints of the stick figure, in chain order from the hip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Joint {
    Hip = 0,
    Shoulder = 1,
    Elbow = 2,
    Wrist = 3,
    /// End of the chain; has a position but no angle
    SwordTip = 4,
}

impl Joint {
    pub const POINTS: usize = 5;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Joints that carry an angle (everything but the sword tip)
pub const ARTICULATED_JOINTS: usize = 4;

/// Named keyframes. "Close" is toward the fencer's own body, "far" toward
/// full extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum PoseName {
    Rest = 0,
    CloseLow = 1,
    Low = 2,
    FarLow = 3,
    CloseMid = 4,
    Mid = 5,
    FarMid = 6,
    CloseHigh = 7,
    High = 8,
    FarHigh = 9,
}

/// Joint angles in degrees: hip, shoulder, elbow, wrist
pub const KEYFRAMES: [[f32; ARTICULATED_JOINTS]; 10] = [
    [0.0, 30.0, 0.0, -15.0],   // rest
    [0.0, 115.0, 55.0, -80.0], // close low
    [0.0, 50.0, 15.0, 40.0],   // low
    [0.0, 25.0, 20.0, 15.0],   // far low
    [0.0, 150.0, 25.0, -70.0], // close mid
    [0.0, 50.0, 15.0, -55.0],  // mid
    [0.0, 15.0, 10.0, 0.0],    // far mid
    [0.0, 80.0, -85.0, -91.0], // close high
    [0.0, 50.0, -40.0, -55.0], // high
    [0.0, 5.0, -5.0, -10.0],   // far high
];

impl PoseName {
    pub fn angles(self) -> [f32; ARTICULATED_JOINTS] {
        KEYFRAMES[self as usize]
    }

    fn angle(self, joint: usize) -> f32 {
        KEYFRAMES[self as usize][joint]
    }
}

/// Desired angle of `joint` for a stick position in [-1,1]x[-1,1].
///
/// The vertical half picks the high or low row, blended from the mid row by
/// |y|; the horizontal half picks the far or close column by the sign of x.
/// The centre column and the chosen column are blended by |x|.
pub fn target_angle(pose: Vec2, joint: usize) -> f32 {
    use PoseName::*;

    let (row_end, far_end, close_end, t) = if pose.y > 0.0 {
        (High, FarHigh, CloseHigh, pose.y)
    } else {
        (Low, FarLow, CloseLow, -pose.y)
    };

    let centre = lerp(Mid.angle(joint), row_end.angle(joint), t);
    if pose.x > 0.0 {
        let far = lerp(FarMid.angle(joint), far_end.angle(joint), t);
        lerp(centre, far, pose.x)
    } else {
        let close = lerp(CloseMid.angle(joint), close_end.angle(joint), t);
        lerp(centre, close, -pose.x)
    }
}
