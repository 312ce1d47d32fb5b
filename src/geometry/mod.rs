//! Planar geometry for blades and joints
//!
//! All functions work in the XY plane and ignore Z. Nothing here allocates
//! or keeps state.

pub mod planar;
pub mod slope_box;

pub use planar::{angle_from, clamp_radial, lerp, point_in_quad, side};
pub use slope_box::{
    line_intersection, line_intersection_nudged, segment_intersection, segment_intersection_nudged,
    SlopeBox, PARALLEL_NUDGE,
};
