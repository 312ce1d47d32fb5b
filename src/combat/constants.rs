//! Combat rule constants - all tunable values in one place
//!
//! These are the defaults behind `DuelConfig`. Timer values are in ticks,
//! distances in world units.

// Timer maxima (ticks)
pub const MAX_PARRY_TIMER: u32 = 64;
pub const MAX_DECEIVE_TIMER: u32 = 32;
/// Penalty for a Take attempted with no blade contact
pub const MISSED_TAKE_TIMER: u32 = 40;
/// A parry into an opponent's deceive costs this many times the normal penalty
pub const DECEIVED_PARRY_MULTIPLIER: f32 = 2.0;

// Footwork
pub const MAX_SPEED: f32 = 3.0;
/// Corps-a-corps: the fencers may not close nearer than this along X
pub const CORPS_A_CORPS_DISTANCE: f32 = 50.0;
pub const ARENA_HALF_WIDTH: f32 = 2000.0;
pub const START_OFFSET: f32 = 300.0;

// Body
pub const LIMB_LENGTH: f32 = 100.0;
pub const TORSO_LENGTH: f32 = 200.0;
/// Blade length in limb lengths
pub const BLADE_LIMBS: f32 = 2.5;

// Solid blade
/// Mix between the constraint angle and last frame's wrist angle
pub const DEFLECTION_BLEND: f32 = 0.5;

// Geometry
pub use crate::geometry::PARALLEL_NUDGE;

// Tactile feedback
pub const TAKE_LIGHT_VIBRATION: f32 = 0.5;

// Control sampling
pub const PARRY_TRIGGER_DEADZONE: f32 = 0.3;
pub const ADVANCE_STICK_DEADZONE: f32 = 0.1;
