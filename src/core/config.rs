//! Duel configuration with documented constants
//!
//! Every rule number lives here so that a bout can be re-tuned from a TOML
//! file without touching the rules themselves. Defaults come from
//! `combat::constants` and reproduce the stock game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::constants::*;
use crate::core::error::{DuelError, Result};

/// Configuration for the combat rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    // === TIMERS ===
    /// Ticks a fully committed parry locks out its victim (or a whiffing parrier)
    ///
    /// Analog parries scale this by trigger travel, floored.
    pub max_parry_timer: u32,

    /// Ticks a fully committed deceive lasts
    pub max_deceive_timer: u32,

    /// Out-of-line penalty for a Take that finds no blade
    pub missed_take_timer: u32,

    /// Penalty multiplier for parrying into an opponent's deceive
    pub deceived_parry_multiplier: f32,

    // === FOOTWORK ===
    /// Distance covered per tick at full stick deflection
    pub max_speed: f32,

    /// Minimum X separation the fencers keep when advancing
    pub corps_a_corps_distance: f32,

    /// Fencers are clamped to [-arena_half_width, +arena_half_width]
    pub arena_half_width: f32,

    /// Starting distance of each hip from the centre line
    pub start_offset: f32,

    // === BODY ===
    /// Length of upper arm and forearm
    pub limb_length: f32,

    /// Hip to shoulder
    pub torso_length: f32,

    /// Blade length expressed in limb lengths
    pub blade_limbs: f32,

    // === SOLID BLADE ===
    /// Weight of last frame's wrist angle when the blade is deflected
    ///
    /// 0.0 snaps straight onto the constraint, 1.0 ignores it.
    pub deflection_blend: f32,

    // === GEOMETRY ===
    /// Slope nudge applied to parallel blade lines
    pub parallel_nudge: f32,

    // === FEEDBACK ===
    /// Light-motor level while blades are tied
    pub take_light_vibration: f32,

    // === CONTROLS ===
    /// Parry trigger travel below this is ignored
    pub parry_trigger_deadzone: f32,

    /// Advance stick deflection below this is ignored
    pub advance_stick_deadzone: f32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            max_parry_timer: MAX_PARRY_TIMER,
            max_deceive_timer: MAX_DECEIVE_TIMER,
            missed_take_timer: MISSED_TAKE_TIMER,
            deceived_parry_multiplier: DECEIVED_PARRY_MULTIPLIER,

            max_speed: MAX_SPEED,
            corps_a_corps_distance: CORPS_A_CORPS_DISTANCE,
            arena_half_width: ARENA_HALF_WIDTH,
            start_offset: START_OFFSET,

            limb_length: LIMB_LENGTH,
            torso_length: TORSO_LENGTH,
            blade_limbs: BLADE_LIMBS,

            deflection_blend: DEFLECTION_BLEND,
            parallel_nudge: PARALLEL_NUDGE,
            take_light_vibration: TAKE_LIGHT_VIBRATION,

            parry_trigger_deadzone: PARRY_TRIGGER_DEADZONE,
            advance_stick_deadzone: ADVANCE_STICK_DEADZONE,
        }
    }
}

impl DuelConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DuelConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_parry_timer == 0 || self.max_deceive_timer == 0 {
            return Err(DuelError::InvalidConfig(
                "timer maxima must be positive".into(),
            ));
        }

        if self.max_speed <= 0.0
            || self.limb_length <= 0.0
            || self.torso_length <= 0.0
            || self.blade_limbs <= 0.0
        {
            return Err(DuelError::InvalidConfig(
                "speed and body lengths must be positive".into(),
            ));
        }

        if self.arena_half_width <= 0.0 {
            return Err(DuelError::InvalidConfig(format!(
                "arena_half_width ({}) must be positive",
                self.arena_half_width
            )));
        }

        if self.corps_a_corps_distance >= 2.0 * self.start_offset {
            return Err(DuelError::InvalidConfig(format!(
                "corps_a_corps_distance ({}) must be < starting separation ({})",
                self.corps_a_corps_distance,
                2.0 * self.start_offset
            )));
        }

        if self.start_offset > self.arena_half_width {
            return Err(DuelError::InvalidConfig(format!(
                "start_offset ({}) lies outside the arena ({})",
                self.start_offset, self.arena_half_width
            )));
        }

        if !(0.0..=1.0).contains(&self.deflection_blend) {
            return Err(DuelError::InvalidConfig(format!(
                "deflection_blend ({}) must be within [0, 1]",
                self.deflection_blend
            )));
        }

        if self.parallel_nudge == 0.0 {
            return Err(DuelError::InvalidConfig(
                "parallel_nudge must be nonzero".into(),
            ));
        }

        Ok(())
    }
}
