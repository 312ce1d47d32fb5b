//! Bout arena
//!
//! The two fencers live in fixed slots indexed by `Side`; "the opponent" is
//! always the other slot. Nothing here is global, so independent bouts can
//! run side by side.

use serde::{Deserialize, Serialize};

use super::events::BoutEvent;
use super::sync::MatchState;
use super::tick::run_bout_tick;
use crate::combat::{FencerCommand, FencerState};
use crate::core::{DuelConfig, Side, Tick};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bout {
    pub tick: Tick,
    pub fencers: [FencerState; 2],
    pub sync: MatchState,
    pub config: DuelConfig,
}

impl Bout {
    /// Both fencers at rest on their marks, nothing crossed or taken
    pub fn new(config: DuelConfig) -> Self {
        Self {
            tick: 0,
            fencers: [
                FencerState::new(Side::Left, &config),
                FencerState::new(Side::Right, &config),
            ],
            sync: MatchState::new(),
            config,
        }
    }

    /// Back to the opening position, keeping the config
    pub fn restart(&mut self) {
        tracing::info!("Bout restarted after {} ticks", self.tick);
        *self = Self::new(self.config.clone());
    }

    pub fn fencer(&self, side: Side) -> &FencerState {
        &self.fencers[side.index()]
    }

    pub fn fencer_mut(&mut self, side: Side) -> &mut FencerState {
        &mut self.fencers[side.index()]
    }

    /// Advance one frame, applying `commands` in order
    pub fn tick(&mut self, commands: &[(Side, FencerCommand)]) -> Vec<BoutEvent> {
        run_bout_tick(self, commands)
    }

    /// Broken invariants, described; empty when the state is consistent
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let max_parry = (self.config.max_parry_timer as f32
            * self.config.deceived_parry_multiplier.max(1.0)) as u32;

        if let Some(holder) = self.sync.blade_taken_by {
            if self.sync.blades_crossed_at.is_none() {
                violations.push(format!("{} holds a take without crossed blades", holder));
            }
        }

        for fencer in &self.fencers {
            let side = fencer.side;
            if fencer.deflected_wrist && !self.sync.is_taken(side) {
                violations.push(format!("{} is deflected without being taken", side));
            }
            if fencer.parry_timer > max_parry {
                violations.push(format!("{} parry timer {} exceeds {}", side, fencer.parry_timer, max_parry));
            }
            if fencer.deception_timer > self.config.max_deceive_timer {
                violations.push(format!(
                    "{} deception timer {} exceeds {}",
                    side, fencer.deception_timer, self.config.max_deceive_timer
                ));
            }
            if fencer.location.x.abs() > self.config.arena_half_width {
                violations.push(format!("{} left the arena at x={}", side, fencer.location.x));
            }
        }

        violations
    }
}

impl Default for Bout {
    fn default() -> Self {
        Self::new(DuelConfig::default())
    }
}
