//! Events produced by a bout tick
//!
//! Returned from `run_bout_tick` for the renderer, the tactile-feedback
//! collaborator and the runner's statistics.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::combat::ActionOutcome;
use crate::core::{Side, Tick};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoutEvent {
    /// The blades started crossing this tick
    BladesCrossed { tick: Tick, at: Vec3 },
    /// The blades stopped crossing this tick
    BladesParted { tick: Tick },
    /// A command was applied (successfully or not)
    Action {
        tick: Tick,
        side: Side,
        outcome: ActionOutcome,
    },
    /// A Take began; `contact` is the deflection pivot
    TakeStarted { aggressor: Side, contact: Vec3 },
    /// A Take was released or broken
    TakeEnded { aggressor: Side },
    /// A blade swept through the taken blade and is now held off it
    WristDeflected { tick: Tick, side: Side },
    /// Rumble level changed for one fencer's controller
    Vibration { side: Side, heavy: f32, light: f32 },
}
