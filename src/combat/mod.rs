pub mod actions;
pub mod constants;
pub mod state;

pub use actions::{
    advance, apply_command, deceive, end_take, parry, pose, take, ActionOutcome, AdvanceOutcome,
    DeceiveOutcome, FencerCommand, ParryOutcome, TakeOutcome,
};
pub use state::{pair_mut, BladeShade, FencerState};
