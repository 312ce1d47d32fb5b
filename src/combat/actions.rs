//! Action handlers: advance, parry, deceive, take, end-take, pose
//!
//! Thrust, parry and deceive form a rock-paper-scissors triad resolved by
//! timers. A broken rule is never an error; it is simply a rejected or
//! penalized action, reported through `ActionOutcome`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{pair_mut, FencerState};
use crate::core::{DuelConfig, Side};
use crate::duel::{BoutEvent, MatchState};

/// Normalized action signal from the input layer, consumed once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FencerCommand {
    /// 1.0 full advance, -1.0 full retreat
    Advance(f32),
    /// Trigger travel in (0, 1]
    Parry(f32),
    /// Commitment in (0, 1]
    Deceive(f32),
    /// Any press; the amount is not used
    Take(f32),
    /// Fired once per release of the take button
    EndTake,
    /// Stick direction in [-1, 1] x [-1, 1]
    Pose(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceOutcome {
    /// Would walk through the opponent
    Blocked,
    Moved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParryOutcome {
    /// Locked out by a running deceive or an earlier parry
    Rejected,
    /// A harder press while already committed lengthened the own timer
    Extended { parry_timer: u32 },
    /// No blade to beat; own timer set
    Whiffed { parry_timer: u32 },
    /// Parried into a deceive; own timer set at the doubled penalty
    Deceived { parry_timer: u32 },
    /// Opponent knocked out of line
    Parried { opponent_timer: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeceiveOutcome {
    Rejected,
    /// `freed` is true when this released a deflected blade
    Deceiving { deception_timer: u32, freed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TakeOutcome {
    Rejected,
    /// No contact; own blade is out of line
    Whiffed { parry_timer: u32 },
    Took,
}

/// What a single command did
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Advance(AdvanceOutcome),
    Parry(ParryOutcome),
    Deceive(DeceiveOutcome),
    Take(TakeOutcome),
    /// Whether this fencer actually held the Take being released
    EndTake { released: bool },
    Pose,
}

/// Timer value implied by an analog amount, floored
fn scaled_timer(max: u32, amount: f32) -> u32 {
    (max as f32 * amount) as u32
}

/// Step along the piste; positive `amount` is toward the opponent
pub fn advance(
    fencers: &mut [FencerState; 2],
    side: Side,
    amount: f32,
    config: &DuelConfig,
) -> AdvanceOutcome {
    let (me, them) = pair_mut(fencers, side);

    if amount > 0.0 && (me.location.x - them.location.x).abs() <= config.corps_a_corps_distance {
        return AdvanceOutcome::Blocked;
    }

    me.location.x += amount * side.facing() * config.max_speed;
    me.location.x = me
        .location
        .x
        .clamp(-config.arena_half_width, config.arena_half_width);
    AdvanceOutcome::Moved
}

/// Beat the opponent's blade out of line.
///
/// Rules are checked strictly in order; the first that applies decides.
pub fn parry(
    fencers: &mut [FencerState; 2],
    sync: &MatchState,
    side: Side,
    amount: f32,
    config: &DuelConfig,
) -> ParryOutcome {
    let (me, them) = pair_mut(fencers, side);
    let implied = scaled_timer(config.max_parry_timer, amount);

    let outcome = if me.is_deceiving() {
        ParryOutcome::Rejected
    } else if me.is_out_of_line() && me.parry_timer < implied {
        // An analog trigger still travelling commits more fully
        me.parry_timer = implied;
        ParryOutcome::Extended {
            parry_timer: implied,
        }
    } else if me.is_out_of_line() {
        ParryOutcome::Rejected
    } else if !sync.blades_crossed() {
        me.parry_timer = implied;
        ParryOutcome::Whiffed {
            parry_timer: implied,
        }
    } else if them.is_deceiving() {
        let penalty =
            (config.max_parry_timer as f32 * amount * config.deceived_parry_multiplier) as u32;
        me.parry_timer = penalty;
        ParryOutcome::Deceived {
            parry_timer: penalty,
        }
    } else {
        them.parry_timer = implied;
        ParryOutcome::Parried {
            opponent_timer: implied,
        }
    };

    tracing::debug!("{} parry({:.2}): {:?}", side, amount, outcome);
    outcome
}

/// Slip the blade around a parry; also frees a deflected blade
pub fn deceive(
    fencers: &mut [FencerState; 2],
    side: Side,
    amount: f32,
    config: &DuelConfig,
) -> DeceiveOutcome {
    let me = &mut fencers[side.index()];
    if me.is_out_of_line() {
        return DeceiveOutcome::Rejected;
    }

    me.deception_timer = scaled_timer(config.max_deceive_timer, amount);
    let freed = me.deflected_wrist;
    me.deflected_wrist = false;

    tracing::debug!("{} deceives for {} ticks", side, me.deception_timer);
    DeceiveOutcome::Deceiving {
        deception_timer: me.deception_timer,
        freed,
    }
}

/// Try to tie up the opponent's blade
pub fn take(
    fencers: &mut [FencerState; 2],
    sync: &mut MatchState,
    side: Side,
    config: &DuelConfig,
    events: &mut Vec<BoutEvent>,
) -> TakeOutcome {
    let me = &mut fencers[side.index()];
    if me.is_out_of_line() || me.is_deceiving() || sync.is_taken(side) {
        return TakeOutcome::Rejected;
    }

    if !sync.blades_crossed() {
        me.parry_timer = config.missed_take_timer;
        tracing::debug!("{} takes at nothing", side);
        return TakeOutcome::Whiffed {
            parry_timer: config.missed_take_timer,
        };
    }

    sync.take_start(fencers, Some(side), config, events);
    TakeOutcome::Took
}

/// Let go of the take button
pub fn end_take(
    fencers: &mut [FencerState; 2],
    sync: &mut MatchState,
    side: Side,
    events: &mut Vec<BoutEvent>,
) -> bool {
    let held = sync.blade_taken_by == Some(side);
    sync.take_end(fencers, Some(side), events);
    held
}

/// Choose where the blade should go; a held Take follows the blade
pub fn pose(
    fencers: &mut [FencerState; 2],
    sync: &mut MatchState,
    side: Side,
    direction: Vec2,
    config: &DuelConfig,
    events: &mut Vec<BoutEvent>,
) {
    fencers[side.index()].pose.target = direction;
    if sync.blade_taken_by == Some(side) {
        sync.take_start(fencers, Some(side), config, events);
    }
}

/// Route one command to its handler
pub fn apply_command(
    fencers: &mut [FencerState; 2],
    sync: &mut MatchState,
    side: Side,
    command: FencerCommand,
    config: &DuelConfig,
    events: &mut Vec<BoutEvent>,
) -> ActionOutcome {
    match command {
        FencerCommand::Advance(amount) => {
            ActionOutcome::Advance(advance(fencers, side, amount, config))
        }
        FencerCommand::Parry(amount) => {
            ActionOutcome::Parry(parry(fencers, sync, side, amount, config))
        }
        FencerCommand::Deceive(amount) => {
            ActionOutcome::Deceive(deceive(fencers, side, amount, config))
        }
        FencerCommand::Take(_) => ActionOutcome::Take(take(fencers, sync, side, config, events)),
        FencerCommand::EndTake => ActionOutcome::EndTake {
            released: end_take(fencers, sync, side, events),
        },
        FencerCommand::Pose(direction) => {
            pose(fencers, sync, side, direction, config, events);
            ActionOutcome::Pose
        }
    }
}
