//! Tick system - one frame of the bout
//!
//! Strict order within a tick:
//! blade crossing -> take upkeep -> timer decay -> commands -> pose solve
//!
//! Crossing is always measured on the skeletons left by the previous
//! tick's pose solve, so no handler ever sees a half-updated opponent.

use super::bout::Bout;
use super::events::BoutEvent;
use super::sync::MatchState;
use crate::combat::{apply_command, FencerCommand, FencerState};
use crate::core::{DuelConfig, Side, Tick};

/// Run one frame of `bout`, returning everything that happened
pub fn run_bout_tick(bout: &mut Bout, commands: &[(Side, FencerCommand)]) -> Vec<BoutEvent> {
    let mut events = Vec::new();
    let tick = bout.tick;
    let Bout {
        fencers,
        sync,
        config,
        ..
    } = bout;

    // Blades as they stood at the end of the last frame
    let was_crossed = sync.blades_crossed();
    match (was_crossed, sync.recompute_crossing(fencers, config)) {
        (false, Some(at)) => events.push(BoutEvent::BladesCrossed { tick, at }),
        (true, None) => events.push(BoutEvent::BladesParted { tick }),
        _ => {}
    }
    sync.maintain_take(fencers, config, &mut events);

    for fencer in fencers.iter_mut() {
        fencer.decay_timers();
    }

    for &(side, command) in commands {
        let outcome = apply_command(fencers, sync, side, command, config, &mut events);
        events.push(BoutEvent::Action {
            tick,
            side,
            outcome,
        });
    }

    for side in Side::ALL {
        solve_pose(fencers, sync, side, config, tick, &mut events);
    }

    bout.tick += 1;
    events
}

/// Ease one fencer's joints, honour the solid blade, then place the body
fn solve_pose(
    fencers: &mut [FencerState; 2],
    sync: &MatchState,
    side: Side,
    config: &DuelConfig,
    tick: Tick,
    events: &mut Vec<BoutEvent>,
) {
    let fencer = &mut fencers[side.index()];

    fencer.pose.step_toward_target();
    if fencer.deflected_wrist {
        fencer
            .pose
            .deflect_toward(sync.contact_point, config.deflection_blend);
    }
    fencer.pose.commit_wrist_angle();
    fencer.pose.update_skeleton(fencer.location, side, config);

    // Solid objects: a blade that swept through the taken blade is held off it
    if sync.is_taken(side) && !fencer.deflected_wrist && fencer.pose.sweeps_through(sync.contact_point) {
        fencer.deflected_wrist = true;
        tracing::debug!("{} blade stopped against the taken blade", side);
        events.push(BoutEvent::WristDeflected { tick, side });
    }
}
