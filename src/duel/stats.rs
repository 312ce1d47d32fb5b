//! Per-bout counters accumulated from tick events

use serde::{Deserialize, Serialize};

use super::events::BoutEvent;
use crate::combat::{ActionOutcome, DeceiveOutcome, ParryOutcome, TakeOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutStats {
    pub ticks: u64,
    pub crossings: u32,
    pub parries_landed: u32,
    pub parries_whiffed: u32,
    pub parries_deceived: u32,
    pub deceives: u32,
    pub takes_started: u32,
    pub takes_whiffed: u32,
    pub takes_ended: u32,
    pub deflections: u32,
    pub rejected_actions: u32,
}

impl BoutStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick's events into the counters
    pub fn record(&mut self, events: &[BoutEvent]) {
        self.ticks += 1;
        for event in events {
            match event {
                BoutEvent::BladesCrossed { .. } => self.crossings += 1,
                BoutEvent::TakeStarted { .. } => self.takes_started += 1,
                BoutEvent::TakeEnded { .. } => self.takes_ended += 1,
                BoutEvent::WristDeflected { .. } => self.deflections += 1,
                BoutEvent::Action { outcome, .. } => self.record_outcome(outcome),
                BoutEvent::BladesParted { .. } | BoutEvent::Vibration { .. } => {}
            }
        }
    }

    fn record_outcome(&mut self, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Parry(ParryOutcome::Parried { .. }) => self.parries_landed += 1,
            ActionOutcome::Parry(ParryOutcome::Whiffed { .. }) => self.parries_whiffed += 1,
            ActionOutcome::Parry(ParryOutcome::Deceived { .. }) => self.parries_deceived += 1,
            ActionOutcome::Deceive(DeceiveOutcome::Deceiving { .. }) => self.deceives += 1,
            ActionOutcome::Take(TakeOutcome::Whiffed { .. }) => self.takes_whiffed += 1,
            ActionOutcome::Parry(ParryOutcome::Rejected)
            | ActionOutcome::Deceive(DeceiveOutcome::Rejected)
            | ActionOutcome::Take(TakeOutcome::Rejected) => self.rejected_actions += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_counts_outcomes() {
        let mut stats = BoutStats::new();
        stats.record(&[
            BoutEvent::Action {
                tick: 0,
                side: Side::Left,
                outcome: ActionOutcome::Parry(ParryOutcome::Parried { opponent_timer: 64 }),
            },
            BoutEvent::Action {
                tick: 0,
                side: Side::Right,
                outcome: ActionOutcome::Take(TakeOutcome::Rejected),
            },
            BoutEvent::TakeEnded { aggressor: Side::Left },
        ]);
        stats.record(&[]);

        assert_eq!(stats.ticks, 2);
        assert_eq!(stats.parries_landed, 1);
        assert_eq!(stats.rejected_actions, 1);
        assert_eq!(stats.takes_ended, 1);
        assert_eq!(stats.takes_started, 0);
    }
}
