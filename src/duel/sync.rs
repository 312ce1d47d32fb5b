//! Match synchronization: blade crossing and the Take (prise de fer)
//!
//! A Take ties both blades together with one fencer as aggressor. It ends
//! when the aggressor lets go, when the victim deceives out of it, or as
//! soon as the blades stop crossing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::events::BoutEvent;
use crate::combat::FencerState;
use crate::core::{DuelConfig, Side};
use crate::geometry::segment_intersection_nudged;

/// Shared state of the two blades
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Where the blade segments cross this tick
    pub blades_crossed_at: Option<Vec3>,
    /// Fencer currently imposing a Take
    pub blade_taken_by: Option<Side>,
    /// Midpoint of the aggressor's blade; the victim's blade pivots on it
    pub contact_point: Vec3,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blades_crossed(&self) -> bool {
        self.blades_crossed_at.is_some()
    }

    /// Is `side` the victim of a Take?
    pub fn is_taken(&self, side: Side) -> bool {
        self.blade_taken_by == Some(side.opponent())
    }

    /// Intersect both blades as they stood at the end of the last pose solve
    pub fn recompute_crossing(&mut self, fencers: &[FencerState; 2], config: &DuelConfig) -> Option<Vec3> {
        let left = fencers[Side::Left.index()].weapon();
        let right = fencers[Side::Right.index()].weapon();
        self.blades_crossed_at = segment_intersection_nudged(&left, &right, config.parallel_nudge);
        self.blades_crossed_at
    }

    /// Begin (or refresh) a Take by `aggressor`.
    ///
    /// Without crossed blades this falls through to `take_end`, which is how
    /// a Take breaks when the fencers drift apart.
    pub fn take_start(
        &mut self,
        fencers: &mut [FencerState; 2],
        aggressor: Option<Side>,
        config: &DuelConfig,
        events: &mut Vec<BoutEvent>,
    ) {
        let Some(aggressor) = aggressor else {
            return;
        };
        if self.blades_crossed_at.is_none() {
            self.take_end(fencers, Some(aggressor), events);
            return;
        }

        let newly_taken = self.blade_taken_by != Some(aggressor);
        self.blade_taken_by = Some(aggressor);
        self.contact_point = fencers[aggressor.index()].weapon().midpoint();

        if newly_taken {
            tracing::debug!("{} takes the blade at {:?}", aggressor, self.contact_point);
            events.push(BoutEvent::TakeStarted {
                aggressor,
                contact: self.contact_point,
            });
            for side in [aggressor, aggressor.opponent()] {
                events.push(BoutEvent::Vibration {
                    side,
                    heavy: 0.0,
                    light: config.take_light_vibration,
                });
            }
        }
    }

    /// Release a Take. Only the current holder can end it.
    pub fn take_end(
        &mut self,
        fencers: &mut [FencerState; 2],
        aggressor: Option<Side>,
        events: &mut Vec<BoutEvent>,
    ) {
        let Some(aggressor) = aggressor else {
            return;
        };
        if self.blade_taken_by != Some(aggressor) {
            return;
        }

        fencers[aggressor.opponent().index()].deflected_wrist = false;
        for side in [aggressor, aggressor.opponent()] {
            events.push(BoutEvent::Vibration {
                side,
                heavy: 0.0,
                light: 0.0,
            });
        }
        self.blade_taken_by = None;

        tracing::debug!("{} releases the blade", aggressor);
        events.push(BoutEvent::TakeEnded { aggressor });
    }

    /// Re-assert the current Take so the pivot follows the blades, or let it
    /// lapse if they no longer cross
    pub fn maintain_take(
        &mut self,
        fencers: &mut [FencerState; 2],
        config: &DuelConfig,
        events: &mut Vec<BoutEvent>,
    ) {
        if let Some(holder) = self.blade_taken_by {
            self.take_start(fencers, Some(holder), config, events);
        }
    }
}
