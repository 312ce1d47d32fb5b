//! Property tests for blade geometry and timer bookkeeping

use fencing_duel::combat::*;
use fencing_duel::core::Side;
use fencing_duel::duel::{Bout, BoutEvent};
use fencing_duel::geometry::{
    angle_from, line_intersection, segment_intersection, SlopeBox, PARALLEL_NUDGE,
};
use glam::{Vec2, Vec3};
use proptest::prelude::*;

fn along(origin: Vec3, degrees: f32, distance: f32) -> Vec3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    origin + Vec3::new(cos, sin, 0.0) * distance
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop::bool::ANY.prop_map(|left| if left { Side::Left } else { Side::Right })
}

fn command_strategy() -> impl Strategy<Value = FencerCommand> {
    prop_oneof![
        (-1.0f32..=1.0).prop_map(FencerCommand::Advance),
        (0.05f32..=1.0).prop_map(FencerCommand::Parry),
        (0.05f32..=1.0).prop_map(FencerCommand::Deceive),
        Just(FencerCommand::Take(1.0)),
        Just(FencerCommand::EndTake),
        (-1.0f32..=1.0, -1.0f32..=1.0).prop_map(|(x, y)| FencerCommand::Pose(Vec2::new(x, y))),
    ]
}

fn seg(x0: f32, y0: f32, x1: f32, y1: f32) -> SlopeBox {
    SlopeBox::new(Vec3::new(x0, y0, 0.0), Vec3::new(x1, y1, 0.0))
}

#[test]
fn test_parallel_lines_meet_where_the_nudge_puts_them() {
    // y = x and y = x + 1: equal slopes, so the second slope is nudged
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(0.0, 1.0, 10.0, 11.0);
    let p = line_intersection(&a, &b);

    // Meeting point of y = x with y = (1 + nudge) x + 1
    assert!((p.x + 1.0 / PARALLEL_NUDGE).abs() < 10.0);
    assert_eq!(p.y, p.x);

    // The slope perturbation that point implies stays under 0.0002
    let implied = (b.intercept() - a.intercept()) / -p.x;
    assert!(implied > 0.0 && implied < 0.0002);
    assert!(segment_intersection(&a, &b).is_none());
}

#[test]
fn test_near_parallel_lines_are_not_nudged() {
    // Slopes 0.5 and 0.501 differ, so the true intersection is reported
    let a = seg(0.0, 0.0, 1000.0, 500.0);
    let b = seg(0.0, 1.0, 1000.0, 502.0);
    let p = line_intersection(&a, &b);
    assert!((p.x + 1000.0).abs() < 0.5);
    assert!((p.y + 500.0).abs() < 0.5);
}

proptest! {
    /// Segments built through a known point report that point
    #[test]
    fn prop_crossing_segments_meet_at_known_point(
        px in -500.0f32..500.0,
        py in -500.0f32..500.0,
        a_angle in -70.0f32..-10.0,
        b_angle in 10.0f32..70.0,
        a_back in 10.0f32..200.0,
        a_front in 10.0f32..200.0,
        b_back in 10.0f32..200.0,
        b_front in 10.0f32..200.0,
    ) {
        let p = Vec3::new(px, py, 0.0);
        let a = SlopeBox::new(along(p, a_angle, -a_back), along(p, a_angle, a_front));
        let b = SlopeBox::new(along(p, b_angle, -b_back), along(p, b_angle, b_front));

        let hit = segment_intersection(&a, &b);
        prop_assert!(hit.is_some());
        let hit = hit.unwrap();
        prop_assert!((hit.x - p.x).abs() < 0.05);
        prop_assert!((hit.y - p.y).abs() < 0.05);
    }

    /// Lines that meet beyond the end of both segments are not a crossing
    #[test]
    fn prop_lines_meeting_outside_segments_do_not_cross(
        px in -500.0f32..500.0,
        py in -500.0f32..500.0,
        a_angle in -70.0f32..-10.0,
        b_angle in 10.0f32..70.0,
        a_near in 10.0f32..200.0,
        b_near in 10.0f32..200.0,
        a_len in 1.0f32..200.0,
        b_len in 1.0f32..200.0,
    ) {
        let p = Vec3::new(px, py, 0.0);
        let a = SlopeBox::new(along(p, a_angle, a_near), along(p, a_angle, a_near + a_len));
        let b = SlopeBox::new(along(p, b_angle, b_near), along(p, b_angle, b_near + b_len));
        prop_assert!(segment_intersection(&a, &b).is_none());
    }

    /// Parallel blades never cross, even after the slope nudge
    #[test]
    fn prop_parallel_segments_do_not_cross(
        x0 in -500.0f32..500.0,
        y0 in -500.0f32..500.0,
        x1 in -500.0f32..500.0,
        slope in -2.0f32..2.0,
        gap in 1.0f32..100.0,
        a_len in 1.0f32..300.0,
        b_len in 1.0f32..300.0,
    ) {
        let a_start = Vec3::new(x0, y0, 0.0);
        let a = SlopeBox::new(a_start, a_start + Vec3::new(a_len, slope * a_len, 0.0));
        let b_start = Vec3::new(x1, y0 + slope * (x1 - x0) + gap, 0.0);
        let b = SlopeBox::new(b_start, b_start + Vec3::new(b_len, slope * b_len, 0.0));
        prop_assert!(segment_intersection(&a, &b).is_none());
    }

    /// Off the horizontal, the quadrant fix-up agrees with atan2
    #[test]
    fn prop_angle_from_matches_atan2(
        fx in -500.0f32..500.0,
        fy in -500.0f32..500.0,
        dx in prop_oneof![-300.0f32..-0.5, 0.5f32..300.0],
        dy in prop_oneof![-300.0f32..-0.5, 0.5f32..300.0],
    ) {
        let from = Vec3::new(fx, fy, 0.0);
        let to = Vec3::new(fx + dx, fy + dy, 0.0);
        let d = to - from;
        let expected = d.y.atan2(d.x).to_degrees();
        prop_assert!((angle_from(from, to) - expected).abs() < 0.01);
    }

    /// Timers only run down one tick at a time, except where an action
    /// explicitly resets them
    #[test]
    fn prop_timers_decay_one_per_tick(
        script in prop::collection::vec(
            prop::collection::vec((side_strategy(), command_strategy()), 0..4),
            1..120,
        )
    ) {
        let mut bout = Bout::default();
        for commands in &script {
            let before = bout.fencers.clone();
            let events = bout.tick(commands);

            for side in Side::ALL {
                let parried = events.iter().any(|e| matches!(
                    e,
                    BoutEvent::Action {
                        side: s,
                        outcome: ActionOutcome::Parry(ParryOutcome::Parried { .. }),
                        ..
                    } if *s == side.opponent()
                ));
                let deceived = events.iter().any(|e| matches!(
                    e,
                    BoutEvent::Action {
                        side: s,
                        outcome: ActionOutcome::Deceive(DeceiveOutcome::Deceiving { .. }),
                        ..
                    } if *s == side
                ));

                let old = &before[side.index()];
                let new = bout.fencer(side);
                if !parried {
                    prop_assert!(new.parry_timer + 1 >= old.parry_timer);
                }
                if !deceived {
                    prop_assert!(new.deception_timer + 1 >= old.deception_timer);
                }
            }

            prop_assert!(bout.invariant_violations().is_empty(), "{:?}", bout.invariant_violations());
        }
    }

    /// A take never starts unless the blades were crossed this tick
    #[test]
    fn prop_no_take_without_crossing(
        script in prop::collection::vec(
            prop::collection::vec((side_strategy(), command_strategy()), 0..4),
            1..120,
        )
    ) {
        let mut bout = Bout::default();
        for commands in &script {
            let events = bout.tick(commands);
            if events.iter().any(|e| matches!(e, BoutEvent::TakeStarted { .. })) {
                prop_assert!(bout.sync.blades_crossed());
            }
            if !bout.sync.blades_crossed() {
                prop_assert!(bout.sync.blade_taken_by.is_none());
            }
        }
    }
}
