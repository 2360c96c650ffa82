// Host-side tests for the damped spring integrator.

use idcard_core::*;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn card_spring_reaches_target_within_two_seconds() {
    let params = SpringParams::new(12.0, 150.0, 1.2);
    let mut s = Spring::new(0.0);
    s.set_target(100.0);
    for _ in 0..120 {
        s.tick(&params, FRAME);
    }
    assert!(
        (s.value() - 100.0).abs() <= 1.0,
        "value {} not within 1% of 100",
        s.value()
    );
    assert!(s.velocity().abs() < 0.5, "velocity {}", s.velocity());
}

#[test]
fn overdamped_spring_approaches_target_monotonically() {
    // ζ = 30 / (2 * sqrt(100 * 1)) = 1.5
    let params = SpringParams::new(30.0, 100.0, 1.0);
    assert!(params.damping_ratio() > 1.0);
    let mut s = Spring::new(0.0);
    s.set_target(100.0);
    let mut prev_gap = (s.target() - s.value()).abs();
    for _ in 0..600 {
        let prev_value = s.value();
        s.tick(&params, FRAME);
        assert!(s.value() >= prev_value, "value moved away from target");
        assert!(s.value() <= 100.0 + 1e-4, "overshoot to {}", s.value());
        let gap = (s.target() - s.value()).abs();
        if s.is_at_rest() {
            assert!(gap <= prev_gap);
            break;
        }
        assert!(gap < prev_gap, "gap did not shrink: {gap} >= {prev_gap}");
        prev_gap = gap;
    }
    assert!(s.is_at_rest());
}

#[test]
fn underdamped_spring_does_not_keep_oscillating() {
    let params = SpringParams::default();
    assert!(params.damping_ratio() < 1.0);
    let mut s = Spring::new(0.0);
    s.set_target(-80.0);
    for _ in 0..180 {
        s.tick(&params, FRAME);
    }
    assert!((s.value() + 80.0).abs() < 0.05, "still swinging at {}", s.value());
}

#[test]
fn non_positive_or_non_finite_dt_is_a_no_op() {
    let params = SpringParams::default();
    let mut s = Spring::new(0.0);
    s.set_target(10.0);
    let before = s;
    s.tick(&params, 0.0);
    s.tick(&params, -1.0);
    s.tick(&params, f32::NAN);
    s.tick(&params, f32::INFINITY);
    assert_eq!(s, before);
}

#[test]
fn resting_spring_ignores_ticks() {
    let params = SpringParams::default();
    let mut s = Spring::new(5.0);
    assert!(s.is_at_rest());
    s.tick(&params, FRAME);
    assert_eq!(s.value(), 5.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn settled_spring_snaps_exactly_onto_target() {
    let params = SpringParams::default();
    let mut s = Spring::new(0.0);
    s.set_target(42.0);
    for _ in 0..600 {
        s.tick(&params, FRAME);
    }
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 42.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn long_gap_is_caught_up_without_diverging() {
    let params = SpringParams::default();
    let mut s = Spring::new(0.0);
    s.set_target(100.0);
    s.tick(&params, 0.25);
    assert!(s.value().is_finite());
    s.tick(&params, 60.0);
    assert!(s.is_at_rest());
    assert_eq!(s.value(), 100.0);
}

#[test]
fn stiff_light_spring_stays_stable_at_frame_rate() {
    // Tilt rig: very light mass, would blow up with a single Euler step per frame.
    let params = SpringParams::new(15.0, 150.0, 0.1);
    assert!(params.max_step() < FRAME);
    let mut s = Spring::new(0.0);
    s.set_target(2.0);
    for _ in 0..120 {
        s.tick(&params, FRAME);
        assert!(s.value().is_finite());
        assert!(s.value().abs() < 4.0);
    }
    assert!((s.value() - 2.0).abs() < 0.01);
}

#[test]
fn non_finite_target_is_ignored() {
    let mut s = Spring::new(3.0);
    s.set_target(f32::NAN);
    s.set_target(f32::INFINITY);
    assert_eq!(s.target(), 3.0);
    assert!(s.is_at_rest());
}
