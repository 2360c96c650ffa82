// Host-side tests for the draggable card controller.

use glam::Vec2;
use idcard_core::*;
use std::cell::RefCell;
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

fn run(card: &mut CardController, seconds: f32) {
    let frames = (seconds / FRAME).round() as usize;
    for _ in 0..frames {
        card.tick(FRAME);
    }
}

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn mounts_at_rest() {
    let card = CardController::new(CardConfig::default());
    assert_eq!(card.position(), Vec2::ZERO);
    assert_eq!(card.spring_value(), Vec2::ZERO);
    assert!(!card.is_dragging());
    assert!(card.is_at_rest());
    let vs = card.compute_visual_state();
    assert_eq!(vs.distance, 0.0);
    assert_eq!(vs.scale, IDLE_SCALE);
    assert_eq!(vs.rotation, 0.0);
}

#[test]
fn begin_drag_switches_base_scale_and_stretches_tether() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    assert!(card.is_dragging());
    assert_eq!(card.compute_visual_state().scale, DRAG_SCALE);
    assert!(card.compute_tether(Vec2::new(600.0, 20.0)).stretched);
    card.end_drag();
    assert_eq!(card.compute_visual_state().scale, IDLE_SCALE);
}

#[test]
fn update_drag_only_moves_targets() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(50.0, 30.0));
    assert_eq!(card.position(), Vec2::new(50.0, 30.0));
    assert_eq!(card.spring_target(), Vec2::new(50.0, 30.0));
    // Nothing visual happens before the next frame.
    assert_eq!(card.spring_value(), Vec2::ZERO);
    card.tick(FRAME);
    assert!(card.spring_value().x > 0.0);
}

#[test]
fn update_drag_without_active_drag_is_ignored() {
    let mut card = CardController::new(CardConfig::default());
    card.update_drag(Vec2::new(50.0, 30.0));
    assert_eq!(card.position(), Vec2::ZERO);
    assert_eq!(card.spring_target(), Vec2::ZERO);
}

#[test]
fn releasing_resets_target_and_springs_home() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(50.0, 30.0));
    run(&mut card, 0.3);
    assert!(card.spring_value().length() > 10.0);
    card.end_drag();
    assert!(!card.is_dragging());
    assert_eq!(card.spring_target(), Vec2::ZERO);
    assert_eq!(card.position(), Vec2::ZERO);
    let start = card.spring_value().length();
    run(&mut card, 3.0);
    assert!(card.spring_value().length() < start * 0.01);
    run(&mut card, 5.0);
    assert!(card.is_at_rest());
    assert_eq!(card.spring_value(), Vec2::ZERO);
}

#[test]
fn visual_state_follows_the_documented_formula() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(30.0, 40.0));
    run(&mut card, 6.0);
    assert_eq!(card.spring_value(), Vec2::new(30.0, 40.0));

    let vs = card.compute_visual_state();
    let angle = 40.0_f32.atan2(30.0).to_degrees();
    assert!(approx(vs.distance, 50.0, 1e-4));
    assert!(approx(vs.angle, angle, 1e-4));
    assert!(approx(vs.rotation, angle + 50.0 * ROTATION_PER_PX, 1e-4));
    assert!(approx(vs.scale, DRAG_SCALE - 50.0 * SCALE_PER_PX, 1e-5));
}

#[test]
fn visual_state_is_pure() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(-70.0, 25.0));
    run(&mut card, 0.1);
    let a = card.compute_visual_state();
    let b = card.compute_visual_state();
    assert_eq!(a, b);
    assert_eq!(card.spring_value(), a.offset);
}

#[test]
fn scale_never_drops_below_floor() {
    let mut config = CardConfig::default();
    config.scale_per_px = 1.0;
    let mut card = CardController::new(config);
    card.begin_drag();
    card.update_drag(Vec2::new(150.0, 0.0));
    run(&mut card, 6.0);
    assert_eq!(card.compute_visual_state().scale, MIN_SCALE);
}

#[test]
fn tether_at_rest_matches_reference_arithmetic() {
    let card = CardController::new(CardConfig::default());
    let t = card.compute_tether(Vec2::new(600.0, 20.0));
    assert!(!t.stretched);
    assert_eq!(t.start, Vec2::new(600.0, 20.0));
    assert!(approx(t.end.x, 600.0, 1e-4) && approx(t.end.y, 120.0, 1e-4));
    // 20 + (120 - 20) * 0.3
    assert!(approx(t.control1.x, 600.0, 1e-4));
    assert!(approx(t.control1.y, 50.0, 1e-3));
    // 20 + (120 - 20) * (1 - 0.3)
    assert!(approx(t.control2.x, 600.0, 1e-4));
    assert!(approx(t.control2.y, 90.0, 1e-3));
    assert_eq!(t.stroke_width, TETHER_WIDTH_RELAXED);
}

#[test]
fn tether_stretched_while_dragging_uses_half_tension() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    let t = card.compute_tether(Vec2::new(600.0, 20.0));
    assert!(t.stretched);
    assert!(approx(t.control1.y, 20.0 + 100.0 * 0.15, 1e-3));
    assert!(approx(t.control2.y, 20.0 + 100.0 * 0.85, 1e-3));
    assert_eq!(t.stroke_width, TETHER_WIDTH_STRETCHED);
}

#[test]
fn tether_stays_stretched_after_release_until_close_to_rest() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(100.0, 0.0));
    run(&mut card, 6.0);
    card.end_drag();
    assert!(card.is_stretched());
    let t = card.compute_tether(Vec2::new(0.0, 0.0));
    assert!(approx(t.end.x, 100.0, 1e-3));
    run(&mut card, 8.0);
    assert!(!card.is_stretched());
}

#[test]
fn drag_is_clamped_with_elastic_overshoot() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(1_000.0, -1_000.0));
    let p = card.position();
    assert!(p.x > DRAG_BOUND_RIGHT && p.x <= DRAG_BOUND_RIGHT * (1.0 + DRAG_ELASTIC));
    assert!(p.y < DRAG_BOUND_TOP && p.y >= DRAG_BOUND_TOP * (1.0 + DRAG_ELASTIC));
}

#[test]
fn non_finite_drag_input_is_clamped_not_propagated() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(f32::NAN, f32::INFINITY));
    let p = card.position();
    assert_eq!(p.x, 0.0);
    assert!(approx(p.y, DRAG_BOUND_BOTTOM * (1.0 + DRAG_ELASTIC), 1e-3));
    card.update_drag(Vec2::new(f32::NEG_INFINITY, f32::NAN));
    let p = card.position();
    assert!(approx(p.x, DRAG_BOUND_LEFT * (1.0 + DRAG_ELASTIC), 1e-3));
    assert_eq!(p.y, 0.0);
    run(&mut card, 1.0);
    assert!(card.spring_value().is_finite());
}

#[test]
fn disposed_controller_ignores_ticks_and_input() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(100.0, 0.0));
    run(&mut card, 0.1);
    card.dispose();
    assert!(card.is_disposed());
    let frozen = card.spring_value();
    run(&mut card, 1.0);
    card.begin_drag();
    card.update_drag(Vec2::new(-100.0, 50.0));
    card.end_drag();
    assert_eq!(card.spring_value(), frozen);
    assert!(!card.is_dragging());
}

#[test]
fn reset_returns_to_mount_state() {
    let mut card = CardController::new(CardConfig::default());
    card.begin_drag();
    card.update_drag(Vec2::new(100.0, 60.0));
    run(&mut card, 0.2);
    card.dispose();
    card.reset();
    assert!(!card.is_disposed());
    assert!(card.is_at_rest());
    assert_eq!(card.position(), Vec2::ZERO);
    assert_eq!(card.spring_value(), Vec2::ZERO);
}

#[test]
fn anchor_is_derived_from_host_viewport() {
    let mut card = CardController::new(CardConfig::default());
    card.set_viewport(Viewport::new(1200.0, 800.0));
    assert_eq!(card.anchor(), Vec2::new(600.0, TETHER_ANCHOR_TOP));
}

struct Recorder(Rc<RefCell<Vec<(f32, f32)>>>);

impl DistortionSink for Recorder {
    fn set_distortion(&mut self, x: f32, y: f32) {
        self.0.borrow_mut().push((x, y));
    }
}

#[test]
fn distortion_sink_receives_normalised_offsets() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut card = CardController::new(CardConfig::default());
    card.set_distortion_sink(Box::new(Recorder(seen.clone())));
    card.begin_drag();
    card.update_drag(Vec2::new(DRAG_BOUND_RIGHT, 0.0));
    run(&mut card, 6.0);
    let last = *seen.borrow().last().expect("sink was fed");
    assert!(approx(last.0, 1.0, 1e-4));
    assert_eq!(last.1, 0.0);
    for (x, y) in seen.borrow().iter() {
        assert!((-1.0..=1.0).contains(x) && (-1.0..=1.0).contains(y));
    }

    // Unchanged values are not re-sent, and disposal drops the sink.
    let count = seen.borrow().len();
    run(&mut card, 1.0);
    assert_eq!(seen.borrow().len(), count);
    card.dispose();
    run(&mut card, 1.0);
    assert_eq!(seen.borrow().len(), count);
}

#[test]
fn swapped_bounds_are_reordered_instead_of_panicking() {
    let mut cfg = CardConfig::default();
    cfg.bounds.left = 10.0;
    cfg.bounds.right = -10.0;
    let mut card = CardController::new(cfg);
    card.begin_drag();
    card.update_drag(Vec2::new(5.0, 0.0));
    assert_eq!(card.position(), Vec2::new(5.0, 0.0));
    card.update_drag(Vec2::new(500.0, 0.0));
    let x = card.position().x;
    assert!(x > 10.0 && x <= 10.0 * (1.0 + DRAG_ELASTIC));
}

#[test]
fn non_finite_bounds_collapse_to_rest_edge() {
    let mut cfg = CardConfig::default();
    cfg.bounds.top = f32::NAN;
    cfg.bounds.right = f32::INFINITY;
    let mut card = CardController::new(cfg);
    card.begin_drag();
    card.update_drag(Vec2::new(5.0, 0.0));
    let p = card.position();
    assert!(p.is_finite());
    // A zero edge leaves no room for overshoot.
    assert_eq!(p, Vec2::new(0.0, 0.0));
    card.update_drag(Vec2::new(0.0, -30.0));
    assert_eq!(card.position().y, 0.0);
    card.update_drag(Vec2::new(0.0, 50.0));
    assert_eq!(card.position().y, 50.0);
    card.tick(FRAME);
}
