// Host-side tests for the pointer tilt.

use glam::Vec2;
use idcard_core::*;

const FRAME: f32 = 1.0 / 60.0;

fn settle(tilt: &mut TiltController) {
    for _ in 0..120 {
        tilt.tick(FRAME);
    }
}

#[test]
fn targets_map_linearly_and_clamp() {
    let cfg = TiltConfig::default();
    assert_eq!(tilt_targets(Vec2::ZERO, &cfg), (0.0, 0.0));
    assert_eq!(tilt_targets(Vec2::new(100.0, 0.0), &cfg), (0.0, 2.0));
    assert_eq!(tilt_targets(Vec2::new(0.0, 100.0), &cfg), (-2.0, 0.0));
    assert_eq!(tilt_targets(Vec2::new(50.0, -50.0), &cfg), (1.0, 1.0));
    assert_eq!(tilt_targets(Vec2::new(1e6, -1e6), &cfg), (2.0, 2.0));
    assert_eq!(tilt_targets(Vec2::new(f32::NAN, f32::NAN), &cfg), (0.0, 0.0));
}

#[test]
fn controller_leans_towards_pointer_and_settles_flat() {
    let mut tilt = TiltController::new(TiltConfig::default());
    assert!(tilt.is_at_rest());
    tilt.set_pointer(Vec2::new(-100.0, -100.0));
    settle(&mut tilt);
    let s = tilt.state();
    assert!((s.rotate_x - 2.0).abs() < 0.01);
    assert!((s.rotate_y + 2.0).abs() < 0.01);

    tilt.clear_pointer();
    settle(&mut tilt);
    let s = tilt.state();
    assert!(s.rotate_x.abs() < 0.01 && s.rotate_y.abs() < 0.01);
}

#[test]
fn interaction_pops_the_card_up() {
    let mut tilt = TiltController::new(TiltConfig::default());
    tilt.set_interacting(true);
    assert!(tilt.is_interacting());
    settle(&mut tilt);
    assert!((tilt.state().scale - TILT_ACTIVE_SCALE).abs() < 1e-3);
    tilt.set_interacting(false);
    settle(&mut tilt);
    assert!((tilt.state().scale - 1.0).abs() < 1e-3);
    assert!(tilt.is_at_rest());
}
