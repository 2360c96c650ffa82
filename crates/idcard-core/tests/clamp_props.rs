// Property tests for drag clamping.

use glam::Vec2;
use idcard_core::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn clamped_drag_stays_within_bound_plus_overshoot(
        x in proptest::num::f32::ANY,
        y in proptest::num::f32::ANY,
        elastic in 0.0f32..=1.0,
    ) {
        let bounds = DragBounds::default();
        let p = clamp_drag(Vec2::new(x, y), &bounds, elastic);
        let tol = 1e-3;
        prop_assert!(p.x.is_finite() && p.y.is_finite());
        prop_assert!(p.x >= bounds.left - bounds.left.abs() * elastic - tol);
        prop_assert!(p.x <= bounds.right + bounds.right.abs() * elastic + tol);
        prop_assert!(p.y >= bounds.top - bounds.top.abs() * elastic - tol);
        prop_assert!(p.y <= bounds.bottom + bounds.bottom.abs() * elastic + tol);
    }

    #[test]
    fn inside_bounds_passes_through_untouched(
        x in DRAG_BOUND_LEFT..=DRAG_BOUND_RIGHT,
        y in DRAG_BOUND_TOP..=DRAG_BOUND_BOTTOM,
    ) {
        let p = clamp_drag(Vec2::new(x, y), &DragBounds::default(), DRAG_ELASTIC);
        prop_assert_eq!(p, Vec2::new(x, y));
    }

    #[test]
    fn overshoot_grows_with_pull(excess_a in 0.0f32..500.0, extra in 1.0f32..500.0) {
        let bounds = DragBounds::default();
        let a = clamp_drag(Vec2::new(bounds.right + excess_a, 0.0), &bounds, DRAG_ELASTIC);
        let b = clamp_drag(Vec2::new(bounds.right + excess_a + extra, 0.0), &bounds, DRAG_ELASTIC);
        prop_assert!(b.x >= a.x);
    }
}

#[test]
fn zero_elastic_is_a_hard_clamp() {
    let p = clamp_drag(Vec2::new(500.0, -500.0), &DragBounds::default(), 0.0);
    assert_eq!(p, Vec2::new(DRAG_BOUND_RIGHT, DRAG_BOUND_TOP));
}
