// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use web_constants::*;
use idcard_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_hooks_are_distinct_and_plain() {
    let ids = [
        CARD_ID,
        STAGE_ID,
        TILT_ID,
        TETHER_PATH_ID,
        EDIT_TOGGLE_ID,
        KNOT_CANVAS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.contains(' ') && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(FIELD_ATTR.starts_with("data-") && DISPLAY_ATTR.starts_with("data-"));
    assert!(DISTORT_X_VAR.starts_with("--") && DISTORT_Y_VAR.starts_with("--"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_consistent() {
    // Springs need positive mass and non-negative terms.
    assert!(CARD_SPRING_MASS > 0.0 && CARD_SPRING_STIFFNESS > 0.0 && CARD_SPRING_DAMPING >= 0.0);
    assert!(TILT_SPRING_MASS > 0.0);

    // Bounds contain rest and the elastic factor is a fraction.
    assert!(DRAG_BOUND_LEFT < 0.0 && DRAG_BOUND_RIGHT > 0.0);
    assert!(DRAG_BOUND_TOP < 0.0 && DRAG_BOUND_BOTTOM > 0.0);
    assert!((0.0..=1.0).contains(&DRAG_ELASTIC));

    // The card grows while held and the tether thins when stretched.
    assert!(DRAG_SCALE > IDLE_SCALE && MIN_SCALE < IDLE_SCALE);
    assert!(TETHER_WIDTH_STRETCHED < TETHER_WIDTH_RELAXED);
    assert!((0.0..=1.0).contains(&TETHER_TENSION));

    // Frame-rate integration must stay well inside the stable step.
    let params = SpringParams::default();
    assert!(params.max_step() <= MAX_TICK_STEP_SEC);
    assert!(TILT_PERSPECTIVE_PX > 0.0);
}

#[test]
fn tilt_is_applied_below_the_measured_stage() {
    // The stage rect drives both the tilt input and the anchor, so the
    // transform must land on a different element.
    assert_ne!(TILT_ID, STAGE_ID);
    assert_ne!(TILT_ID, CARD_ID);
}
