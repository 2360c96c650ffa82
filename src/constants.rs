// DOM hooks and presentation tuning for the web front-end.
//
// Physics and geometry constants live in `idcard_core::constants`; this file
// only names what the page markup and CSS agree on.

// Element ids
pub const CARD_ID: &str = "id-card";
pub const STAGE_ID: &str = "card-stage";
// Inner wrapper that receives the tilt; the stage itself stays untransformed.
pub const TILT_ID: &str = "card-tilt";
pub const TETHER_PATH_ID: &str = "tether-path";
pub const EDIT_TOGGLE_ID: &str = "edit-toggle";
pub const KNOT_CANVAS_ID: &str = "knot-canvas";

// Attributes and classes
pub const FIELD_ATTR: &str = "data-field";
pub const DISPLAY_ATTR: &str = "data-display";
pub const EDITING_CLASS: &str = "editing";
pub const DRAGGING_CLASS: &str = "dragging";
/// Pointer-downs on these never start a drag.
pub const NO_DRAG_SELECTOR: &str = "input, textarea, button, a";

// Edit toggle labels
pub const EDIT_LABEL: &str = "Edit";
pub const DONE_LABEL: &str = "Done";

// Distortion is published as CSS custom properties on the card.
pub const DISTORT_X_VAR: &str = "--distort-x";
pub const DISTORT_Y_VAR: &str = "--distort-y";

/// Perspective depth of the tilt wrapper.
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

/// `MouseEvent.button` for the main button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Knot canvas clears to transparent so the page background shows through.
pub const KNOT_CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
