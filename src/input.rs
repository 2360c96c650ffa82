// Pointer bookkeeping and CSS formatting used by the card handlers.
//
// Free of `web_sys` so host tests can include it directly.

use glam::Vec2;
use idcard_core::{TiltState, VisualState};

/// Tracks the single pointer that owns the current drag and where it started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDrag {
    pointer_id: Option<i32>,
    origin: Vec2,
}

impl PointerDrag {
    /// Claim the drag for `pointer_id`. Fails while another pointer owns it.
    pub fn begin(&mut self, pointer_id: i32, client: Vec2) -> bool {
        if self.pointer_id.is_some() {
            return false;
        }
        self.pointer_id = Some(pointer_id);
        self.origin = client;
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pointer_id.is_some()
    }

    /// Offset since `begin`, only for the owning pointer.
    pub fn delta(&self, pointer_id: i32, client: Vec2) -> Option<Vec2> {
        (self.pointer_id == Some(pointer_id)).then(|| client - self.origin)
    }

    /// Release the drag if `pointer_id` owns it.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id != Some(pointer_id) {
            return false;
        }
        *self = Self::default();
        true
    }
}

/// Offset of `client` from the centre of a client rect.
#[inline]
pub fn offset_from_center(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    client - Vec2::new(left + width * 0.5, top + height * 0.5)
}

pub fn card_transform_css(visual: &VisualState) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) rotate({:.3}deg) scale({:.4})",
        visual.offset.x, visual.offset.y, visual.rotation, visual.scale
    )
}

pub fn tilt_transform_css(tilt: &TiltState, perspective_px: f32) -> String {
    format!(
        "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
        perspective_px, tilt.rotate_x, tilt.rotate_y, tilt.scale
    )
}
