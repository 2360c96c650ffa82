//! Window-independent state of the native playground: the card controller,
//! the tilt, the mouse and the geometry built from them each frame.

use crate::geometry::{parse_hex_color, push_ribbon, CardRect, FlatVertex};
use glam::Vec2;
use idcard_core::{CardConfig, CardController, TiltController, Viewport};

const CARD_SIZE: Vec2 = Vec2::new(220.0, 320.0);
const CARD_COLOR: [f32; 4] = [0.96, 0.96, 0.98, 1.0];
const CARD_HELD_COLOR: [f32; 4] = [1.0, 0.97, 0.92, 1.0];
const ANCHOR_SIZE: f32 = 10.0;
const RIBBON_SEGMENTS: usize = 32;
// Used when the configured tether colour is not a hex literal.
const FALLBACK_TETHER_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];

pub struct Playground {
    card: CardController,
    tilt: TiltController,
    cursor: Option<Vec2>,
    drag_origin: Option<Vec2>,
    tether_color: [f32; 4],
}

impl Playground {
    pub fn new(config: CardConfig, viewport: Viewport) -> anyhow::Result<Self> {
        config.validate()?;
        let tether_color = parse_hex_color(&config.tether.color).unwrap_or_else(|| {
            log::warn!("tether colour {:?} is not #RRGGBB", config.tether.color);
            FALLBACK_TETHER_COLOR
        });
        let tilt = TiltController::new(config.tilt);
        let mut card = CardController::new(config);
        card.set_viewport(viewport);
        Ok(Self {
            card,
            tilt,
            cursor: None,
            drag_origin: None,
            tether_color,
        })
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.card.set_viewport(viewport);
    }

    pub fn card(&self) -> &CardController {
        &self.card
    }

    /// Current on-screen rectangle of the card, tilt folded into its size.
    pub fn card_rect(&self) -> CardRect {
        let visual = self.card.compute_visual_state();
        let tilt = self.tilt.state();
        let rest = self.card.anchor() + self.card.config().tether.rest_offset;
        let foreshorten = Vec2::new(
            tilt.rotate_y.to_radians().cos(),
            tilt.rotate_x.to_radians().cos(),
        );
        CardRect {
            center: rest + visual.offset + Vec2::new(0.0, CARD_SIZE.y * 0.5),
            half_size: CARD_SIZE * 0.5 * visual.scale * tilt.scale * foreshorten,
            rotation_deg: visual.rotation,
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.cursor = Some(pos);
        let rect = self.card_rect();
        self.tilt.set_pointer(pos - rect.center);
        if let Some(origin) = self.drag_origin {
            self.card.update_drag(pos - origin);
        }
    }

    pub fn pointer_left(&mut self) {
        self.cursor = None;
        self.tilt.clear_pointer();
    }

    /// Left button down: start a drag when the cursor is over the card.
    pub fn press(&mut self) -> bool {
        let Some(pos) = self.cursor else {
            return false;
        };
        if self.drag_origin.is_some() || !self.card_rect().contains(pos) {
            return false;
        }
        self.drag_origin = Some(pos);
        self.card.begin_drag();
        self.tilt.set_interacting(true);
        true
    }

    pub fn release(&mut self) {
        if self.drag_origin.take().is_some() {
            self.card.end_drag();
            self.tilt.set_interacting(false);
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.card.tick(dt);
        self.tilt.tick(dt);
    }

    pub fn is_at_rest(&self) -> bool {
        self.card.is_at_rest() && self.tilt.is_at_rest()
    }

    /// Triangles for this frame: tether ribbon, anchor pin, then the card.
    pub fn geometry(&self, out: &mut Vec<FlatVertex>) {
        out.clear();
        let anchor = self.card.anchor();
        let tether = self.card.compute_tether(anchor);
        push_ribbon(&tether, RIBBON_SEGMENTS, self.tether_color, out);
        CardRect {
            center: anchor,
            half_size: Vec2::splat(ANCHOR_SIZE * 0.5),
            rotation_deg: 45.0,
        }
        .push_triangles(self.tether_color, out);
        let color = if self.card.is_dragging() {
            CARD_HELD_COLOR
        } else {
            CARD_COLOR
        };
        self.card_rect().push_triangles(color, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground() -> Playground {
        Playground::new(CardConfig::default(), Viewport::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn card_hangs_below_the_anchor_at_rest() {
        let p = playground();
        let rect = p.card_rect();
        assert_eq!(rect.center.x, 400.0);
        assert!((rect.center.y - (20.0 + 100.0 + CARD_SIZE.y * 0.5)).abs() < 1e-3);
    }

    #[test]
    fn press_outside_card_is_ignored() {
        let mut p = playground();
        p.pointer_moved(Vec2::new(5.0, 5.0));
        assert!(!p.press());
        assert!(!p.card().is_dragging());
    }

    #[test]
    fn drag_and_release_springs_back() {
        let mut p = playground();
        let grab = p.card_rect().center;
        p.pointer_moved(grab);
        assert!(p.press());
        p.pointer_moved(grab + Vec2::new(60.0, 20.0));
        assert_eq!(p.card().position(), Vec2::new(60.0, 20.0));
        for _ in 0..30 {
            p.tick(1.0 / 60.0);
        }
        assert!(p.card().spring_value().x > 10.0);
        p.release();
        p.pointer_left();
        for _ in 0..600 {
            p.tick(1.0 / 60.0);
        }
        assert!(p.is_at_rest());
        assert_eq!(p.card().spring_value(), Vec2::ZERO);
    }

    #[test]
    fn geometry_contains_ribbon_pin_and_card() {
        let p = playground();
        let mut out = Vec::new();
        p.geometry(&mut out);
        assert_eq!(out.len(), RIBBON_SEGMENTS * 6 + 6 + 6);
    }
}
