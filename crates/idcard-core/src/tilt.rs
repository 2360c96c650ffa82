//! Perspective tilt that leans the card towards the pointer.
//!
//! A pointer offset of `±input_range` px from the card centre maps linearly
//! onto `∓max_deg` around X (from y) and `±max_deg` around Y (from x), clamped
//! at the ends. Rotations and scale each go through their own spring.

use crate::config::TiltConfig;
use crate::spring::Spring;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
}

pub struct TiltController {
    config: TiltConfig,
    rotate_x: Spring,
    rotate_y: Spring,
    scale: Spring,
    interacting: bool,
}

impl TiltController {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            rotate_x: Spring::new(0.0),
            rotate_y: Spring::new(0.0),
            scale: Spring::new(1.0),
            interacting: false,
        }
    }

    /// Pointer offset from the centre of the tilted container.
    pub fn set_pointer(&mut self, offset: Vec2) {
        let (rx, ry) = tilt_targets(offset, &self.config);
        self.rotate_x.set_target(rx);
        self.rotate_y.set_target(ry);
    }

    /// Pointer left the container: settle flat.
    pub fn clear_pointer(&mut self) {
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
    }

    pub fn set_interacting(&mut self, interacting: bool) {
        self.interacting = interacting;
        self.scale.set_target(if interacting {
            self.config.active_scale
        } else {
            1.0
        });
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn tick(&mut self, dt: f32) {
        let params = self.config.spring;
        self.rotate_x.tick(&params, dt);
        self.rotate_y.tick(&params, dt);
        self.scale.tick(&params, dt);
    }

    pub fn is_at_rest(&self) -> bool {
        self.rotate_x.is_at_rest() && self.rotate_y.is_at_rest() && self.scale.is_at_rest()
    }

    pub fn state(&self) -> TiltState {
        TiltState {
            rotate_x: self.rotate_x.value(),
            rotate_y: self.rotate_y.value(),
            scale: self.scale.value(),
        }
    }
}

/// Target `(rotate_x, rotate_y)` in degrees for a pointer offset.
pub fn tilt_targets(offset: Vec2, config: &TiltConfig) -> (f32, f32) {
    let range = config.input_range.abs().max(f32::EPSILON);
    let norm = |v: f32| {
        if v.is_nan() {
            0.0
        } else {
            (v / range).clamp(-1.0, 1.0)
        }
    };
    (-norm(offset.y) * config.max_deg, norm(offset.x) * config.max_deg)
}
