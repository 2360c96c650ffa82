//! Elastic ribbon tying the card to its anchor: one cubic Bézier segment.

use crate::config::TetherConfig;
use glam::Vec2;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TetherCurve {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
    pub stroke_width: f32,
    pub stretched: bool,
}

impl TetherCurve {
    /// Control points hang vertically below the start and above the end. A
    /// stretched ribbon halves the tension so it pulls straighter.
    pub fn new(start: Vec2, end: Vec2, config: &TetherConfig, stretched: bool) -> Self {
        let t = if stretched {
            config.tension * 0.5
        } else {
            config.tension
        };
        let dy = end.y - start.y;
        Self {
            start,
            control1: Vec2::new(start.x, start.y + dy * t),
            control2: Vec2::new(end.x, start.y + dy * (1.0 - t)),
            end,
            stroke_width: if stretched {
                config.width_stretched
            } else {
                config.width_relaxed
            },
            stretched,
        }
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }

    /// First derivative; used to extrude the ribbon on hosts without a
    /// native curve primitive.
    pub fn tangent_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        (self.control1 - self.start) * (3.0 * u * u)
            + (self.control2 - self.control1) * (6.0 * u * t)
            + (self.end - self.control2) * (3.0 * t * t)
    }

    /// `segments + 1` evenly parameterised points from start to end.
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }

    /// SVG path data (`M … C …`).
    pub fn to_svg_path(&self) -> String {
        let mut d = String::with_capacity(96);
        let _ = write!(
            d,
            "M {:.2},{:.2} C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        );
        d
    }
}
