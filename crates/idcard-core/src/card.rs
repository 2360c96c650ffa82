//! Draggable card controller.
//!
//! Pointer handlers call [`CardController::begin_drag`],
//! [`CardController::update_drag`] and [`CardController::end_drag`]; the frame
//! clock calls [`CardController::tick`]. Everything the renderer needs is
//! pulled with [`CardController::compute_visual_state`] and
//! [`CardController::compute_tether`].

use crate::config::{CardConfig, DragBounds};
use crate::spring::Spring;
use crate::tether::TetherCurve;
use crate::viewport::Viewport;
use glam::Vec2;

// Resistance of the overshoot band past the hard bound; higher is softer.
const RUBBER_BAND_STIFFNESS: f32 = 0.55;

/// Receiver for the card's normalised displacement, e.g. a shader uniform.
pub trait DistortionSink {
    fn set_distortion(&mut self, distortion_x: f32, distortion_y: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Sprung offset from rest, in px.
    pub offset: Vec2,
    pub distance: f32,
    /// `atan2(y, x)` in degrees.
    pub angle: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale: f32,
}

pub struct CardController {
    config: CardConfig,
    position: Vec2,
    dragging: bool,
    spring_x: Spring,
    spring_y: Spring,
    viewport: Viewport,
    sink: Option<Box<dyn DistortionSink>>,
    last_distortion: Option<(f32, f32)>,
    disposed: bool,
}

impl CardController {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            position: Vec2::ZERO,
            dragging: false,
            spring_x: Spring::new(0.0),
            spring_y: Spring::new(0.0),
            viewport: Viewport::default(),
            sink: None,
            last_distortion: None,
            disposed: false,
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Mount state: raw position and both springs back at `(0, 0)`.
    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.dragging = false;
        self.spring_x.snap(0.0);
        self.spring_y.snap(0.0);
        self.last_distortion = None;
        self.disposed = false;
    }

    pub fn set_distortion_sink(&mut self, sink: Box<dyn DistortionSink>) {
        self.sink = Some(sink);
        self.last_distortion = None;
    }

    /// Release the sink and stop reacting to input and ticks.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.dragging = false;
        self.sink = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Fixed tether anchor derived from the host viewport.
    pub fn anchor(&self) -> Vec2 {
        let tether = &self.config.tether;
        Vec2::new(
            self.viewport.width * tether.anchor_x_fraction,
            tether.anchor_top,
        )
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Raw (unsprung) drag offset.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn spring_value(&self) -> Vec2 {
        Vec2::new(self.spring_x.value(), self.spring_y.value())
    }

    #[inline]
    pub fn spring_velocity(&self) -> Vec2 {
        Vec2::new(self.spring_x.velocity(), self.spring_y.velocity())
    }

    #[inline]
    pub fn spring_target(&self) -> Vec2 {
        Vec2::new(self.spring_x.target(), self.spring_y.target())
    }

    /// Nothing left to animate; hosts may stop requesting frames.
    pub fn is_at_rest(&self) -> bool {
        !self.dragging && self.spring_x.is_at_rest() && self.spring_y.is_at_rest()
    }

    pub fn begin_drag(&mut self) {
        if self.disposed {
            return;
        }
        self.dragging = true;
        log::debug!("[card] drag begin");
    }

    /// Feed the pointer offset since drag start. Only retargets the springs.
    pub fn update_drag(&mut self, delta: Vec2) {
        if self.disposed || !self.dragging {
            return;
        }
        self.position = clamp_drag(delta, &self.config.bounds, self.config.elastic);
        self.spring_x.set_target(self.position.x);
        self.spring_y.set_target(self.position.y);
    }

    /// Release: the rest position becomes the target again.
    pub fn end_drag(&mut self) {
        if self.disposed || !self.dragging {
            return;
        }
        self.dragging = false;
        self.position = Vec2::ZERO;
        self.spring_x.set_target(0.0);
        self.spring_y.set_target(0.0);
        log::debug!("[card] drag end");
    }

    /// Advance both axis springs by `dt` seconds of real elapsed time.
    pub fn tick(&mut self, dt: f32) {
        if self.disposed || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let params = self.config.spring;
        self.spring_x.tick(&params, dt);
        self.spring_y.tick(&params, dt);
        self.push_distortion();
    }

    pub fn compute_visual_state(&self) -> VisualState {
        let offset = self.spring_value();
        let distance = offset.length();
        let angle = offset.y.atan2(offset.x).to_degrees();
        let base_scale = if self.dragging {
            self.config.drag_scale
        } else {
            self.config.idle_scale
        };
        VisualState {
            offset,
            distance,
            angle,
            rotation: angle + distance * self.config.rotation_per_px,
            scale: (base_scale - distance * self.config.scale_per_px).max(self.config.min_scale),
        }
    }

    /// The ribbon counts as stretched while held or once pulled far enough.
    pub fn is_stretched(&self) -> bool {
        self.dragging || self.spring_value().length() > self.config.tether.stretch_distance
    }

    pub fn compute_tether(&self, anchor: Vec2) -> TetherCurve {
        let tether = &self.config.tether;
        let end = anchor + tether.rest_offset + self.spring_value();
        TetherCurve::new(anchor, end, tether, self.is_stretched())
    }

    /// Spring displacement normalised by the bound half-size, in `[-1, 1]`.
    pub fn distortion(&self) -> (f32, f32) {
        let half = self.config.bounds.half_extent().max(Vec2::splat(f32::EPSILON));
        let d = (self.spring_value() / half).clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        (d.x, d.y)
    }

    fn push_distortion(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let d = self.distortion();
        if self.last_distortion == Some(d) {
            return;
        }
        self.last_distortion = Some(d);
        if let Some(sink) = self.sink.as_mut() {
            sink.set_distortion(d.0, d.1);
        }
    }
}

/// Confine a raw drag offset to `bounds`, letting it run past each edge by at
/// most `elastic * |edge|` with increasing resistance.
///
/// NaN components map to rest; infinities land on the outer overshoot edge.
pub fn clamp_drag(delta: Vec2, bounds: &DragBounds, elastic: f32) -> Vec2 {
    let elastic = if elastic.is_finite() {
        elastic.clamp(0.0, 1.0)
    } else {
        0.0
    };
    Vec2::new(
        rubber_clamp(delta.x, bounds.left, bounds.right, elastic),
        rubber_clamp(delta.y, bounds.top, bounds.bottom, elastic),
    )
}

fn rubber_clamp(v: f32, a: f32, b: f32, elastic: f32) -> f32 {
    // Unvalidated configs may hand over swapped or non-finite edges.
    let a = if a.is_finite() { a } else { 0.0 };
    let b = if b.is_finite() { b } else { 0.0 };
    let (min, max) = (a.min(b), a.max(b));
    if v.is_nan() {
        return 0.0_f32.clamp(min, max);
    }
    let clamped = v.clamp(min, max);
    if v == clamped {
        return v;
    }
    let (edge, sign) = if v < min { (min, -1.0) } else { (max, 1.0) };
    let limit = edge.abs() * elastic;
    clamped + sign * band(v - clamped, limit)
}

// Asymptotic rubber band: 0 at the edge, approaches `limit` as `excess` grows.
fn band(excess: f32, limit: f32) -> f32 {
    if limit <= 0.0 {
        return 0.0;
    }
    let excess = excess.abs();
    if excess.is_infinite() {
        return limit;
    }
    ((1.0 - 1.0 / (excess * RUBBER_BAND_STIFFNESS / limit + 1.0)) * limit).min(limit)
}
