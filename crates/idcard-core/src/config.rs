//! Tunable parameters for the card, its tether and its tilt.
//!
//! Every front-end builds a [`CardConfig`] (usually `Default`) and validates it
//! once before mounting; after that no operation on the controller can fail.

use crate::constants::*;
use crate::spring::SpringParams;
use glam::Vec2;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} spring mass must be positive, got {value}")]
    NonPositiveMass { name: &'static str, value: f32 },
    #[error("{name} spring {field} must be non-negative, got {value}")]
    NegativeSpringTerm {
        name: &'static str,
        field: &'static str,
        value: f32,
    },
    #[error("drag bounds are inverted: top={top} left={left} right={right} bottom={bottom}")]
    InvertedBounds {
        top: f32,
        left: f32,
        right: f32,
        bottom: f32,
    },
    #[error("drag bounds must contain the rest position (0, 0)")]
    RestOutsideBounds,
    #[error("elastic factor must be within [0, 1], got {0}")]
    ElasticOutOfRange(f32),
    #[error("tether tension must be within [0, 1], got {0}")]
    TensionOutOfRange(f32),
    #[error("{0} must be finite")]
    NotFinite(&'static str),
}

/// Rectangle the raw drag offset is confined to, relative to rest.
///
/// Screen convention: `top` is the most negative y, `bottom` the most
/// positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self {
            top: DRAG_BOUND_TOP,
            left: DRAG_BOUND_LEFT,
            right: DRAG_BOUND_RIGHT,
            bottom: DRAG_BOUND_BOTTOM,
        }
    }
}

impl DragBounds {
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right, self.bottom)
    }

    /// Half-size of the rectangle on each axis.
    pub fn half_extent(&self) -> Vec2 {
        (self.max() - self.min()) * 0.5
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TetherConfig {
    pub tension: f32,
    /// Anchor x as a fraction of the host viewport width.
    pub anchor_x_fraction: f32,
    pub anchor_top: f32,
    /// Where the card rests relative to the anchor.
    pub rest_offset: Vec2,
    /// Distance past which the ribbon counts as stretched even when released.
    pub stretch_distance: f32,
    pub width_relaxed: f32,
    pub width_stretched: f32,
    pub color: String,
}

impl Default for TetherConfig {
    fn default() -> Self {
        Self {
            tension: TETHER_TENSION,
            anchor_x_fraction: TETHER_ANCHOR_X_FRACTION,
            anchor_top: TETHER_ANCHOR_TOP,
            rest_offset: Vec2::from(TETHER_REST_OFFSET),
            stretch_distance: TETHER_STRETCH_DISTANCE,
            width_relaxed: TETHER_WIDTH_RELAXED,
            width_stretched: TETHER_WIDTH_STRETCHED,
            color: TETHER_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub spring: SpringParams,
    pub input_range: f32,
    pub max_deg: f32,
    pub active_scale: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::new(TILT_SPRING_DAMPING, TILT_SPRING_STIFFNESS, TILT_SPRING_MASS),
            input_range: TILT_INPUT_RANGE,
            max_deg: TILT_MAX_DEG,
            active_scale: TILT_ACTIVE_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub spring: SpringParams,
    pub bounds: DragBounds,
    pub elastic: f32,
    pub rotation_per_px: f32,
    pub scale_per_px: f32,
    pub idle_scale: f32,
    pub drag_scale: f32,
    pub min_scale: f32,
    pub tether: TetherConfig,
    pub tilt: TiltConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::default(),
            bounds: DragBounds::default(),
            elastic: DRAG_ELASTIC,
            rotation_per_px: ROTATION_PER_PX,
            scale_per_px: SCALE_PER_PX,
            idle_scale: IDLE_SCALE,
            drag_scale: DRAG_SCALE,
            min_scale: MIN_SCALE,
            tether: TetherConfig::default(),
            tilt: TiltConfig::default(),
        }
    }
}

impl CardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_spring("card", &self.spring)?;
        validate_spring("tilt", &self.tilt.spring)?;

        let b = &self.bounds;
        for (name, v) in [
            ("bounds.top", b.top),
            ("bounds.left", b.left),
            ("bounds.right", b.right),
            ("bounds.bottom", b.bottom),
            ("rotation_per_px", self.rotation_per_px),
            ("scale_per_px", self.scale_per_px),
            ("idle_scale", self.idle_scale),
            ("drag_scale", self.drag_scale),
            ("min_scale", self.min_scale),
            ("tether.stretch_distance", self.tether.stretch_distance),
            ("tether.anchor_x_fraction", self.tether.anchor_x_fraction),
            ("tether.anchor_top", self.tether.anchor_top),
            ("tilt.input_range", self.tilt.input_range),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }
        if b.left > b.right || b.top > b.bottom {
            return Err(ConfigError::InvertedBounds {
                top: b.top,
                left: b.left,
                right: b.right,
                bottom: b.bottom,
            });
        }
        if b.left > 0.0 || b.right < 0.0 || b.top > 0.0 || b.bottom < 0.0 {
            return Err(ConfigError::RestOutsideBounds);
        }
        if !(0.0..=1.0).contains(&self.elastic) {
            return Err(ConfigError::ElasticOutOfRange(self.elastic));
        }
        if !(0.0..=1.0).contains(&self.tether.tension) {
            return Err(ConfigError::TensionOutOfRange(self.tether.tension));
        }
        Ok(())
    }
}

fn validate_spring(name: &'static str, params: &SpringParams) -> Result<(), ConfigError> {
    if !(params.mass.is_finite() && params.mass > 0.0) {
        return Err(ConfigError::NonPositiveMass {
            name,
            value: params.mass,
        });
    }
    for (field, value) in [("damping", params.damping), ("stiffness", params.stiffness)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(ConfigError::NegativeSpringTerm { name, field, value });
        }
    }
    Ok(())
}
