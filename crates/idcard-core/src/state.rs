//! Scene-side state for the knot viewer shared with the front-ends.
//!
//! These types avoid platform APIs; the web renderer turns them into uniforms.

use crate::constants::*;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera circling the origin on the horizontal plane, zoom locked.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub distance: f32,
    pub azimuth: f32,
    pub height: f32,
    /// Orbits per minute, halved: 2.0 is one full turn every 30 s.
    pub auto_rotate_speed: f32,
    pub auto_rotate: bool,
    pub fovy_radians: f32,
    pub aspect: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            distance: KNOT_CAMERA_DISTANCE,
            azimuth: 0.0,
            height: 0.0,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            auto_rotate: true,
            fovy_radians: KNOT_CAMERA_FOV_DEG.to_radians(),
            aspect: 1.0,
        }
    }
}

impl OrbitCamera {
    /// Radians per second; speed 2.0 gives one orbit every 30 s.
    pub fn angular_speed(&self) -> f32 {
        TAU / 60.0 * self.auto_rotate_speed
    }

    pub fn update(&mut self, dt: f32) {
        if !self.auto_rotate || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.azimuth = (self.azimuth - self.angular_speed() * dt).rem_euclid(TAU);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.azimuth.sin(),
            self.height,
            self.distance * self.azimuth.cos(),
        )
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: self.fovy_radians,
            znear: KNOT_CAMERA_ZNEAR,
            zfar: KNOT_CAMERA_ZFAR,
        }
    }
}

/// Phong material plus the fixed ambient + point light rig.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub color: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    pub ambient: f32,
    pub light_position: Vec3,
    pub light_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            color: Vec3::from(KNOT_COLOR),
            specular: Vec3::from(KNOT_SPECULAR),
            shininess: KNOT_SHININESS,
            ambient: AMBIENT_INTENSITY,
            light_position: Vec3::from(POINT_LIGHT_POSITION),
            light_intensity: POINT_LIGHT_INTENSITY,
        }
    }
}
