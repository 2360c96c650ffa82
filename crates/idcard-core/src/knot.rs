//! Torus-knot mesh for the decorative 3D object.

use crate::constants::{
    KNOT_P, KNOT_Q, KNOT_RADIAL_SEGMENTS, KNOT_RADIUS, KNOT_TUBE, KNOT_TUBULAR_SEGMENTS,
};
use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusKnotParams {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
}

impl Default for TorusKnotParams {
    fn default() -> Self {
        Self {
            radius: KNOT_RADIUS,
            tube: KNOT_TUBE,
            tubular_segments: KNOT_TUBULAR_SEGMENTS,
            radial_segments: KNOT_RADIAL_SEGMENTS,
            p: KNOT_P,
            q: KNOT_Q,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Point on the knot's centre line at curve parameter `u`.
fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Sweep a circle of radius `tube` along the (p, q) torus knot.
///
/// Produces `(tubular + 1) * (radial + 1)` vertices (seams duplicated so
/// normals stay per-ring) and `tubular * radial * 2` triangles.
pub fn torus_knot(params: &TorusKnotParams) -> Mesh {
    let tubular = params.tubular_segments.max(3);
    let radial = params.radial_segments.max(3);
    let p = params.p.max(1) as f32;
    let q = params.q as f32;

    let mut vertices = Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize);
    for j in 0..=tubular {
        let u = j as f32 / tubular as f32 * p * TAU;
        let p1 = knot_curve(u, p, q, params.radius);
        let p2 = knot_curve(u + 0.01, p, q, params.radius);

        // Frenet-like frame from the finite-difference tangent
        let t = p2 - p1;
        let mut n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        n = b.cross(t).normalize_or_zero();

        for i in 0..=radial {
            let v = i as f32 / radial as f32 * TAU;
            let cx = -params.tube * v.cos();
            let cy = params.tube * v.sin();
            let position = p1 + n * cx + b * cy;
            let normal = (position - p1).normalize_or_zero();
            vertices.push(MeshVertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let mut indices = Vec::with_capacity((tubular * radial * 6) as usize);
    let stride = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Mesh { vertices, indices }
}
