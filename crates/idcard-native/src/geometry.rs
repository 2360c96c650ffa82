//! Pixel-space triangles for the card and its tether ribbon.

use glam::Vec2;
use idcard_core::TetherCurve;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl FlatVertex {
    fn new(pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            color,
        }
    }
}

/// Oriented rectangle on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub center: Vec2,
    pub half_size: Vec2,
    /// Degrees, clockwise on screen (y down).
    pub rotation_deg: f32,
}

impl CardRect {
    fn axes(&self) -> (Vec2, Vec2) {
        let (s, c) = self.rotation_deg.to_radians().sin_cos();
        (Vec2::new(c, s), Vec2::new(-s, c))
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let (ax, ay) = self.axes();
        let hx = ax * self.half_size.x;
        let hy = ay * self.half_size.y;
        [
            self.center - hx - hy,
            self.center + hx - hy,
            self.center + hx + hy,
            self.center - hx + hy,
        ]
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let (ax, ay) = self.axes();
        let d = point - self.center;
        d.dot(ax).abs() <= self.half_size.x && d.dot(ay).abs() <= self.half_size.y
    }

    pub fn push_triangles(&self, color: [f32; 4], out: &mut Vec<FlatVertex>) {
        let [a, b, c, d] = self.corners();
        for p in [a, b, c, a, c, d] {
            out.push(FlatVertex::new(p, color));
        }
    }
}

/// Extrude the Bézier into a strip of `segments` quads `stroke_width` wide.
pub fn push_ribbon(
    curve: &TetherCurve,
    segments: usize,
    color: [f32; 4],
    out: &mut Vec<FlatVertex>,
) {
    let points = curve.sample(segments);
    let last = (points.len() - 1) as f32;
    let half = curve.stroke_width * 0.5;
    let edges: Vec<(Vec2, Vec2)> = points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let tangent = curve.tangent_at(i as f32 / last).normalize_or_zero();
            let tangent = if tangent == Vec2::ZERO { Vec2::Y } else { tangent };
            let normal = tangent.perp() * half;
            (p + normal, p - normal)
        })
        .collect();
    for pair in edges.windows(2) {
        let (l0, r0) = pair[0];
        let (l1, r1) = pair[1];
        for p in [l0, r0, r1, l0, r1, l1] {
            out.push(FlatVertex::new(p, color));
        }
    }
}

/// `#RRGGBB` or `#RRGGBBAA` to linear-ish `[r, g, b, a]` in `0..=1`.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#')?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Some([
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
        alpha as f32 / 255.0,
    ])
}
