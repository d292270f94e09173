//! Canvas-coordinate geometry: 2D vectors and segment distance.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A point or translation in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Round each component to the nearest multiple of `pitch`.
    pub fn snapped(self, pitch: f32) -> Vec2 {
        Vec2::new(
            (self.x / pitch).round() * pitch,
            (self.y / pitch).round() * pitch,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Perpendicular distance from point `p` to the segment `a`–`b`.
///
/// A degenerate segment (both endpoints coincide) measures as straight-line
/// distance to that point.
pub fn dist_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_horizontal_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!((dist_to_segment(Vec2::new(50.0, 1.0), a, b) - 1.0).abs() < 1e-5);
        assert!((dist_to_segment(Vec2::new(50.0, 50.0), a, b) - 50.0).abs() < 1e-5);
    }

    #[test]
    fn distance_clamps_past_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        // Beyond b: distance is to the endpoint, not the infinite line.
        let d = dist_to_segment(Vec2::new(103.0, 4.0), a, b);
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_segment_uses_point_distance() {
        let p = Vec2::new(3.0, 4.0);
        let c = Vec2::new(0.0, 0.0);
        assert!((dist_to_segment(p, c, c) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn snapped_rounds_to_pitch() {
        let v = Vec2::new(57.0, 102.0);
        let s = v.snapped(40.0);
        assert_eq!(s, Vec2::new(40.0, 120.0));
    }
}
