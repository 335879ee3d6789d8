use std::ops::{Add, Mul, Neg, Sub};

/// Point or offset in path space. `x` is time and `y` is value when the path
/// is used as an easing curve.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Float3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Zero-length input stays zero.
    pub fn normalize(self) -> Self {
        match self.magnitude() {
            mag if mag < f32::EPSILON => Self::ZERO,
            mag => self * mag.recip(),
        }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unit perpendicular in the XY working plane: `(-y, x, 0)` normalized.
    /// Zero when the vector has no XY extent.
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x, 0.0).normalize()
    }

    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl Add for Float3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Float3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f32> for Float3 {
    type Output = Self;
    fn mul(self, k: f32) -> Self {
        self.map(|c| c * k)
    }
}

impl Neg for Float3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl Default for Float3 {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_float3_normalize() {
        let v = Float3::new(3.0, 4.0, 0.0);
        let normalized = v.normalize();
        assert_relative_eq!(normalized.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(normalized.y, 0.8, epsilon = 1e-6);
        assert_relative_eq!(normalized.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_float3_normalize_zero_is_zero() {
        assert_eq!(Float3::ZERO.normalize(), Float3::ZERO);
    }

    #[test]
    fn test_float3_cross() {
        let a = Float3::new(1.0, 0.0, 0.0);
        let b = Float3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(c.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_float3_normal_is_perpendicular_unit() {
        let edge = Float3::new(2.0, 1.0, 3.0);
        let n = edge.normal();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(n.x * edge.x + n.y * edge.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_float3_normal_of_x_axis_points_up() {
        let n = Float3::new(1.0, 0.0, 0.0).normal();
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(n.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_float3_normal_degenerate() {
        assert_eq!(Float3::ZERO.normal(), Float3::ZERO);
        assert_eq!(Float3::new(0.0, 0.0, 1.0).normal(), Float3::ZERO);
    }

    #[test]
    fn test_float3_lerp_and_midpoint() {
        let a = Float3::new(0.0, 0.0, 0.0);
        let b = Float3::new(4.0, -2.0, 8.0);
        let q = a.lerp(b, 0.25);
        assert_relative_eq!(q.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(q.y, -0.5, epsilon = 1e-6);
        assert_relative_eq!(q.z, 2.0, epsilon = 1e-6);
        assert_eq!(a.midpoint(b), a.lerp(b, 0.5));
    }
}
