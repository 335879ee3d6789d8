use super::math::Float3;

/// The four control points of one cubic Bézier segment.
///
/// `p1` and `p4` are the end points, `p2` and `p3` the inner control points.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicSegment {
    pub p1: Float3,
    pub p2: Float3,
    pub p3: Float3,
    pub p4: Float3,
}

impl CubicSegment {
    pub const fn new(p1: Float3, p2: Float3, p3: Float3, p4: Float3) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Point at parameter `u` using one de Casteljau pass.
    pub fn point(&self, u: f32) -> Float3 {
        let p12 = self.p1.lerp(self.p2, u);
        let p23 = self.p2.lerp(self.p3, u);
        let p34 = self.p3.lerp(self.p4, u);
        let p123 = p12.lerp(p23, u);
        let p234 = p23.lerp(p34, u);
        p123.lerp(p234, u)
    }

    /// Point at parameter `u` using the Bernstein basis polynomials.
    ///
    /// Agrees with [`CubicSegment::point`] up to rounding.
    pub fn bernstein_point(&self, u: f32) -> Float3 {
        let v = 1.0 - u;
        let b1 = v * v * v;
        let b2 = 3.0 * u * v * v;
        let b3 = 3.0 * u * u * v;
        let b4 = u * u * u;
        self.p1 * b1 + self.p2 * b2 + self.p3 * b3 + self.p4 * b4
    }

    /// Splits at `u = 0.5`.
    ///
    /// Returns `(left, right)`; `left.p4 == right.p1` is the curve point at the
    /// parametric midpoint.
    pub fn split_half(&self) -> (Self, Self) {
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p34 = self.p3.midpoint(self.p4);
        let p123 = p12.midpoint(p23);
        let p234 = p23.midpoint(p34);
        let p1234 = p123.midpoint(p234);
        (
            Self::new(self.p1, p12, p123, p1234),
            Self::new(p1234, p234, p34, self.p4),
        )
    }
}
