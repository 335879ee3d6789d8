use crate::geom::{CubicSegment, Float3};

/// One control point of a Bézier path.
///
/// Tangents are offsets relative to `position`; the Bézier control point on
/// each side is `position + tangent`. `tangent_normal` and `side_normal` are
/// orientation data written by
/// [`BezierPath::smooth_tangents`](super::BezierPath::smooth_tangents) for
/// sweeping geometry along the path and are ignored by evaluation.
/// C-compatible layout for FFI.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Handle {
    pub position: Float3,
    pub left_tangent: Float3,
    pub right_tangent: Float3,
    pub tangent_normal: Float3,
    pub side_normal: Float3,
}

impl Handle {
    pub const fn new(position: Float3, left_tangent: Float3, right_tangent: Float3) -> Self {
        Self {
            position,
            left_tangent,
            right_tangent,
            tangent_normal: Float3::ZERO,
            side_normal: Float3::ZERO,
        }
    }

    /// Handle with zero tangents (a sharp corner).
    pub const fn at(position: Float3) -> Self {
        Self::new(position, Float3::ZERO, Float3::ZERO)
    }

    /// Absolute control point on the incoming side.
    pub fn left_control(&self) -> Float3 {
        self.position + self.left_tangent
    }

    /// Absolute control point on the outgoing side.
    pub fn right_control(&self) -> Float3 {
        self.position + self.right_tangent
    }

    /// Cubic segment from this handle to `next`.
    pub fn segment_to(&self, next: &Handle) -> CubicSegment {
        CubicSegment::new(
            self.position,
            self.right_control(),
            next.left_control(),
            next.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_has_zero_tangents() {
        let h = Handle::at(Float3::new(1.0, 2.0, 3.0));
        assert_eq!(h.left_tangent, Float3::ZERO);
        assert_eq!(h.right_tangent, Float3::ZERO);
        assert_eq!(h.tangent_normal, Float3::ZERO);
        assert_eq!(h.side_normal, Float3::ZERO);
    }

    #[test]
    fn controls_are_relative_to_position() {
        let h = Handle::new(
            Float3::new(1.0, 1.0, 0.0),
            Float3::new(-0.5, 0.0, 0.0),
            Float3::new(0.25, 1.0, 0.0),
        );
        assert_eq!(h.left_control(), Float3::new(0.5, 1.0, 0.0));
        assert_eq!(h.right_control(), Float3::new(1.25, 2.0, 0.0));
    }

    #[test]
    fn segment_to_uses_facing_tangents() {
        let a = Handle::new(
            Float3::new(0.0, 0.0, 0.0),
            Float3::new(-9.0, 0.0, 0.0),
            Float3::new(1.0, 0.0, 0.0),
        );
        let b = Handle::new(
            Float3::new(3.0, 1.0, 0.0),
            Float3::new(-1.0, 0.0, 0.0),
            Float3::new(9.0, 0.0, 0.0),
        );
        let seg = a.segment_to(&b);
        assert_eq!(seg.p1, a.position);
        assert_eq!(seg.p2, Float3::new(1.0, 0.0, 0.0));
        assert_eq!(seg.p3, Float3::new(2.0, 1.0, 0.0));
        assert_eq!(seg.p4, b.position);
    }
}
