//! Automatic tangent derivation.
//!
//! Every pass reads a snapshot of the handle positions before writing any
//! tangent, so results do not depend on iteration order and running a pass
//! twice gives the same tangents.

use super::traversal::neighbor;
use super::BezierPath;
use crate::geom::Float3;

/// Smoothness policy for [`BezierPath::smooth_with`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SmoothMode {
    /// Tangents perpendicular to the prior/next chord, half the segment length.
    Chord,
    /// Like `Chord`, with the longer neighbor segment clamped to the shorter.
    Balanced,
}

impl BezierPath {
    /// Derives tangents from each handle's prior and next neighbors.
    ///
    /// The tangent direction is the in-plane normal of the chord from prior
    /// to next; each side is scaled to half of its adjacent segment. On an
    /// open path a missing neighbor counts as the handle itself.
    pub fn smooth(&mut self, looped: bool) {
        self.smooth_with(SmoothMode::Chord, looped);
    }

    /// [`smooth`](BezierPath::smooth) with uneven neighbor distances evened
    /// out first, so a long segment cannot make the curve overshoot next to a
    /// short one.
    pub fn smooth_auto(&mut self, looped: bool) {
        self.smooth_with(SmoothMode::Balanced, looped);
    }

    pub fn smooth_with(&mut self, mode: SmoothMode, looped: bool) {
        let positions = self.positions();
        let len = positions.len();
        for (i, handle) in self.handles.iter_mut().enumerate() {
            let prior = neighbor(i, -1, len, looped).map(|j| positions[j]);
            let next = neighbor(i, 1, len, looped).map(|j| positions[j]);
            let (left, right) =
                chord_tangents(prior, positions[i], next, mode == SmoothMode::Balanced);
            handle.left_tangent = left;
            handle.right_tangent = right;
        }
    }

    /// Sets tangents along the segments themselves, scaled by half the
    /// segment: each handle's left tangent points back toward its prior and
    /// the prior's right tangent points toward the handle.
    ///
    /// The first handle's prior is always the last one.
    pub fn smooth_scaled(&mut self, smooth_in: f32, smooth_out: f32) {
        let positions = self.positions();
        let len = positions.len();
        for i in 0..len {
            let Some(p) = neighbor(i, -1, len, true) else {
                continue;
            };
            let half = (positions[i] - positions[p]) * 0.5;
            self.handles[p].right_tangent = half * smooth_in;
            self.handles[i].left_tangent = -half * smooth_out;
        }
    }

    /// Replaces each handle's tangents with a local frame for sweeping
    /// geometry along the path.
    ///
    /// The side tangent bisects the (normalized) left and right tangents.
    /// `side_normal` is perpendicular to `up` and the side tangent,
    /// `tangent_normal` completes the frame. Afterwards `left_tangent` holds
    /// the side tangent and `right_tangent` its negation, so the path no
    /// longer evaluates to its original shape.
    pub fn smooth_tangents(&mut self, up: Float3) {
        for handle in &mut self.handles {
            let left = handle.left_tangent.normalize();
            let right = handle.right_tangent.normalize();
            let side = (left - right).normalize();

            handle.side_normal = up.cross(side).normalize();
            handle.tangent_normal = (-handle.side_normal.cross(side)).normalize();
            handle.left_tangent = side;
            handle.right_tangent = -side;
        }
    }

    fn positions(&self) -> Vec<Float3> {
        self.handles.iter().map(|h| h.position).collect()
    }
}

/// Left and right tangents for a handle at `current`.
fn chord_tangents(
    prior: Option<Float3>,
    current: Float3,
    next: Option<Float3>,
    balance: bool,
) -> (Float3, Float3) {
    let (seg_in, mut from) = match prior {
        Some(p) => (current - p, p),
        None => (Float3::ZERO, current),
    };
    let (seg_out, mut to) = match next {
        Some(n) => (n - current, n),
        None => (Float3::ZERO, current),
    };
    let mut in_mag = seg_in.magnitude();
    let mut out_mag = seg_out.magnitude();

    if balance && prior.is_some() && next.is_some() {
        if in_mag < out_mag {
            to = current + seg_out.normalize() * in_mag;
            out_mag = in_mag;
        } else if in_mag > out_mag {
            from = current - seg_in.normalize() * out_mag;
            in_mag = out_mag;
        }
    }

    let direction = (to - from).normal();
    (-direction * (in_mag * 0.5), direction * (out_mag * 0.5))
}
