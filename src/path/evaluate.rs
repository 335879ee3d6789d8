use super::{BezierPath, Handle};
use crate::error::PathError;
use crate::geom::{CubicSegment, Float3};

/// Outcome of [`subdivide`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Subdivision {
    /// `y` of the control point the search stopped on.
    pub value: f32,
    /// Curve parameter of that point within the original segment.
    pub parameter: f32,
    /// Number of subdivision calls made, including the first.
    pub depth: u32,
}

/// Finds `y` at `x == time` on one segment by de Casteljau midpoint
/// recursion on the curve's x coordinate.
///
/// Each call splits at the parametric midpoint and stops when the depth cap
/// is reached or when the midpoint, first or last control point lies within
/// `precision` of `time` (checked in that order). Otherwise it descends into
/// the half on `time`'s side of the midpoint. Only meaningful when x is
/// monotonic across the segment.
pub fn subdivide(segment: CubicSegment, time: f32, precision: f32, max_depth: u32) -> Subdivision {
    subdivide_range(segment, time, precision, max_depth, 0.0, 1.0, 0)
}

fn subdivide_range(
    segment: CubicSegment,
    time: f32,
    precision: f32,
    max_depth: u32,
    u1: f32,
    u2: f32,
    depth: u32,
) -> Subdivision {
    let (left, right) = segment.split_half();
    let mid = left.p4;
    let s = (u1 + u2) * 0.5;
    let depth = depth + 1;

    if depth >= max_depth || within(mid.x, time, precision) {
        if depth >= max_depth {
            log::trace!("subdivision hit depth cap {max_depth} at x = {time}");
        }
        return Subdivision {
            value: mid.y,
            parameter: s,
            depth,
        };
    }
    if within(segment.p1.x, time, precision) {
        return Subdivision {
            value: segment.p1.y,
            parameter: u1,
            depth,
        };
    }
    if within(segment.p4.x, time, precision) {
        return Subdivision {
            value: segment.p4.y,
            parameter: u2,
            depth,
        };
    }

    if time > mid.x {
        subdivide_range(right, time, precision, max_depth, s, u2, depth)
    } else {
        subdivide_range(left, time, precision, max_depth, u1, s, depth)
    }
}

fn within(a: f32, b: f32, precision: f32) -> bool {
    (a - b).abs() <= precision
}

impl BezierPath {
    /// Value (`y`) of the path at `time` (`x`), treating it as a function.
    ///
    /// Clamps to the first handle's value before the path and to the last
    /// handle's value after it. An empty path evaluates to 0.
    pub fn value_at(&self, time: f32) -> f32 {
        match self.handles.first() {
            Some(first) if time < first.position.x => first.position.y,
            _ => self
                .subdivision_at(time)
                .map_or_else(|| self.end_value(), |sub| sub.value),
        }
    }

    /// The subdivision result for `time` if it falls on a segment.
    ///
    /// `None` when `time` lies outside the path or the path has fewer than
    /// two handles.
    pub fn subdivision_at(&self, time: f32) -> Option<Subdivision> {
        for (i, h1) in self.handles.iter().enumerate() {
            if time < h1.position.x {
                return None;
            }
            let h2 = self.handles.get(i + 1)?;
            if h2.position.x < time {
                continue;
            }
            return Some(subdivide(
                h1.segment_to(h2),
                time,
                self.settings.precision,
                self.settings.max_recursion_depth,
            ));
        }
        None
    }

    /// Point on the segment from `h1` to `h2` at curve parameter `u`.
    pub fn point_on_segment(h1: &Handle, h2: &Handle, u: f32) -> Float3 {
        h1.segment_to(h2).point(u)
    }

    /// Time (`x`) at which the path reaches `value`, by bisection over
    /// [`value_at`](BezierPath::value_at) between the first and last handle.
    ///
    /// Assumes the value is non-decreasing in time. The search stops once the
    /// bracket is no wider than `precision`, on an exact hit, or after
    /// `max_recursion_depth` iterations.
    pub fn time_at(&self, value: f32, precision: f32) -> Result<f32, PathError> {
        if self.handles.len() < 2 {
            return Err(PathError::InsufficientHandles {
                found: self.handles.len(),
            });
        }

        let mut min_time = self.start();
        let mut max_time = self.end();
        let mut iteration = 0;

        while (max_time - min_time).abs() > precision {
            let mid_time = (min_time + max_time) * 0.5;
            let mid_value = self.value_at(mid_time);

            if mid_value == value || iteration >= self.settings.max_recursion_depth {
                return Ok(mid_time);
            } else if mid_value < value {
                min_time = mid_time;
            } else {
                max_time = mid_time;
            }
            iteration += 1;
        }

        Ok((min_time + max_time) * 0.5)
    }
}
