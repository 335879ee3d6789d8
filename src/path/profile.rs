//! Shared easing profile and one-shot easing helpers.

use std::sync::OnceLock;

use super::BezierPath;
use crate::error::PathError;

static SMOOTH_PROFILE: OnceLock<BezierPath> = OnceLock::new();

impl BezierPath {
    /// Process-wide ease-in/ease-out ramp over `[0, 1]` with both eases at
    /// 0.5. Built on first use, read-only afterwards.
    pub fn smooth_profile() -> &'static BezierPath {
        SMOOTH_PROFILE.get_or_init(|| BezierPath::ease(0.0, 1.0, 0.0, 1.0, 0.5, 0.5))
    }
}

/// Value at `time` on a two-handle ease segment, without keeping a path.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_forward(
    start_time: f32,
    end_time: f32,
    start_value: f32,
    end_value: f32,
    ease_in: f32,
    ease_out: f32,
    time: f32,
    precision: f32,
) -> f32 {
    let mut path = BezierPath::ease_segment(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
    );
    path.set_precision(precision);
    path.value_at(time)
}

/// Time at which a two-handle ease segment reaches `value`, without keeping a
/// path.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_inverse(
    start_time: f32,
    end_time: f32,
    start_value: f32,
    end_value: f32,
    ease_in: f32,
    ease_out: f32,
    value: f32,
    precision: f32,
) -> Result<f32, PathError> {
    let mut path = BezierPath::ease_segment(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
    );
    path.set_precision(precision);
    path.time_at(value, precision)
}
