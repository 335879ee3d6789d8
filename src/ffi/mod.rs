//! C FFI for easepath.
//!
//! Paths live behind an opaque handle from `ease_path_new` /
//! `ease_path_new_ease` and must be released with `ease_path_free`.
//! `ease_evaluate_forward` / `ease_evaluate_inverse` need no handle.
//!
//! # Error Codes
//! - `0`: Success
//! - `-1`: Null pointer
//! - `-2`: Not enough handles (inverse evaluation)
//! - `-3`: Buffer overflow (resize and retry)
//! - `-4`: Invalid argument

use crate::error::PathError;
use crate::geom::Float3;
use crate::path::{evaluate_forward, evaluate_inverse, BezierPath, Handle, SmoothMode};

pub const EASE_OK: i32 = 0;
pub const EASE_NULL_POINTER: i32 = -1;
pub const EASE_INSUFFICIENT_HANDLES: i32 = -2;
pub const EASE_BUFFER_TOO_SMALL: i32 = -3;
pub const EASE_INVALID_ARGUMENT: i32 = -4;

/// Opaque handle to a path owned by the library.
pub type EasePathHandle = *mut std::ffi::c_void;

fn status(err: PathError) -> i32 {
    match err {
        PathError::InsufficientHandles { .. } => EASE_INSUFFICIENT_HANDLES,
        PathError::IndexOutOfBounds { .. } => EASE_INVALID_ARGUMENT,
    }
}

unsafe fn path_ref<'a>(handle: EasePathHandle) -> Option<&'a BezierPath> {
    (handle as *const BezierPath).as_ref()
}

unsafe fn path_mut<'a>(handle: EasePathHandle) -> Option<&'a mut BezierPath> {
    (handle as *mut BezierPath).as_mut()
}

fn into_handle(path: BezierPath) -> EasePathHandle {
    Box::into_raw(Box::new(path)) as EasePathHandle
}

/// Create an empty path.
#[no_mangle]
pub extern "C" fn ease_path_new() -> EasePathHandle {
    into_handle(BezierPath::new())
}

/// Create a three-handle ease-in/ease-out ramp.
#[no_mangle]
pub extern "C" fn ease_path_new_ease(
    start_time: f32,
    end_time: f32,
    start_value: f32,
    end_value: f32,
    ease_in: f32,
    ease_out: f32,
) -> EasePathHandle {
    into_handle(BezierPath::ease(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
    ))
}

/// Free a path handle.
///
/// # Safety
/// - `handle` must be a handle returned by `ease_path_new*`, or null
#[no_mangle]
pub unsafe extern "C" fn ease_path_free(handle: EasePathHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut BezierPath));
    }
}

/// Append a copy of `*h` to the path.
///
/// # Safety
/// - `handle` must be a valid path handle
/// - `h` must point to an initialized `Handle`
#[no_mangle]
pub unsafe extern "C" fn ease_path_push(handle: EasePathHandle, h: *const Handle) -> i32 {
    let (Some(path), Some(h)) = (path_mut(handle), h.as_ref()) else {
        return EASE_NULL_POINTER;
    };
    path.push(*h);
    EASE_OK
}

/// Remove all handles.
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_clear(handle: EasePathHandle) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    path.clear();
    EASE_OK
}

/// Number of handles, or `-1` for a null handle.
///
/// # Safety
/// - `handle` must be a valid path handle or null
#[no_mangle]
pub unsafe extern "C" fn ease_path_len(handle: EasePathHandle) -> i64 {
    match path_ref(handle) {
        Some(path) => path.len() as i64,
        None => EASE_NULL_POINTER as i64,
    }
}

/// Set the subdivision tolerance. Must be positive and finite.
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_set_precision(handle: EasePathHandle, precision: f32) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    if !(precision.is_finite() && precision > 0.0) {
        log::warn!("rejected precision {precision}");
        return EASE_INVALID_ARGUMENT;
    }
    path.set_precision(precision);
    EASE_OK
}

/// Set the subdivision / bisection cap. Must be positive.
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_set_max_recursion(handle: EasePathHandle, depth: i32) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    if depth <= 0 {
        log::warn!("rejected max recursion depth {depth}");
        return EASE_INVALID_ARGUMENT;
    }
    path.set_max_recursion_depth(depth as u32);
    EASE_OK
}

/// Derive tangents. `mode`: `0` chord, `1` balanced (auto).
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_smooth(handle: EasePathHandle, mode: i32, looped: u8) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    let mode = match mode {
        0 => SmoothMode::Chord,
        1 => SmoothMode::Balanced,
        other => {
            log::warn!("unknown smooth mode {other}");
            return EASE_INVALID_ARGUMENT;
        }
    };
    path.smooth_with(mode, looped != 0);
    EASE_OK
}

/// Two-factor segment smoothing (always wraps).
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_smooth_scaled(
    handle: EasePathHandle,
    smooth_in: f32,
    smooth_out: f32,
) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    path.smooth_scaled(smooth_in, smooth_out);
    EASE_OK
}

/// Replace tangents with sweep frames oriented by `up`.
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_smooth_tangents(handle: EasePathHandle, up: Float3) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    path.smooth_tangents(up);
    EASE_OK
}

/// Copy handle `index` into `*out`.
///
/// # Safety
/// - `handle` must be a valid path handle
/// - `out` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn ease_path_get(
    handle: EasePathHandle,
    index: usize,
    out: *mut Handle,
) -> i32 {
    let (Some(path), Some(out)) = (path_ref(handle), out.as_mut()) else {
        return EASE_NULL_POINTER;
    };
    match path.get(index) {
        Some(h) => {
            *out = *h;
            EASE_OK
        }
        None => EASE_INVALID_ARGUMENT,
    }
}

/// Forward evaluation: value at `time`.
///
/// # Safety
/// - `handle` must be a valid path handle
/// - `out` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn ease_path_value(handle: EasePathHandle, time: f32, out: *mut f32) -> i32 {
    let (Some(path), Some(out)) = (path_ref(handle), out.as_mut()) else {
        return EASE_NULL_POINTER;
    };
    *out = path.value_at(time);
    EASE_OK
}

/// Inverse evaluation: time at which the path reaches `value`.
///
/// # Safety
/// - `handle` must be a valid path handle
/// - `out` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn ease_path_time(
    handle: EasePathHandle,
    value: f32,
    precision: f32,
    out: *mut f32,
) -> i32 {
    let (Some(path), Some(out)) = (path_ref(handle), out.as_mut()) else {
        return EASE_NULL_POINTER;
    };
    match path.time_at(value, precision) {
        Ok(time) => {
            *out = time;
            EASE_OK
        }
        Err(err) => status(err),
    }
}

/// Tessellate into the path's vertex buffer.
///
/// # Safety
/// - `handle` must be a valid path handle
#[no_mangle]
pub unsafe extern "C" fn ease_path_tessellate(
    handle: EasePathHandle,
    samples_per_segment: i32,
    looped: u8,
) -> i32 {
    let Some(path) = path_mut(handle) else {
        return EASE_NULL_POINTER;
    };
    if samples_per_segment < 0 {
        log::warn!("rejected samples per segment {samples_per_segment}");
        return EASE_INVALID_ARGUMENT;
    }
    path.tessellate(samples_per_segment as usize, looped != 0);
    EASE_OK
}

/// Copy the vertex buffer out.
///
/// # Returns
/// - `0` on success
/// - `-1` on null pointer
/// - `-3` if the buffer is too small (`count` holds the required size)
///
/// # Safety
/// - `handle` must be a valid path handle
/// - `buffer` must have room for `capacity` elements (may be null if `capacity` is 0)
/// - `count` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn ease_path_vertices(
    handle: EasePathHandle,
    buffer: *mut Float3,
    capacity: usize,
    count: *mut usize,
) -> i32 {
    let (Some(path), Some(count)) = (path_ref(handle), count.as_mut()) else {
        return EASE_NULL_POINTER;
    };
    let vertices = path.vertex_buffer();
    *count = vertices.len();
    if vertices.len() > capacity {
        return EASE_BUFFER_TOO_SMALL;
    }
    if vertices.is_empty() {
        return EASE_OK;
    }
    if buffer.is_null() {
        return EASE_NULL_POINTER;
    }
    std::ptr::copy_nonoverlapping(vertices.as_ptr(), buffer, vertices.len());
    EASE_OK
}

/// One-shot forward evaluation of a two-handle ease segment.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn ease_evaluate_forward(
    start_time: f32,
    end_time: f32,
    start_value: f32,
    end_value: f32,
    ease_in: f32,
    ease_out: f32,
    time: f32,
    precision: f32,
) -> f32 {
    evaluate_forward(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
        time,
        precision,
    )
}

/// One-shot inverse evaluation of a two-handle ease segment.
///
/// # Safety
/// - `out` must be a valid pointer
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ease_evaluate_inverse(
    start_time: f32,
    end_time: f32,
    start_value: f32,
    end_value: f32,
    ease_in: f32,
    ease_out: f32,
    value: f32,
    precision: f32,
    out: *mut f32,
) -> i32 {
    let Some(out) = out.as_mut() else {
        return EASE_NULL_POINTER;
    };
    match evaluate_inverse(
        start_time,
        end_time,
        start_value,
        end_value,
        ease_in,
        ease_out,
        value,
        precision,
    ) {
        Ok(time) => {
            *out = time;
            EASE_OK
        }
        Err(err) => status(err),
    }
}
