//! easepath - piecewise cubic Bézier paths for easing curves and swept geometry.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **geom**: Vector and cubic segment primitives (Float3, CubicSegment)
//! - **path**: Handles, path editing, tangent smoothing, evaluation, tessellation
//! - **error**: Error taxonomy shared by the path API
//! - **ffi**: C FFI bindings
//!
//! # Usage
//!
//! ```
//! use easepath::BezierPath;
//!
//! let ramp = BezierPath::ease(0.0, 1.0, 0.0, 100.0, 0.25, 0.25);
//! let value = ramp.value_at(0.5);
//! let time = ramp.time_at(value, 1e-4).unwrap();
//! assert!((time - 0.5).abs() < 1e-2);
//! ```
//!
//! The crate logs through the `log` facade and installs no logger.
//!
//! For C/C#/Unity, build with the `ffi` feature, link the cdylib and use the
//! `ease_*` functions.

pub mod error;
pub mod geom;
pub mod path;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types at crate root
pub use error::PathError;
pub use geom::{CubicSegment, Float3};
pub use path::{evaluate_forward, evaluate_inverse, BezierPath, Handle, PathSettings, SmoothMode};
