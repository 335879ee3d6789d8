//! Bézier paths: handles, tangent derivation, evaluation and tessellation.
//!
//! `BezierPath` owns its handles. Construction and editing live in
//! `bezier_path`; the algorithms are split into `impl BezierPath` blocks by
//! concern.

mod bezier_path;
mod evaluate;
mod handle;
mod profile;
mod settings;
mod smooth;
mod tessellate;
mod traversal;

pub use bezier_path::BezierPath;
pub use evaluate::{subdivide, Subdivision};
pub use handle::Handle;
pub use profile::{evaluate_forward, evaluate_inverse};
pub use settings::{
    PathSettings, DEFAULT_MAX_RECURSION_DEPTH, DEFAULT_PRECISION, DEFAULT_SAMPLES_PER_SEGMENT,
};
pub use smooth::SmoothMode;
pub use traversal::neighbor;
