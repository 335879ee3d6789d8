//! Geometry primitives for Bézier paths.
//!
//! Zero-dependency value types: the `Float3` vector and the cubic segment
//! helpers the path evaluator and tessellator are built on.

mod bezier;
mod math;

pub use bezier::CubicSegment;
pub use math::Float3;
