/// Default tolerance on `x` at which subdivision stops.
pub const DEFAULT_PRECISION: f32 = 0.001;
/// Default cap on subdivision recursion and bisection iterations.
pub const DEFAULT_MAX_RECURSION_DEPTH: u32 = 250;
/// Sample density used when a caller has no better choice.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 20;

/// Numerical parameters shared by forward and inverse evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSettings {
    pub precision: f32,
    pub max_recursion_depth: u32,
}

impl PathSettings {
    /// Non-positive or NaN precision is raised to `f32::EPSILON` and a zero
    /// depth to 1 so that searches always terminate.
    pub fn new(precision: f32, max_recursion_depth: u32) -> Self {
        Self {
            precision: sanitize_precision(precision),
            max_recursion_depth: max_recursion_depth.max(1),
        }
    }

    pub fn with_precision(self, precision: f32) -> Self {
        Self::new(precision, self.max_recursion_depth)
    }

    pub fn with_max_recursion_depth(self, max_recursion_depth: u32) -> Self {
        Self::new(self.precision, max_recursion_depth)
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

fn sanitize_precision(precision: f32) -> f32 {
    if precision > 0.0 {
        precision
    } else {
        f32::EPSILON
    }
}
