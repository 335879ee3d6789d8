use std::ops::{Index, IndexMut};

use super::settings::PathSettings;
use super::Handle;
use crate::error::PathError;
use crate::geom::Float3;

/// Ordered sequence of handles; each consecutive pair bounds one cubic segment.
///
/// When used as an easing function, `position.x` must be non-decreasing along
/// the handles. This is not checked.
///
/// The vertex buffer is a cache written only by
/// [`tessellate`](BezierPath::tessellate). Editing handles afterwards leaves it
/// stale; re-tessellate after every mutation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BezierPath {
    pub(crate) handles: Vec<Handle>,
    pub(crate) settings: PathSettings,
    pub(crate) vertex_buffer: Vec<Float3>,
}

impl BezierPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PathSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Ease-in/ease-out ramp from `(start_time, start_value)` to
    /// `(end_time, end_value)`.
    ///
    /// A mirrored third handle one span past the end brackets `end_time`, so
    /// evaluating exactly at the end needs no special case.
    pub fn ease(
        start_time: f32,
        end_time: f32,
        start_value: f32,
        end_value: f32,
        ease_in: f32,
        ease_out: f32,
    ) -> Self {
        [
            Handle::new(
                Float3::new(start_time, start_value, 0.0),
                Float3::ZERO,
                Float3::new(ease_in, 0.0, 0.0),
            ),
            Handle::new(
                Float3::new(end_time, end_value, 0.0),
                Float3::new(-ease_out, 0.0, 0.0),
                Float3::new(ease_out, 0.0, 0.0),
            ),
            Handle::new(
                Float3::new(end_time + (end_time - start_time), start_value, 0.0),
                Float3::new(-ease_in, 0.0, 0.0),
                Float3::ZERO,
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Two-handle segment backing the one-shot
    /// [`evaluate_forward`](crate::path::evaluate_forward) and
    /// [`evaluate_inverse`](crate::path::evaluate_inverse) helpers.
    ///
    /// The end handle's incoming tangent is `+ease_out`, so its control point
    /// sits past `end_time`. For nonzero `ease_out` the curve overshoots in
    /// time and turns back; use [`ease`](BezierPath::ease) for a ramp that
    /// stays monotone.
    pub fn ease_segment(
        start_time: f32,
        end_time: f32,
        start_value: f32,
        end_value: f32,
        ease_in: f32,
        ease_out: f32,
    ) -> Self {
        [
            Handle::new(
                Float3::new(start_time, start_value, 0.0),
                Float3::ZERO,
                Float3::new(ease_in, 0.0, 0.0),
            ),
            Handle::new(
                Float3::new(end_time, end_value, 0.0),
                Float3::new(ease_out, 0.0, 0.0),
                Float3::ZERO,
            ),
        ]
        .into_iter()
        .collect()
    }

    pub fn push(&mut self, handle: Handle) {
        self.handles.push(handle);
    }

    /// Inserts a copy of `handle` at `index` and returns the stored handle.
    ///
    /// # Panics
    /// If `index > len`.
    pub fn insert(&mut self, index: usize, handle: Handle) -> &mut Handle {
        self.handles.insert(index, handle);
        &mut self.handles[index]
    }

    pub fn try_insert(&mut self, index: usize, handle: Handle) -> Result<&mut Handle, PathError> {
        if index > self.handles.len() {
            return Err(PathError::IndexOutOfBounds {
                index,
                len: self.handles.len(),
            });
        }
        Ok(self.insert(index, handle))
    }

    /// Removes and returns the handle at `index`.
    ///
    /// # Panics
    /// If `index >= len`.
    pub fn remove(&mut self, index: usize) -> Handle {
        self.handles.remove(index)
    }

    pub fn try_remove(&mut self, index: usize) -> Result<Handle, PathError> {
        if index >= self.handles.len() {
            return Err(PathError::IndexOutOfBounds {
                index,
                len: self.handles.len(),
            });
        }
        Ok(self.handles.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Handle> {
        self.handles.get_mut(index)
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut [Handle] {
        &mut self.handles
    }

    /// Removes all handles. The vertex buffer is left as is.
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn settings(&self) -> PathSettings {
        self.settings
    }

    pub fn set_precision(&mut self, precision: f32) {
        self.settings = self.settings.with_precision(precision);
    }

    pub fn set_max_recursion_depth(&mut self, depth: u32) {
        self.settings = self.settings.with_max_recursion_depth(depth);
    }

    /// `x` of the first handle, or 0 when empty.
    pub fn start(&self) -> f32 {
        self.handles.first().map_or(0.0, |h| h.position.x)
    }

    /// `x` of the last handle, or 0 when empty.
    pub fn end(&self) -> f32 {
        self.handles.last().map_or(0.0, |h| h.position.x)
    }

    /// `y` of the first handle, or 0 when empty.
    pub fn start_value(&self) -> f32 {
        self.handles.first().map_or(0.0, |h| h.position.y)
    }

    /// `y` of the last handle, or 0 when empty.
    pub fn end_value(&self) -> f32 {
        self.handles.last().map_or(0.0, |h| h.position.y)
    }

    /// Parametric span `end - start`.
    pub fn duration(&self) -> f32 {
        self.end() - self.start()
    }

    /// Writes the handles and cached vertices to the `log` facade at debug level.
    pub fn log_dump(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        log::debug!(
            "bezier path: {} handles, precision {}, max recursion {}",
            self.handles.len(),
            self.settings.precision,
            self.settings.max_recursion_depth
        );
        for (i, h) in self.handles.iter().enumerate() {
            log::debug!(
                "  handle[{i:02}] position {:?} left {:?} right {:?} side {:?} tangent {:?}",
                h.position,
                h.left_tangent,
                h.right_tangent,
                h.side_normal,
                h.tangent_normal
            );
        }
        log::debug!("  vertex buffer: {} points", self.vertex_buffer.len());
        for (i, v) in self.vertex_buffer.iter().enumerate() {
            log::debug!("  v[{i:03}] {v:?}");
        }
    }
}

impl Index<usize> for BezierPath {
    type Output = Handle;
    fn index(&self, index: usize) -> &Handle {
        &self.handles[index]
    }
}

impl IndexMut<usize> for BezierPath {
    fn index_mut(&mut self, index: usize) -> &mut Handle {
        &mut self.handles[index]
    }
}

impl Extend<Handle> for BezierPath {
    fn extend<I: IntoIterator<Item = Handle>>(&mut self, iter: I) {
        self.handles.extend(iter);
    }
}

impl FromIterator<Handle> for BezierPath {
    fn from_iter<I: IntoIterator<Item = Handle>>(iter: I) -> Self {
        let mut path = Self::new();
        path.extend(iter);
        path
    }
}
