use super::settings::DEFAULT_SAMPLES_PER_SEGMENT;
use super::traversal::neighbor;
use super::BezierPath;
use crate::geom::Float3;

impl BezierPath {
    /// Samples every segment at `samples_per_segment` uniform parameter steps
    /// `u = i / n`, `i in 0..n`, into the vertex buffer.
    ///
    /// An open path yields `(len - 1) * n` points. A looped path also samples
    /// the closing segment and repeats the first handle to close the ring,
    /// `len * n + 1` points. When there is nothing to sample the call does
    /// nothing and the previous buffer stays in place; otherwise the buffer is
    /// replaced.
    ///
    /// Spacing is uniform in the curve parameter, not in arc length.
    pub fn tessellate(&mut self, samples_per_segment: usize, looped: bool) {
        let len = self.handles.len();
        let segments = if looped { len } else { len.saturating_sub(1) };
        let num_points = match segments.checked_mul(samples_per_segment) {
            Some(0) => return,
            Some(n) => n.checked_add(usize::from(looped)),
            None => None,
        };
        let Some(num_points) = num_points else {
            log::warn!("{segments} segments x {samples_per_segment} samples overflows");
            return;
        };

        let step = 1.0 / samples_per_segment as f32;
        let mut buffer = Vec::with_capacity(num_points);
        for (a, b) in self.segments(looped) {
            let segment = a.segment_to(b);
            buffer.extend((0..samples_per_segment).map(|i| segment.point(i as f32 * step)));
        }
        if looped {
            buffer.push(self.handles[0].position);
        }

        log::debug!(
            "tessellated {segments} segments x {samples_per_segment} samples into {} points",
            buffer.len()
        );
        self.vertex_buffer = buffer;
    }

    /// [`tessellate`](BezierPath::tessellate) at
    /// [`DEFAULT_SAMPLES_PER_SEGMENT`] samples per segment.
    pub fn tessellate_default(&mut self, looped: bool) {
        self.tessellate(DEFAULT_SAMPLES_PER_SEGMENT, looped);
    }

    /// Points from the last [`tessellate`](BezierPath::tessellate) call.
    pub fn vertex_buffer(&self) -> &[Float3] {
        &self.vertex_buffer
    }

    /// Point at a handle-indexed parameter.
    ///
    /// The integer part of `t` picks the segment starting at handle
    /// `floor(t) mod len` and ending at the following handle, wrapping past
    /// the last one; the fractional part is the curve parameter on it.
    /// `None` for an empty path.
    pub fn point_at(&self, t: f32) -> Option<Float3> {
        let len = self.handles.len();
        if len == 0 {
            return None;
        }
        let whole = t.floor();
        let index = (whole as i64).rem_euclid(len as i64) as usize;
        let next = neighbor(index, 1, len, true)?;
        Some(Self::point_on_segment(
            &self.handles[index],
            &self.handles[next],
            t - whole,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Handle;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn square() -> BezierPath {
        [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| Handle::at(Float3::new(x, y, 0.0)))
            .collect()
    }

    #[test]
    fn open_tessellation_size() {
        let mut path = square();
        path.tessellate(5, false);
        assert_eq!(path.vertex_buffer().len(), 3 * 5);
    }

    #[test]
    fn looped_tessellation_size_and_closure() {
        let mut path = square();
        path.tessellate(5, true);
        let buffer = path.vertex_buffer();
        assert_eq!(buffer.len(), 4 * 5 + 1);
        assert_eq!(buffer[0], path[0].position);
        assert_eq!(buffer[buffer.len() - 1], path[0].position);
    }

    #[test]
    fn segments_start_on_handles() {
        let mut path = square();
        path.tessellate(4, false);
        let buffer = path.vertex_buffer();
        for segment in 0..3 {
            assert_eq!(buffer[segment * 4], path[segment].position);
        }
    }

    #[test]
    fn samples_are_uniform_in_parameter() {
        let mut path = BezierPath::ease_segment(0.0, 1.0, 0.0, 1.0, 0.4, 0.4);
        path.tessellate(4, false);
        let (a, b) = (path[0], path[1]);
        for (i, v) in path.vertex_buffer().iter().enumerate() {
            let expected = BezierPath::point_on_segment(&a, &b, i as f32 / 4.0);
            assert_relative_eq!(v.x, expected.x, epsilon = TOLERANCE);
            assert_relative_eq!(v.y, expected.y, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn nothing_to_sample_keeps_previous_buffer() {
        let mut path = square();
        path.tessellate(3, false);
        let before = path.vertex_buffer().to_vec();

        path.tessellate(0, true);
        assert_eq!(path.vertex_buffer(), &before[..]);

        path.clear();
        path.tessellate(3, false);
        assert_eq!(path.vertex_buffer(), &before[..]);
    }

    #[test]
    fn single_handle_open_is_noop_and_looped_closes_on_itself() {
        let mut path = BezierPath::new();
        path.push(Handle::at(Float3::new(2.0, 3.0, 0.0)));

        path.tessellate(4, false);
        assert!(path.vertex_buffer().is_empty());

        path.tessellate(4, true);
        assert_eq!(path.vertex_buffer().len(), 5);
        assert!(path
            .vertex_buffer()
            .iter()
            .all(|&v| v == Float3::new(2.0, 3.0, 0.0)));
    }

    #[test]
    fn buffer_goes_stale_after_edits() {
        let mut path = square();
        path.tessellate(2, false);
        let before = path.vertex_buffer().to_vec();

        path[1].position = Float3::new(5.0, 5.0, 0.0);
        assert_eq!(path.vertex_buffer(), &before[..]);

        path.tessellate(2, false);
        assert_ne!(path.vertex_buffer(), &before[..]);
    }

    #[test]
    fn default_density() {
        let mut path = square();
        path.tessellate_default(false);
        assert_eq!(path.vertex_buffer().len(), 3 * DEFAULT_SAMPLES_PER_SEGMENT);
        path.tessellate_default(true);
        assert_eq!(path.vertex_buffer().len(), 4 * DEFAULT_SAMPLES_PER_SEGMENT + 1);
    }

    #[test]
    fn overflowing_sample_count_is_noop() {
        let mut path = square();
        path.tessellate(2, false);
        let before = path.vertex_buffer().to_vec();

        path.tessellate(usize::MAX, false);
        assert_eq!(path.vertex_buffer(), &before[..]);
    }

    #[test]
    fn retessellation_overwrites() {
        let mut path = square();
        path.tessellate(8, true);
        path.tessellate(2, false);
        assert_eq!(path.vertex_buffer().len(), 6);
    }

    #[test]
    fn point_at_picks_segment_and_wraps() {
        let path = square();
        let p = path.point_at(1.0).unwrap();
        assert_eq!(p, path[1].position);

        let p = path.point_at(4.0).unwrap();
        assert_eq!(p, path[0].position);

        let closing = path.point_at(3.5).unwrap();
        assert_relative_eq!(closing.x, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(closing.y, 0.5, epsilon = TOLERANCE);

        let back = path.point_at(-0.5).unwrap();
        assert_relative_eq!(back.x, closing.x, epsilon = TOLERANCE);
        assert_relative_eq!(back.y, closing.y, epsilon = TOLERANCE);
    }

    #[test]
    fn point_at_empty_is_none() {
        assert!(BezierPath::new().point_at(0.5).is_none());
    }
}
