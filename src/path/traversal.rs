use super::{BezierPath, Handle};

/// Index reached by moving `step` places from `index` in a sequence of `len`.
///
/// Open sequences return `None` when the move leaves `0..len`. Looped
/// sequences wrap around, so in a single-element loop every handle is its
/// own neighbor. `index` must be in bounds.
pub fn neighbor(index: usize, step: isize, len: usize, looped: bool) -> Option<usize> {
    if index >= len {
        return None;
    }
    let target = index as isize + step;
    if (0..len as isize).contains(&target) {
        return Some(target as usize);
    }
    if !looped {
        return None;
    }
    Some(target.rem_euclid(len as isize) as usize)
}

impl BezierPath {
    /// Prior and next handles of `index`, wrapping when `looped`.
    pub fn neighbors(&self, index: usize, looped: bool) -> (Option<&Handle>, Option<&Handle>) {
        let len = self.handles.len();
        let prior = neighbor(index, -1, len, looped).map(|i| &self.handles[i]);
        let next = neighbor(index, 1, len, looped).map(|i| &self.handles[i]);
        (prior, next)
    }

    /// Consecutive handle pairs in traversal order.
    ///
    /// A looped path adds the closing pair `(last, first)`.
    pub fn segments(&self, looped: bool) -> impl Iterator<Item = (&Handle, &Handle)> + '_ {
        let len = self.handles.len();
        (0..len).filter_map(move |i| {
            neighbor(i, 1, len, looped).map(|j| (&self.handles[i], &self.handles[j]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Float3;

    #[test]
    fn interior_neighbors_ignore_loop_flag() {
        assert_eq!(neighbor(1, -1, 3, false), Some(0));
        assert_eq!(neighbor(1, 1, 3, false), Some(2));
        assert_eq!(neighbor(1, -1, 3, true), Some(0));
        assert_eq!(neighbor(1, 1, 3, true), Some(2));
    }

    #[test]
    fn open_ends_have_no_neighbor() {
        assert_eq!(neighbor(0, -1, 3, false), None);
        assert_eq!(neighbor(2, 1, 3, false), None);
    }

    #[test]
    fn looped_ends_wrap() {
        assert_eq!(neighbor(0, -1, 3, true), Some(2));
        assert_eq!(neighbor(2, 1, 3, true), Some(0));
    }

    #[test]
    fn single_handle_loop_is_its_own_neighbor() {
        assert_eq!(neighbor(0, 1, 1, true), Some(0));
        assert_eq!(neighbor(0, -1, 1, true), Some(0));
        assert_eq!(neighbor(0, 1, 1, false), None);
    }

    #[test]
    fn out_of_range_index_has_no_neighbor() {
        assert_eq!(neighbor(3, -1, 3, true), None);
        assert_eq!(neighbor(0, 1, 0, true), None);
    }

    #[test]
    fn segments_open_and_looped() {
        let path: BezierPath = (0..3)
            .map(|i| Handle::at(Float3::new(i as f32, 0.0, 0.0)))
            .collect();

        let open: Vec<_> = path
            .segments(false)
            .map(|(a, b)| (a.position.x, b.position.x))
            .collect();
        assert_eq!(open, vec![(0.0, 1.0), (1.0, 2.0)]);

        let looped: Vec<_> = path
            .segments(true)
            .map(|(a, b)| (a.position.x, b.position.x))
            .collect();
        assert_eq!(looped, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 0.0)]);
    }

    #[test]
    fn neighbors_of_first_handle() {
        let path: BezierPath = (0..3)
            .map(|i| Handle::at(Float3::new(i as f32, 0.0, 0.0)))
            .collect();

        let (prior, next) = path.neighbors(0, false);
        assert!(prior.is_none());
        assert_eq!(next.map(|h| h.position.x), Some(1.0));

        let (prior, _) = path.neighbors(0, true);
        assert_eq!(prior.map(|h| h.position.x), Some(2.0));
    }
}
