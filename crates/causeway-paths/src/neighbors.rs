use causeway_core::{Direction, Point2};

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating cardinal (4-way) or all (8-way)
/// neighbors of a column, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Point2>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point2, keep: impl Fn(Point2) -> bool) -> &[Point2] {
        self.collect(p, &Direction::CARDINAL, keep)
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point2, keep: impl Fn(Point2) -> bool) -> &[Point2] {
        self.collect(p, &Direction::ALL, keep)
    }

    fn collect(
        &mut self,
        p: Point2,
        dirs: &[Direction],
        keep: impl Fn(Point2) -> bool,
    ) -> &[Point2] {
        self.buf.clear();
        for d in dirs {
            let n = p + d.offset();
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_core::Area;

    #[test]
    fn filters_by_predicate() {
        let area = Area::new(0, 0, 3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(nb.all(Point2::new(1, 1), |n| area.contains(n)).len(), 8);
        assert_eq!(nb.all(Point2::new(0, 0), |n| area.contains(n)).len(), 3);
        assert_eq!(
            nb.cardinal(Point2::new(0, 0), |n| area.contains(n)),
            &[Point2::new(1, 0), Point2::new(0, 1)]
        );
    }
}
