use std::collections::{HashSet, VecDeque};

use causeway_core::{Area, Point2};

use crate::neighbors::Neighbors;

/// Find the closest column to `start` (in 4-connected steps within
/// `bounds`) for which `is_road` holds.
///
/// The breadth-first search dequeues at most `cap` columns; `None` means
/// no road was found within that budget or the area has none.
pub fn nearest_road(
    start: Point2,
    bounds: Area,
    is_road: impl Fn(Point2) -> bool,
    cap: usize,
) -> Option<Point2> {
    if !bounds.contains(start) {
        return None;
    }

    let mut visited: HashSet<Point2> = HashSet::from([start]);
    let mut queue: VecDeque<Point2> = VecDeque::from([start]);
    let mut nb = Neighbors::new();
    let mut dequeued = 0usize;

    while let Some(p) = queue.pop_front() {
        if dequeued >= cap {
            log::debug!("nearest road from {start}: gave up after {cap} columns");
            return None;
        }
        dequeued += 1;

        if is_road(p) {
            return Some(p);
        }

        for &n in nb.cardinal(p, |n| bounds.contains(n)) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_closest_road() {
        let area = Area::new(0, 0, 20, 20);
        let road = |p: Point2| p.x == 15 || p.z == 2;
        assert_eq!(nearest_road(Point2::new(5, 5), area, road, 1000), Some(Point2::new(5, 2)));
        assert_eq!(nearest_road(Point2::new(13, 10), area, road, 1000), Some(Point2::new(15, 10)));
    }

    #[test]
    fn start_on_a_road() {
        let area = Area::new(0, 0, 4, 4);
        let p = Point2::new(1, 1);
        assert_eq!(nearest_road(p, area, |_| true, 1), Some(p));
    }

    #[test]
    fn cap_limits_the_search() {
        let area = Area::new(0, 0, 100, 100);
        let road = |p: Point2| p == Point2::new(90, 90);
        assert_eq!(nearest_road(Point2::new(0, 0), area, road, 50), None);
        assert_eq!(
            nearest_road(Point2::new(0, 0), area, road, 100 * 100),
            Some(Point2::new(90, 90))
        );
    }

    #[test]
    fn no_road_or_outside() {
        let area = Area::new(0, 0, 5, 5);
        assert_eq!(nearest_road(Point2::new(2, 2), area, |_| false, 1000), None);
        assert_eq!(nearest_road(Point2::new(9, 9), area, |_| true, 1000), None);
    }
}
