//! Filling sparse waypoints out into a walkable point sequence.

use std::fmt;

use causeway_core::{Point2, Point3};

use crate::distance::chebyshev;
use crate::router::Path;

/// A pair of consecutive waypoints that is not one lattice step apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensifyError {
    DegenerateGap { from: Point3, to: Point3 },
}

impl fmt::Display for DensifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGap { from, to } => {
                write!(f, "waypoints {from} and {to} are not one lattice step apart")
            }
        }
    }
}

impl std::error::Error for DensifyError {}

/// How two consecutive waypoints relate horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    /// Already touching (or stacked); nothing to insert.
    Adjacent,
    /// `magnitude` unit steps of `step` apart.
    Lattice { step: Point2, magnitude: i32 },
    Degenerate,
}

fn classify(a: Point3, b: Point3) -> Gap {
    let d = b.xz() - a.xz();
    let magnitude = chebyshev(a.xz(), b.xz());
    if magnitude <= 1 {
        return Gap::Adjacent;
    }
    if magnitude != 2 && magnitude != 4 {
        return Gap::Degenerate;
    }
    // Each moving axis must cover the full magnitude.
    let on_axis = |v: i32| v == 0 || v.abs() == magnitude;
    if !on_axis(d.x) || !on_axis(d.z) {
        return Gap::Degenerate;
    }
    Gap::Lattice {
        step: Point2::new(d.x.signum(), d.z.signum()),
        magnitude,
    }
}

/// Push the points strictly between `a` and `b`, interpolating elevation
/// with flooring division.
fn fill(out: &mut Path, a: Point3, b: Point3, step: Point2, magnitude: i32) {
    for i in 1..magnitude {
        let y = (a.y * (magnitude - i) + b.y * i).div_euclid(magnitude);
        out.push(a.step(step * i).with_y(y));
    }
}

fn densify_with(
    waypoints: &[Point3],
    mut on_degenerate: impl FnMut(Point3, Point3) -> Result<(), DensifyError>,
) -> Result<Path, DensifyError> {
    let Some(&first) = waypoints.first() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(waypoints.len() * 4);
    out.push(first);

    for pair in waypoints.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == b {
            continue;
        }
        match classify(a, b) {
            Gap::Adjacent => {}
            Gap::Lattice { step, magnitude } => fill(&mut out, a, b, step, magnitude),
            Gap::Degenerate => on_degenerate(a, b)?,
        }
        out.push(b);
    }

    Ok(out)
}

/// Insert the intermediate points between consecutive waypoints.
///
/// Waypoints two or four units apart (along one axis, or diagonally by the
/// same amount on both) get one point per unit in between, with linearly
/// interpolated elevation. Already-adjacent waypoints pass through and
/// repeated ones are dropped. Any other gap is logged and left as is.
pub fn densify(waypoints: &[Point3]) -> Path {
    let filled = densify_with(waypoints, |from, to| {
        log::warn!("no lattice step between waypoints {from} and {to}, leaving a gap");
        Ok(())
    });
    // The callback never fails.
    filled.unwrap_or_default()
}

/// Like [`densify`], but reports the first gap it cannot fill.
pub fn densify_strict(waypoints: &[Point3]) -> Result<Path, DensifyError> {
    densify_with(waypoints, |from, to| {
        Err(DensifyError::DegenerateGap { from, to })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32, z: i32) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn four_unit_gap_gets_three_points() {
        let out = densify(&[p(0, 64, 0), p(4, 64, 0)]);
        assert_eq!(
            out,
            vec![p(0, 64, 0), p(1, 64, 0), p(2, 64, 0), p(3, 64, 0), p(4, 64, 0)]
        );
    }

    #[test]
    fn elevation_is_interpolated_with_floor() {
        let out = densify(&[p(0, 64, 0), p(0, 66, -4)]);
        let ys: Vec<i32> = out.iter().map(|q| q.y).collect();
        assert_eq!(ys, vec![64, 64, 65, 65, 66]);
        assert!(out.windows(2).all(|w| w[1].z == w[0].z - 1));

        let out = densify(&[p(0, 66, 0), p(4, 64, 0)]);
        let ys: Vec<i32> = out.iter().map(|q| q.y).collect();
        assert_eq!(ys, vec![66, 65, 65, 64, 64]);
    }

    #[test]
    fn diagonal_two_unit_gap() {
        let out = densify(&[p(0, 64, 0), p(-2, 64, 2)]);
        assert_eq!(out, vec![p(0, 64, 0), p(-1, 64, 1), p(-2, 64, 2)]);
    }

    #[test]
    fn dense_input_is_a_fixed_point() {
        let dense = vec![p(0, 64, 0), p(1, 64, 0), p(2, 65, 1), p(2, 65, 2), p(1, 66, 3)];
        assert_eq!(densify(&dense), dense);
        assert_eq!(densify(&densify(&dense)), dense);
    }

    #[test]
    fn densify_is_idempotent_after_filling() {
        let once = densify(&[p(0, 64, 0), p(4, 66, 0), p(6, 66, 2), p(6, 64, 6)]);
        assert_eq!(densify(&once), once);
        for w in once.windows(2) {
            assert_eq!(chebyshev(w[0].xz(), w[1].xz()), 1);
        }
    }

    #[test]
    fn order_is_preserved_across_many_waypoints() {
        let waypoints = vec![p(0, 64, 0), p(4, 64, 0), p(8, 64, 0), p(8, 64, 4)];
        let out = densify(&waypoints);
        assert_eq!(out.first(), Some(&p(0, 64, 0)));
        assert_eq!(out.last(), Some(&p(8, 64, 4)));
        assert_eq!(out.len(), 13);
        for w in &waypoints {
            assert!(out.contains(w));
        }
    }

    #[test]
    fn repeated_waypoints_collapse() {
        let out = densify(&[p(0, 64, 0), p(0, 64, 0), p(2, 64, 0)]);
        assert_eq!(out, vec![p(0, 64, 0), p(1, 64, 0), p(2, 64, 0)]);
    }

    #[test]
    fn degenerate_gap_is_passed_through_or_reported() {
        let waypoints = [p(0, 64, 0), p(3, 64, 0), p(5, 64, 0)];
        // Lenient: nothing inserted for 0 -> 3, filled for 3 -> 5.
        assert_eq!(
            densify(&waypoints),
            vec![p(0, 64, 0), p(3, 64, 0), p(4, 64, 0), p(5, 64, 0)]
        );
        assert_eq!(
            densify_strict(&waypoints),
            Err(DensifyError::DegenerateGap {
                from: p(0, 64, 0),
                to: p(3, 64, 0),
            })
        );
        // Mismatched axes are degenerate too.
        assert!(densify_strict(&[p(0, 64, 0), p(4, 64, 2)]).is_err());
    }

    #[test]
    fn empty_and_single() {
        assert!(densify(&[]).is_empty());
        assert_eq!(densify(&[p(1, 2, 3)]), vec![p(1, 2, 3)]);
        assert_eq!(densify_strict(&[p(1, 2, 3)]), Ok(vec![p(1, 2, 3)]));
    }
}
