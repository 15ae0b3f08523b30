use causeway_core::Point3;

/// Minimal routing interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point3, buf: &mut Vec<Point3>);
}

/// Pather with an accumulated, path-dependent cost.
///
/// Costs fold the heuristic estimate into the running total: each call
/// removes the estimate carried for `prev` and adds the one for `next`, so
/// the frontier can be ordered by a single number.
pub trait RoutePather: Pather {
    /// Total assigned to the single-point path `[start]`.
    fn seed_cost(&self, start: Point3, goal: Point3) -> f64;

    /// Total after extending a path ending at `prev` (with total
    /// `prev_total`) by one step to `next`.
    ///
    /// Totals may be any finite value; the frontier orders them with
    /// `f64::total_cmp`. With its default weights, [`HighwayPather`] keeps
    /// every total of a path grown from [`seed_cost`](Self::seed_cost) at
    /// or above zero.
    ///
    /// [`HighwayPather`]: crate::HighwayPather
    fn extend_cost(&self, prev_total: f64, prev: Point3, next: Point3, goal: Point3) -> f64;
}
