use causeway_core::Point2;

/// Chebyshev (L∞) distance between two columns.
#[inline]
pub fn chebyshev(a: Point2, b: Point2) -> i32 {
    (a.x - b.x).abs().max((a.z - b.z).abs())
}
