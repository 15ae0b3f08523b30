//! Seed-free hashing and gradient noise.
//!
//! Everything here is a pure function of its integer inputs, so the same
//! world position always produces the same value.

use causeway_core::Point2;

const BIT_NOISE1: u32 = 0x8529_7a4d;
const BIT_NOISE2: u32 = 0x68e3_1da4;
const BIT_NOISE3: u32 = 0x1859_c4e9;

/// Hash `pos` together with `seed`.
#[inline]
pub fn hash(seed: u32, pos: u32) -> u32 {
    let mut n = pos.wrapping_mul(BIT_NOISE1);
    n = n.wrapping_add(seed);
    n ^= n >> 8;
    n = n.wrapping_add(BIT_NOISE2);
    n ^= n << 8;
    n = n.wrapping_mul(BIT_NOISE3);
    n ^= n >> 8;
    n
}

/// Hash of a column, used to break ties between equally likely choices.
#[inline]
pub fn column_hash(p: Point2) -> u32 {
    hash(p.x.wrapping_mul(p.z) as u32, p.x.wrapping_add(p.z) as u32)
}

/// Pick an element of `items` by hash.
#[inline]
pub fn choose<T>(h: u32, items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    items.get(h as usize % items.len())
}

fn fract(v: f64) -> f64 {
    v - v.floor()
}

/// Pseudo-random gradient in `[-1, 1]²` for a lattice corner.
fn hash22(x: f64, z: f64) -> (f64, f64) {
    const K: (f64, f64) = (35.131_578, 12.987_154);
    let nx = x * K.0 + K.1;
    let nz = z * K.1 + K.0;
    let m = fract(nx * nz * (nx + nz));
    let gx = fract(16.0 * K.0 * m);
    let gz = fract(16.0 * K.1 * m);
    (gx * 2.0 - 1.0, gz * 2.0 - 1.0)
}

/// Smooth 2D gradient noise at `pos`, with lattice cells `cell` units wide.
///
/// The result lies in `[0, 1]`.
pub fn gradient_noise(pos: Point2, cell: f64) -> f64 {
    let px = f64::from(pos.x) / (cell + 0.001);
    let pz = f64::from(pos.z) / (cell + 0.001);

    let (ix, iz) = (px.floor(), pz.floor());
    let (fx, fz) = (px - ix, pz - iz);

    let dot = |g: (f64, f64), dx: f64, dz: f64| g.0 * dx + g.1 * dz;
    let d00 = dot(hash22(ix, iz), fx, fz);
    let d10 = dot(hash22(ix + 1.0, iz), fx - 1.0, fz);
    let d01 = dot(hash22(ix, iz + 1.0), fx, fz - 1.0);
    let d11 = dot(hash22(ix + 1.0, iz + 1.0), fx - 1.0, fz - 1.0);

    // Quintic smoothstep.
    let ux = fx * fx * fx * (fx * (fx * 6.0 - 15.0) + 10.0);
    let uz = fz * fz * fz * (fz * (fz * 6.0 - 15.0) + 10.0);

    let v = d00 + ux * (d10 - d00) + uz * (d01 - d00) + ux * uz * (d00 - d10 - d01 + d11);
    (0.5 + 0.5 * v).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_mixes() {
        assert_eq!(hash(7, 42), hash(7, 42));
        assert_ne!(hash(7, 42), hash(8, 42));
        assert_ne!(hash(7, 42), hash(7, 43));
    }

    #[test]
    fn column_hash_handles_negatives_and_overflow() {
        let a = column_hash(Point2::new(-5, 9));
        assert_eq!(a, column_hash(Point2::new(-5, 9)));
        // x * z overflows i32; must not panic.
        let _ = column_hash(Point2::new(i32::MAX, 3));
    }

    #[test]
    fn choose_indexes_by_hash() {
        let items = ["a", "b", "c"];
        assert_eq!(choose(0, &items), Some(&"a"));
        assert_eq!(choose(4, &items), Some(&"b"));
        assert_eq!(choose::<u8>(4, &[]), None);
    }

    #[test]
    fn gradient_noise_stays_in_unit_range() {
        let mut min = 1.0f64;
        let mut max = 0.0f64;
        for x in -300..300 {
            for z in (-300..300).step_by(7) {
                let v = gradient_noise(Point2::new(x, z), 4.0);
                assert!((0.0..=1.0).contains(&v));
                min = min.min(v);
                max = max.max(v);
            }
        }
        // It actually varies.
        assert!(max - min > 0.3);
    }

    #[test]
    fn gradient_noise_is_smooth_at_lattice_scale() {
        // Neighboring columns differ far less than the full range.
        let mut total = 0.0;
        for x in 0..256 {
            let a = gradient_noise(Point2::new(x, 10), 4.0);
            let b = gradient_noise(Point2::new(x + 1, 10), 4.0);
            total += (a - b).abs();
        }
        assert!(total / 256.0 < 0.15);
    }

    #[test]
    fn gradient_noise_is_deterministic() {
        for (x, z) in [(0, 0), (17, -3), (-1000, 250)] {
            let p = Point2::new(x, z);
            assert_eq!(gradient_noise(p, 4.0), gradient_noise(p, 4.0));
        }
    }
}
