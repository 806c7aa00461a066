//! Bernstein basis evaluation shared by curves and surfaces.
//!
//! The binomial table is a compile-time Pascal triangle capped at
//! [`MAX_DEGREE`]. Power tables are built per evaluation and never stored on
//! the evaluators, so evaluation only needs `&self`.

use bez_core::{BezError, Result};
use bez_math::{DVec3, Point3, Vector3};

/// Highest supported polynomial degree in one parametric direction.
pub const MAX_DEGREE: usize = 15;

/// Highest supported number of control points in one parametric direction.
pub const MAX_CONTROL_POINTS: usize = MAX_DEGREE + 1;

/// `BINOMIALS[n][i]` is C(n, i) for `i <= n`, zero above the diagonal.
pub const BINOMIALS: [[u64; MAX_CONTROL_POINTS]; MAX_CONTROL_POINTS] = pascal_triangle();

const fn pascal_triangle() -> [[u64; MAX_CONTROL_POINTS]; MAX_CONTROL_POINTS] {
    let mut table = [[0u64; MAX_CONTROL_POINTS]; MAX_CONTROL_POINTS];
    let mut n = 0;
    while n < MAX_CONTROL_POINTS {
        table[n][0] = 1;
        let mut i = 1;
        while i <= n {
            table[n][i] = table[n - 1][i - 1] + table[n - 1][i];
            i += 1;
        }
        n += 1;
    }
    table
}

/// C(n, i) as a float.
#[inline]
pub fn binomial(n: usize, i: usize) -> f64 {
    debug_assert!(n <= MAX_DEGREE && i <= n, "binomial({n}, {i}) out of table");
    BINOMIALS[n][i] as f64
}

/// Reject control point runs the basis table cannot evaluate.
pub fn check_count(count: usize, what: &str) -> Result<()> {
    if count == 0 {
        return Err(BezError::EmptyControlPoints(format!("{what} has no control points")));
    }
    if count > MAX_CONTROL_POINTS {
        return Err(BezError::DegreeOverflow {
            count,
            max: MAX_CONTROL_POINTS,
        });
    }
    Ok(())
}

/// Powers `t^k` and `(1 - t)^k` for `k = 0..=degree`.
///
/// Entry 0 is always 1.0 and entry `k` is entry `k - 1` times `t` (resp.
/// `1 - t`), so the table matches the incremental definition exactly.
#[derive(Debug, Clone, Copy)]
pub struct PowerTable {
    t: [f64; MAX_CONTROL_POINTS],
    one_minus_t: [f64; MAX_CONTROL_POINTS],
    degree: usize,
}

impl PowerTable {
    pub fn new(t: f64, degree: usize) -> Self {
        debug_assert!(degree <= MAX_DEGREE, "degree {degree} exceeds {MAX_DEGREE}");
        let degree = degree.min(MAX_DEGREE);
        let mut table = Self {
            t: [0.0; MAX_CONTROL_POINTS],
            one_minus_t: [0.0; MAX_CONTROL_POINTS],
            degree,
        };
        let s = 1.0 - t;
        table.t[0] = 1.0;
        table.one_minus_t[0] = 1.0;
        for k in 1..=degree {
            table.t[k] = table.t[k - 1] * t;
            table.one_minus_t[k] = table.one_minus_t[k - 1] * s;
        }
        table
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Bernstein polynomial `B(i, n) = C(n, i) t^i (1 - t)^(n - i)`.
    ///
    /// `n` may be lower than the table degree, which is how rows of different
    /// lengths share one table.
    #[inline]
    pub fn basis(&self, i: usize, n: usize) -> f64 {
        debug_assert!(n <= self.degree && i <= n);
        binomial(n, i) * self.t[i] * self.one_minus_t[n - i]
    }

    /// `sum_i points[i] * B(i, len - 1)`, accumulated as a vector.
    ///
    /// An empty slice sums to the origin.
    pub fn weighted_sum(&self, points: &[Point3]) -> Point3 {
        let Some(n) = points.len().checked_sub(1) else {
            return DVec3::ZERO;
        };
        points
            .iter()
            .enumerate()
            .fold(DVec3::ZERO, |acc, (i, &p)| acc + p * self.basis(i, n))
    }
}

/// Evaluate a 1-D Bezier by repeated linear interpolation.
///
/// Works on a copy of `points`; pass `i` shrinks the live prefix by one.
pub fn casteljau(points: &[Point3], t: f64) -> Point3 {
    debug_assert!(!points.is_empty());
    let mut tmp = points.to_vec();
    let s = 1.0 - t;
    let n = tmp.len();
    for i in 1..n {
        for j in 0..n - i {
            tmp[j] = tmp[j] * s + tmp[j + 1] * t;
        }
    }
    tmp[0]
}

/// First derivative of a 1-D Bezier: `n * casteljau(forward differences)`.
pub fn hodograph(points: &[Point3], t: f64) -> Vector3 {
    let n = points.len().saturating_sub(1);
    if n == 0 {
        return DVec3::ZERO;
    }
    let deltas: Vec<Vector3> = points.windows(2).map(|w| w[1] - w[0]).collect();
    casteljau(&deltas, t) * n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pascal_rows() {
        assert_eq!(BINOMIALS[0][0], 1);
        assert_eq!(&BINOMIALS[5][..6], &[1, 5, 10, 10, 5, 1]);
        assert_eq!(BINOMIALS[13][3], 286);
        assert_eq!(BINOMIALS[15][7], 6435);
        assert_eq!(BINOMIALS[15][15], 1);
        assert_eq!(BINOMIALS[3][4], 0);
    }

    #[test]
    fn test_rows_sum_to_power_of_two() {
        for n in 0..=MAX_DEGREE {
            let sum: u64 = BINOMIALS[n].iter().sum();
            assert_eq!(sum, 1 << n, "row {n}");
        }
    }

    #[test]
    fn test_power_table_incremental() {
        let table = PowerTable::new(0.5, 4);
        assert_eq!(table.t[0], 1.0);
        assert_eq!(table.one_minus_t[0], 1.0);
        assert_eq!(table.t[3], 0.125);
        assert_eq!(table.one_minus_t[4], 0.0625);
    }

    #[test]
    fn test_cubic_basis_at_half() {
        let table = PowerTable::new(0.5, 3);
        assert_abs_diff_eq!(table.basis(0, 3), 0.125);
        assert_abs_diff_eq!(table.basis(1, 3), 0.375);
        assert_abs_diff_eq!(table.basis(2, 3), 0.375);
        assert_abs_diff_eq!(table.basis(3, 3), 0.125);
    }

    #[test]
    fn test_partition_of_unity() {
        for n in 0..=MAX_DEGREE {
            for k in 0..=10 {
                let t = k as f64 / 10.0;
                let table = PowerTable::new(t, n);
                let sum: f64 = (0..=n).map(|i| table.basis(i, n)).sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_weighted_sum() {
        let table = PowerTable::new(0.5, 2);
        let pts = [DVec3::ZERO, DVec3::new(1.0, 2.0, 0.0), DVec3::new(2.0, 0.0, 0.0)];
        assert_eq!(table.weighted_sum(&pts), DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(table.weighted_sum(&[]), DVec3::ZERO);
    }

    #[test]
    fn test_check_count() {
        assert!(check_count(1, "curve").is_ok());
        assert!(check_count(16, "curve").is_ok());
        assert!(matches!(
            check_count(0, "curve"),
            Err(BezError::EmptyControlPoints(_))
        ));
        assert_eq!(
            check_count(17, "curve"),
            Err(BezError::DegreeOverflow { count: 17, max: 16 })
        );
    }

    #[test]
    fn test_hodograph_of_line() {
        let pts = [DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)];
        let d = hodograph(&pts, 0.3);
        assert_abs_diff_eq!(d.x, 2.0);
        assert_eq!(hodograph(&pts[..1], 0.3), DVec3::ZERO);
    }
}
