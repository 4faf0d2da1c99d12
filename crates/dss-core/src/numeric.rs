//! Numeric helpers shared by the discretization and simulation crates.

/// Floating point type used throughout the laboratory.
pub type Real = f64;

/// Absolute/relative tolerance pair for comparing series results against
/// closed-form references.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Tolerances for truncated-series results at the accepted sample
    /// periods: the first dropped term at q = 2, T = 0.1 is below 1e-4,
    /// and shrinks rapidly with q.
    pub const fn series() -> Self {
        Self {
            abs: 1e-10,
            rel: 1e-10,
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::series()
    }
}

/// Compare two reals under an absolute-or-relative tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Exact factorial in floating point.
///
/// Accurate for the small orders used by the truncated series (n <= 18 is
/// exactly representable in f64).
pub fn factorial(n: usize) -> Real {
    (1..=n).fold(1.0, |acc, i| acc * i as Real)
}
