//! Truncated-series discretization engine.

use crate::error::{DiscretizeError, DiscretizeResult};
use crate::power::power_table;
use crate::{ORDER_MAX, ORDER_MIN, SAMPLE_PERIOD_MAX, SAMPLE_PERIOD_MIN};
use dss_core::factorial;
use nalgebra::DMatrix;

/// Lower summation bound of the `G` series.
///
/// Both conventions occur in this domain and are kept as separately named
/// policies; callers pick one explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GSeries {
    /// Sum from `i = 0`: the bare `B` contribution leads the series.
    #[default]
    WithZerothTerm,
    /// Sum from `i = 1`: the leading `B` contribution is omitted.
    SkipZerothTerm,
}

impl GSeries {
    fn lower_bound(self) -> usize {
        match self {
            GSeries::WithZerothTerm => 0,
            GSeries::SkipZerothTerm => 1,
        }
    }
}

/// Configuration for one discretization call.
#[derive(Clone, Copy, Debug)]
pub struct DiscretizationConfig {
    /// Sample period in seconds.
    pub sample_period: f64,
    /// Highest retained power-series term.
    pub order: usize,
    /// Lower bound convention for the `G` series.
    pub g_series: GSeries,
}

/// The discrete pair `{F, G}` of the recurrence `x(i+1) = F*x(i) + G*u(i)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscretePair {
    /// Discrete state-transition matrix (n x n).
    pub f: DMatrix<f64>,
    /// Discrete input matrix (n x m).
    pub g: DMatrix<f64>,
}

/// Convert the continuous matrices `A` (n x n) and `B` (n x m) into the
/// discrete pair `{F, G}` for the configured sample period.
///
/// `F = sum_{i=0..q} A^i T^i / i!`
///
/// `G = T * ( sum_{i=low..q-1} A^i T^i / (i+1)! ) * B`
///
/// Deterministic, finite-precision approximations; the truncation order is
/// the sole accuracy knob.
pub fn discretize(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    config: &DiscretizationConfig,
) -> DiscretizeResult<DiscretePair> {
    let q = config.order;
    if !(ORDER_MIN..=ORDER_MAX).contains(&q) {
        return Err(DiscretizeError::OrderOutOfRange {
            order: q,
            min: ORDER_MIN,
            max: ORDER_MAX,
        });
    }
    let t = config.sample_period;
    if !t.is_finite() || t < SAMPLE_PERIOD_MIN || t > SAMPLE_PERIOD_MAX {
        return Err(DiscretizeError::SamplePeriodOutOfRange {
            value: t,
            min: SAMPLE_PERIOD_MIN,
            max: SAMPLE_PERIOD_MAX,
        });
    }
    if b.nrows() != a.nrows() {
        return Err(DiscretizeError::InputRowMismatch {
            expected: a.nrows(),
            actual: b.nrows(),
        });
    }

    let table = power_table(a, q)?;
    let n = a.nrows();

    let mut f = DMatrix::zeros(n, n);
    for (i, power) in table.iter().enumerate() {
        f += power * (t.powi(i as i32) / factorial(i));
    }

    let mut acc = DMatrix::zeros(n, n);
    for i in config.g_series.lower_bound()..q {
        acc += &table[i] * (t.powi(i as i32) / factorial(i + 1));
    }
    let g = acc * t * b;

    Ok(DiscretePair { f, g })
}
