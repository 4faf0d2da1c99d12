//! Input-signal variants and iteration-count derivation.

use crate::error::{SimError, SimResult};
use nalgebra::DVector;

/// Simulation variant: a closed set of input-signal policies paired with an
/// iteration-count coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// `u(i) = [1]` for every step; coefficient 2.
    Constant,
    /// `u(i)` flips between `[1]` and `[-1]` every `period` steps;
    /// coefficient 2.
    Alternating,
    /// Same alternating signal over a 3x horizon.
    AlternatingExtended,
}

impl Variant {
    /// Parse a variant identifier ("1", "2" or "3").
    pub fn parse(id: &str) -> SimResult<Self> {
        match id {
            "1" => Ok(Variant::Constant),
            "2" => Ok(Variant::Alternating),
            "3" => Ok(Variant::AlternatingExtended),
            _ => Err(SimError::UnknownVariant { id: id.to_string() }),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Variant::Constant => "1",
            Variant::Alternating => "2",
            Variant::AlternatingExtended => "3",
        }
    }

    /// Multiplier applied to the base horizon to get the step count.
    pub fn iteration_coefficient(&self) -> i64 {
        match self {
            Variant::Constant | Variant::Alternating => 2,
            Variant::AlternatingExtended => 3,
        }
    }
}

/// Base horizon in steps: `max(1, trunc(k / T))`.
fn base_horizon(k: f64, sample_period: f64) -> i64 {
    ((k / sample_period) as i64).max(1)
}

/// Derive the total step count for a variant from the horizon scalar `k`
/// and the sample period.
///
/// A negative result signals an internal consistency failure and is never
/// clamped.
pub fn iteration_count(variant: Variant, k: f64, sample_period: f64) -> SimResult<usize> {
    let count = variant.iteration_coefficient() * base_horizon(k, sample_period);
    if count < 0 {
        return Err(SimError::NegativeIterationCount { count });
    }
    Ok(count as usize)
}

/// Pure input-signal policy: step index to input vector.
#[derive(Clone, Debug)]
pub struct InputPolicy {
    variant: Variant,
    period: usize,
}

impl InputPolicy {
    /// Build the policy for a variant. The alternation period is the base
    /// horizon (coefficient 1) derived from the same `k` and `T`, floored
    /// at one step.
    pub fn new(variant: Variant, k: f64, sample_period: f64) -> Self {
        Self {
            variant,
            period: base_horizon(k, sample_period) as usize,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The input vector `u(i)` for a step index.
    pub fn input(&self, step: usize) -> DVector<f64> {
        match self.variant {
            Variant::Constant => DVector::from_element(1, 1.0),
            Variant::Alternating | Variant::AlternatingExtended => {
                if (step / self.period) % 2 == 0 {
                    DVector::from_element(1, 1.0)
                } else {
                    DVector::from_element(1, -1.0)
                }
            }
        }
    }
}
