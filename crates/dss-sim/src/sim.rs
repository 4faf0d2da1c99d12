//! Recurrence runner and snapshot emission.

use crate::error::{SimError, SimResult};
use crate::policy::InputPolicy;
use dss_discretize::DiscretePair;
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Snapshot cadence in steps.
pub const SNAPSHOT_EVERY: usize = 100;

/// Receiver for periodic `(step, state)` snapshots.
///
/// The seam to the persistence collaborator; a failing sink aborts the run.
pub trait SnapshotSink {
    fn record(&mut self, step: usize, state: &DVector<f64>) -> SimResult<()>;
}

/// Sink that discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _step: usize, _state: &DVector<f64>) -> SimResult<()> {
        Ok(())
    }
}

/// Record of a simulation run.
#[derive(Clone, Debug)]
pub struct SimRecord {
    /// Output vectors `y(0..count-1)`, one per step.
    pub outputs: Vec<DVector<f64>>,
}

/// Iterate the discrete recurrence for `iteration_count` steps.
///
/// The state starts at zero. Each step measures first and actuates after:
/// `y(i) = C*x` is recorded (and `(i, x)` emitted every 100th step) before
/// `x` advances to `F*x + G*u(i)`, so the output at step `i` reflects the
/// state prior to that step's input.
pub fn run_recurrence(
    pair: &DiscretePair,
    c: &DMatrix<f64>,
    policy: &InputPolicy,
    iteration_count: i64,
    sink: &mut dyn SnapshotSink,
) -> SimResult<SimRecord> {
    if iteration_count < 0 {
        return Err(SimError::NegativeIterationCount {
            count: iteration_count,
        });
    }
    let n = pair.f.nrows();
    if !pair.f.is_square() {
        return Err(SimError::ShapeMismatch {
            what: format!("F must be square, got {}x{}", n, pair.f.ncols()),
        });
    }
    if pair.g.nrows() != n {
        return Err(SimError::ShapeMismatch {
            what: format!("G has {} rows but F has {}", pair.g.nrows(), n),
        });
    }
    if c.ncols() != n {
        return Err(SimError::ShapeMismatch {
            what: format!("C has {} columns but the state dimension is {}", c.ncols(), n),
        });
    }
    if pair.g.ncols() != 1 {
        return Err(SimError::ShapeMismatch {
            what: format!(
                "G has {} columns but the input policy produces 1-dimensional inputs",
                pair.g.ncols()
            ),
        });
    }

    let count = iteration_count as usize;
    let mut x = DVector::zeros(n);
    let mut outputs = Vec::with_capacity(count);

    for i in 0..count {
        outputs.push(c * &x);
        if i % SNAPSHOT_EVERY == 0 {
            sink.record(i, &x)?;
        }
        let u = policy.input(i);
        x = &pair.f * &x + &pair.g * &u;
    }

    debug!(steps = count, outputs = outputs.len(), "recurrence finished");
    Ok(SimRecord { outputs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Variant;

    fn pair(f: DMatrix<f64>, g: DMatrix<f64>) -> DiscretePair {
        DiscretePair { f, g }
    }

    fn constant_policy() -> InputPolicy {
        InputPolicy::new(Variant::Constant, 1.0, 0.01)
    }

    /// Collects snapshots in memory.
    #[derive(Default)]
    struct RecordingSink {
        snapshots: Vec<(usize, DVector<f64>)>,
    }

    impl SnapshotSink for RecordingSink {
        fn record(&mut self, step: usize, state: &DVector<f64>) -> SimResult<()> {
            self.snapshots.push((step, state.clone()));
            Ok(())
        }
    }

    #[test]
    fn frozen_state_gives_constant_zero_output() {
        // F = I, G = 0: the state never leaves zero, so y is C*0 forever.
        let p = pair(DMatrix::identity(2, 2), DMatrix::zeros(2, 1));
        let c = DMatrix::from_row_slice(1, 2, &[3.0, -4.0]);
        let record =
            run_recurrence(&p, &c, &constant_policy(), 250, &mut NullSink).unwrap();
        assert_eq!(record.outputs.len(), 250);
        for y in &record.outputs {
            assert_eq!(y, &DVector::zeros(1));
        }
    }

    #[test]
    fn output_lags_input_by_one_step() {
        // F = 0, G = [1]: x(i+1) = u(i), so y(i) = x(i) = u(i-1).
        let p = pair(DMatrix::zeros(1, 1), DMatrix::from_element(1, 1, 1.0));
        let c = DMatrix::from_element(1, 1, 1.0);
        let policy = constant_policy();
        let record = run_recurrence(&p, &c, &policy, 4, &mut NullSink).unwrap();
        assert_eq!(record.outputs[0][0], 0.0);
        for y in &record.outputs[1..] {
            assert_eq!(y[0], 1.0);
        }
    }

    #[test]
    fn snapshots_follow_the_cadence() {
        let p = pair(DMatrix::identity(1, 1), DMatrix::zeros(1, 1));
        let c = DMatrix::from_element(1, 1, 1.0);
        let mut sink = RecordingSink::default();
        run_recurrence(&p, &c, &constant_policy(), 301, &mut sink).unwrap();
        let steps: Vec<usize> = sink.snapshots.iter().map(|(s, _)| *s).collect();
        assert_eq!(steps, vec![0, 100, 200, 300]);
    }

    #[test]
    fn zero_iterations_gives_empty_record() {
        let p = pair(DMatrix::identity(1, 1), DMatrix::zeros(1, 1));
        let c = DMatrix::from_element(1, 1, 1.0);
        let mut sink = RecordingSink::default();
        let record = run_recurrence(&p, &c, &constant_policy(), 0, &mut sink).unwrap();
        assert!(record.outputs.is_empty());
        assert!(sink.snapshots.is_empty());
    }

    #[test]
    fn negative_iteration_count_is_fatal() {
        let p = pair(DMatrix::identity(1, 1), DMatrix::zeros(1, 1));
        let c = DMatrix::from_element(1, 1, 1.0);
        let err = run_recurrence(&p, &c, &constant_policy(), -1, &mut NullSink).unwrap_err();
        assert!(matches!(err, SimError::NegativeIterationCount { count: -1 }));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let c = DMatrix::from_row_slice(1, 2, &[1.0, 0.0]);
        // G rows disagree with F
        let p = pair(DMatrix::identity(2, 2), DMatrix::zeros(3, 1));
        let err = run_recurrence(&p, &c, &constant_policy(), 10, &mut NullSink).unwrap_err();
        assert!(matches!(err, SimError::ShapeMismatch { .. }));

        // C columns disagree with the state dimension
        let p = pair(DMatrix::identity(3, 3), DMatrix::zeros(3, 1));
        let err = run_recurrence(&p, &c, &constant_policy(), 10, &mut NullSink).unwrap_err();
        assert!(matches!(err, SimError::ShapeMismatch { .. }));
    }

    #[test]
    fn sink_failure_aborts_the_run() {
        struct FailingSink;
        impl SnapshotSink for FailingSink {
            fn record(&mut self, _step: usize, _state: &DVector<f64>) -> SimResult<()> {
                Err(SimError::Snapshot {
                    what: "disk full".to_string(),
                })
            }
        }
        let p = pair(DMatrix::identity(1, 1), DMatrix::zeros(1, 1));
        let c = DMatrix::from_element(1, 1, 1.0);
        let err = run_recurrence(&p, &c, &constant_policy(), 10, &mut FailingSink).unwrap_err();
        assert!(matches!(err, SimError::Snapshot { .. }));
    }
}
