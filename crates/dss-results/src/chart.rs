//! Chart-sample extraction for the output trajectory.

use nalgebra::DVector;

/// Target sample count for a renderer; sets the decimation stride.
pub const MAX_CHART_POINTS: usize = 1000;

/// Decimate an output trajectory to paired `(t, y)` samples with
/// `t = step * sample_period`, keeping every `len / MAX_CHART_POINTS`-th
/// step (stride floored at 1). The integer stride means trajectories just
/// past the target keep every point: a 1500-step run still yields 1500
/// samples, while a 10000-step run yields 1000.
///
/// Only 1-dimensional output vectors contribute a sample; higher
/// dimensional outputs are skipped rather than collapsed.
pub fn chart_samples(outputs: &[DVector<f64>], sample_period: f64) -> Vec<(f64, f64)> {
    let step = (outputs.len() / MAX_CHART_POINTS).max(1);
    let mut samples = Vec::with_capacity(MAX_CHART_POINTS.min(outputs.len()));
    for i in (0..outputs.len()).step_by(step) {
        let y = &outputs[i];
        if y.len() == 1 {
            samples.push((i as f64 * sample_period, y[0]));
        }
    }
    samples
}
