//! Run execution service.
//!
//! Wires the validated run definition through discretization, the
//! recurrence simulator and the snapshot store.

use crate::error::AppResult;
use dss_discretize::{discretize, DiscretePair, DiscretizationConfig, GSeries};
use dss_project::RunDefinition;
use dss_results::{chart_samples, RunManifest, SnapshotStore};
use dss_sim::{iteration_count, run_recurrence, InputPolicy, SimError, Variant};
use nalgebra::DVector;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of asking for a simulation run.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// The variant identifier was outside the supported set. Reported to
    /// the caller; the trajectory stays empty.
    UnknownVariant { id: String },
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Output vectors `y(0..count-1)`.
    pub outputs: Vec<DVector<f64>>,
    /// Decimated `(t, y)` pairs for rendering.
    pub chart: Vec<(f64, f64)>,
    pub iteration_count: usize,
    pub snapshot_path: PathBuf,
}

/// Compute the discrete pair `{F, G}` for a definition.
///
/// The standalone matrix command keeps the series convention that skips
/// the zeroth `G` term; the run pipeline includes it.
pub fn compute_matrices(definition: &RunDefinition, g_series: GSeries) -> AppResult<DiscretePair> {
    let config = DiscretizationConfig {
        sample_period: definition.sample_period,
        order: definition.order,
        g_series,
    };
    let pair = discretize(&definition.a, &definition.b, &config)?;
    Ok(pair)
}

/// Execute the full pipeline for the definition's variant, writing
/// snapshots and a manifest under `out_dir`.
pub fn run_variant(definition: &RunDefinition, out_dir: &Path) -> AppResult<RunOutcome> {
    let variant = match Variant::parse(&definition.variant) {
        Ok(variant) => variant,
        Err(SimError::UnknownVariant { id }) => {
            warn!(variant = %id, "unknown variant requested");
            return Ok(RunOutcome::UnknownVariant { id });
        }
        Err(e) => return Err(e.into()),
    };

    let pair = compute_matrices(definition, GSeries::WithZerothTerm)?;
    let count = iteration_count(variant, definition.horizon, definition.sample_period)?;
    let policy = InputPolicy::new(variant, definition.horizon, definition.sample_period);

    let store = SnapshotStore::new(out_dir.to_path_buf())?;
    let mut writer = store.create_writer(variant.id(), pair.f.nrows())?;
    let record = run_recurrence(&pair, &definition.c, &policy, count as i64, &mut writer)?;
    writer.flush()?;

    store.save_manifest(&RunManifest {
        variant: variant.id().to_string(),
        sample_period: definition.sample_period,
        order: definition.order,
        horizon: definition.horizon,
        iteration_count: count,
    })?;

    let chart = chart_samples(&record.outputs, definition.sample_period);
    info!(
        variant = variant.id(),
        steps = count,
        chart_points = chart.len(),
        "run finished"
    );

    Ok(RunOutcome::Completed(RunSummary {
        outputs: record.outputs,
        chart,
        iteration_count: count,
        snapshot_path: store.snapshot_path(variant.id()),
    }))
}
