//! Snapshot file storage.
//!
//! Each run owns one tab-separated text file named after its variant. The
//! file is truncated and recreated per run; the first row is a header
//! naming the step column `k` and each state component `x_1..x_n`.

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use dss_sim::{SimError, SimResult, SnapshotSink};
use nalgebra::DVector;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct SnapshotStore {
    root_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn snapshot_path(&self, variant_id: &str) -> PathBuf {
        self.root_dir.join(format!("Variant_{variant_id}.txt"))
    }

    fn manifest_path(&self, variant_id: &str) -> PathBuf {
        self.root_dir
            .join(format!("Variant_{variant_id}.manifest.json"))
    }

    /// Open a writer for a run, truncating any previous snapshot file and
    /// writing the header row for the given state dimension.
    pub fn create_writer(
        &self,
        variant_id: &str,
        state_dim: usize,
    ) -> ResultsResult<SnapshotWriter> {
        let path = self.snapshot_path(variant_id);
        let mut file = File::create(&path)?;
        file.write_all(header(state_dim).as_bytes())?;
        Ok(SnapshotWriter { file })
    }

    pub fn save_manifest(&self, manifest: &RunManifest) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(self.manifest_path(&manifest.variant), json)?;
        Ok(())
    }

    pub fn load_manifest(&self, variant_id: &str) -> ResultsResult<RunManifest> {
        let content = fs::read_to_string(self.manifest_path(variant_id))?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}

/// Appends snapshot rows to one run's file.
pub struct SnapshotWriter {
    file: File,
}

impl SnapshotWriter {
    pub fn write_snapshot(&mut self, step: usize, state: &DVector<f64>) -> ResultsResult<()> {
        self.file.write_all(row(step, state).as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> ResultsResult<()> {
        self.file.flush()?;
        Ok(())
    }
}

impl SnapshotSink for SnapshotWriter {
    fn record(&mut self, step: usize, state: &DVector<f64>) -> SimResult<()> {
        self.write_snapshot(step, state)
            .map_err(|e| SimError::Snapshot {
                what: e.to_string(),
            })
    }
}

fn header(state_dim: usize) -> String {
    let components: Vec<String> = (1..=state_dim).map(|i| format!("x_{i}")).collect();
    format!("k\t\t{}\n", components.join("\t\t\t"))
}

fn row(step: usize, state: &DVector<f64>) -> String {
    let entries: Vec<String> = state.iter().map(|v| v.to_string()).collect();
    format!("{step}\t{}\n", entries.join("\t"))
}
