//! dss-sim: discrete state-space recurrence simulation.
//!
//! Drives `x(i+1) = F*x(i) + G*u(i)`, `y(i) = C*x(i)` for a configured
//! number of steps under a variant-selected input signal, emitting the
//! output trajectory and periodic state snapshots.

pub mod error;
pub mod policy;
pub mod sim;

pub use error::{SimError, SimResult};
pub use policy::{iteration_count, InputPolicy, Variant};
pub use sim::{run_recurrence, NullSink, SimRecord, SnapshotSink, SNAPSHOT_EVERY};
