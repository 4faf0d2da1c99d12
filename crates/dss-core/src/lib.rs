//! dss-core: numeric foundation for the discrete state-space laboratory.

pub mod numeric;

pub use numeric::*;
