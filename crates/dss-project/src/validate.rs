//! Run definition validation logic.

use crate::schema::{RunFile, SystemDef};
use dss_discretize::{ORDER_MAX, ORDER_MIN, SAMPLE_PERIOD_MAX, SAMPLE_PERIOD_MIN};
use nalgebra::DMatrix;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Matrix {name} is supposed to have {rows} rows and {cols} columns")]
    MatrixShape {
        name: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("Non-finite entry in matrix {name} at ({row}, {col})")]
    NonFiniteEntry {
        name: &'static str,
        row: usize,
        col: usize,
    },
}

/// Validated, typed run definition consumed by the core.
#[derive(Debug, Clone)]
pub struct RunDefinition {
    /// Continuous state matrix (n x n).
    pub a: DMatrix<f64>,
    /// Continuous input matrix (n x m).
    pub b: DMatrix<f64>,
    /// Output matrix (l x n).
    pub c: DMatrix<f64>,
    /// Sample period in seconds, within the accepted range.
    pub sample_period: f64,
    /// Truncation order, within the accepted range.
    pub order: usize,
    /// Horizon scalar, strictly positive.
    pub horizon: f64,
    /// Raw variant identifier, parsed by the run layer.
    pub variant: String,
}

pub fn validate_run(run_file: &RunFile) -> Result<RunDefinition, ValidationError> {
    let system = &run_file.system;
    let params = &run_file.parameters;

    if system.n < 1 {
        return Err(invalid("n", system.n.to_string(), "must be at least 1"));
    }
    if system.m < 1 || system.m > system.n {
        return Err(invalid(
            "m",
            system.m.to_string(),
            "must be at least 1 and at most n",
        ));
    }
    if system.l < 1 || system.l > system.n {
        return Err(invalid(
            "l",
            system.l.to_string(),
            "must be at least 1 and at most n",
        ));
    }

    let a = matrix_from_rows("A", &system.a, system.n, system.n)?;
    let b = matrix_from_rows("B", &system.b, system.n, system.m)?;
    let c = matrix_from_rows("C", &system.c, system.l, system.n)?;

    let t = params.sample_period;
    if !t.is_finite() || t < SAMPLE_PERIOD_MIN || t > SAMPLE_PERIOD_MAX {
        return Err(invalid(
            "sample_period",
            t.to_string(),
            format!("must be in [{SAMPLE_PERIOD_MIN}, {SAMPLE_PERIOD_MAX}]"),
        ));
    }
    if params.order < ORDER_MIN as i64 || params.order > ORDER_MAX as i64 {
        return Err(invalid(
            "order",
            params.order.to_string(),
            format!("must be in [{ORDER_MIN}, {ORDER_MAX}]"),
        ));
    }
    if !params.horizon.is_finite() || params.horizon <= 0.0 {
        return Err(invalid(
            "horizon",
            params.horizon.to_string(),
            "must be strictly positive",
        ));
    }

    Ok(RunDefinition {
        a,
        b,
        c,
        sample_period: t,
        order: params.order as usize,
        horizon: params.horizon,
        variant: run_file.variant.clone(),
    })
}

fn invalid(field: &str, value: String, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value,
        reason: reason.into(),
    }
}

fn matrix_from_rows(
    name: &'static str,
    rows: &[Vec<f64>],
    expected_rows: usize,
    expected_cols: usize,
) -> Result<DMatrix<f64>, ValidationError> {
    let shape_err = ValidationError::MatrixShape {
        name,
        rows: expected_rows,
        cols: expected_cols,
    };
    if rows.len() != expected_rows {
        return Err(shape_err);
    }
    if rows.iter().any(|row| row.len() != expected_cols) {
        return Err(shape_err);
    }
    for (i, row) in rows.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteEntry {
                    name,
                    row: i,
                    col: j,
                });
            }
        }
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(DMatrix::from_row_slice(expected_rows, expected_cols, &flat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ParametersDef, RunFile, SystemDef};

    fn oscillator() -> RunFile {
        RunFile {
            system: SystemDef {
                n: 2,
                m: 1,
                l: 1,
                a: vec![vec![0.0, 1.0], vec![-1.0, 0.0]],
                b: vec![vec![0.0], vec![1.0]],
                c: vec![vec![1.0, 0.0]],
            },
            parameters: ParametersDef {
                sample_period: 0.01,
                order: 4,
                horizon: 1.0,
            },
            variant: "1".to_string(),
        }
    }

    #[test]
    fn valid_run_file_passes() {
        let def = validate_run(&oscillator()).unwrap();
        assert_eq!(def.a.shape(), (2, 2));
        assert_eq!(def.b.shape(), (2, 1));
        assert_eq!(def.c.shape(), (1, 2));
        assert_eq!(def.order, 4);
        assert_eq!(def.variant, "1");
    }

    #[test]
    fn row_major_layout_is_preserved() {
        let def = validate_run(&oscillator()).unwrap();
        assert_eq!(def.a[(0, 1)], 1.0);
        assert_eq!(def.a[(1, 0)], -1.0);
    }

    #[test]
    fn m_larger_than_n_is_rejected() {
        let mut run_file = oscillator();
        run_file.system.m = 3;
        let err = validate_run(&run_file).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains('m') && msg.contains("at most n"), "{msg}");
    }

    #[test]
    fn wrong_matrix_shape_names_the_matrix() {
        let mut run_file = oscillator();
        run_file.system.b = vec![vec![0.0, 1.0]];
        let err = validate_run(&run_file).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "Matrix B is supposed to have 2 rows and 1 columns"
        );
    }

    #[test]
    fn non_finite_entry_is_rejected() {
        let mut run_file = oscillator();
        run_file.system.a[1][0] = f64::NAN;
        let err = validate_run(&run_file).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonFiniteEntry {
                name: "A",
                row: 1,
                col: 0
            }
        ));
    }

    #[test]
    fn sample_period_bounds_are_enforced() {
        for t in [0.0005, 0.11, f64::INFINITY] {
            let mut run_file = oscillator();
            run_file.parameters.sample_period = t;
            let err = validate_run(&run_file).unwrap_err();
            assert!(format!("{err}").contains("sample_period"));
        }
    }

    #[test]
    fn order_bounds_are_enforced() {
        for q in [-1, 0, 1, 11] {
            let mut run_file = oscillator();
            run_file.parameters.order = q;
            let err = validate_run(&run_file).unwrap_err();
            assert!(format!("{err}").contains("order"));
        }
    }

    #[test]
    fn unknown_variant_survives_validation() {
        let mut run_file = oscillator();
        run_file.variant = "9".to_string();
        let def = validate_run(&run_file).unwrap();
        assert_eq!(def.variant, "9");
    }
}
