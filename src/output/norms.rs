//! Error measures between a numerical grid and the analytical reference
//!
//! Both grids must come from solves on the same `(Δx, Δt)` pair and horizon.
//! The error is taken as `analytical - numerical`.

use nalgebra::DMatrix;

use crate::output::ReportError;
use crate::solver::SolutionGrid;

/// Elementwise `analytical - numerical`, one matrix row per time row
///
/// # Errors
///
/// - [`ReportError::EmptyGrid`] if either grid has no row
/// - [`ReportError::ShapeMismatch`] if the grids differ in rows or points
pub fn error_grid(
    analytical: &SolutionGrid,
    numerical: &SolutionGrid,
) -> Result<DMatrix<f64>, ReportError> {
    if analytical.is_empty() || numerical.is_empty() {
        return Err(ReportError::EmptyGrid);
    }

    let expected = (analytical.len(), analytical.points());
    let found = (numerical.len(), numerical.points());
    if expected != found {
        return Err(ReportError::ShapeMismatch { expected, found });
    }

    Ok(analytical.to_matrix() - numerical.to_matrix())
}

/// Largest absolute entry (0 for an empty matrix)
pub fn uniform_norm(errors: &DMatrix<f64>) -> f64 {
    uniform_norm_of(errors.iter())
}

/// Square root of the sum of squares (0 for an empty matrix)
pub fn two_norm(errors: &DMatrix<f64>) -> f64 {
    two_norm_of(errors.iter())
}

/// Uniform norm of time row `row`
pub fn uniform_norm_row(errors: &DMatrix<f64>, row: usize) -> f64 {
    uniform_norm_of(errors.row(row).iter())
}

/// Two norm of time row `row`
pub fn two_norm_row(errors: &DMatrix<f64>, row: usize) -> f64 {
    two_norm_of(errors.row(row).iter())
}

fn uniform_norm_of<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.fold(0.0, |norm, e| norm.max(e.abs()))
}

fn two_norm_of<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.map(|e| e * e).sum::<f64>().sqrt()
}

/// Whole-grid error summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorNorms {
    pub uniform: f64,
    pub two: f64,
}

impl ErrorNorms {
    pub fn of(errors: &DMatrix<f64>) -> Self {
        Self {
            uniform: uniform_norm(errors),
            two: two_norm(errors),
        }
    }

    /// Norms of `analytical - numerical`
    pub fn between(analytical: &SolutionGrid, numerical: &SolutionGrid) -> Result<Self, ReportError> {
        error_grid(analytical, numerical).map(|errors| Self::of(&errors))
    }
}
