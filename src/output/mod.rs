//! Output module for solution grids
//!
//! Everything here consumes [`SolutionGrid`](crate::solver::SolutionGrid)s
//! produced by the solvers and never feeds back into them:
//! - **Norms**: error of a numerical grid against the analytical one
//! - **Export**: CSV reports for spreadsheets and external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file (ReportError)
//! ├── norms.rs            ← error grid, uniform and two norms
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::physics::ProblemParameters;
//! use heat_rs::solver::{HeatSolver, Solver};
//! use heat_rs::output::{ErrorNorms, export::{write_report, CsvConfig}};
//!
//! let parameters = ProblemParameters::from_values(1.0, 1.0, 0.0, 100.0, 0.1)?;
//! let analytical = HeatSolver::exact().solve_with(&parameters, 0.25, 0.05)?;
//! let numerical = HeatSolver::laasonen().solve_with(&parameters, 0.25, 0.05)?;
//!
//! let norms = ErrorNorms::between(&analytical, &numerical)?;
//! assert!(norms.uniform >= 0.0);
//!
//! let mut report = Vec::new();
//! write_report(&mut report, &numerical, &analytical, &CsvConfig::default())?;
//! assert!(String::from_utf8(report)?.starts_with("deltaX:,0.25,deltaT:,0.05"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod export;
pub mod norms;

use thiserror::Error;

pub use export::{
    CsvConfig, CsvMetadata, export_report, write_first_step_section, write_report, write_step_header,
};
pub use norms::{ErrorNorms, error_grid, two_norm, two_norm_row, uniform_norm, uniform_norm_row};

/// Errors raised while measuring or exporting grids
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot report on an empty solution grid")]
    EmptyGrid,

    /// Shapes are `(rows, points)`
    #[error("grid shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
