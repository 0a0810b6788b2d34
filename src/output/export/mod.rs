//! Export module for solution grids.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! The CSV report layout is the one spreadsheet users of the comparison runs
//! already rely on: step sizes, error norms, the numerical table, then the
//! error table with per-row norms.
//!
//! # Usage example
//!
//! ```rust,no_run
//! use heat_rs::output::export::{export_report, CsvConfig, CsvMetadata};
//! # use heat_rs::solver::SolutionGrid;
//! # fn run(numerical: &SolutionGrid, analytical: &SolutionGrid) -> Result<(), heat_rs::output::ReportError> {
//!
//! // Plain report, same layout as the comparison runs
//! export_report("Laasonen.csv", numerical, analytical, &CsvConfig::default())?;
//!
//! // With a commented metadata header
//! let config = CsvConfig::default().with_metadata(CsvMetadata::for_scheme("Laasonen"));
//! export_report("Laasonen_meta.csv", numerical, analytical, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod csv;

pub use csv::{
    CsvConfig, CsvMetadata, export_report, write_first_step_section, write_report, write_step_header,
};
