//! CSV export of a numerical grid and its error against the analytical one
//!
//! # Report layout
//!
//! ```csv
//! deltaX:,0.05,deltaT:,0.01
//!
//! Errors measurements :
//! Uniform norm :,0.8135027291621318
//! Two norm :,3.419852817125113
//!
//! Numerical solution :
//! t\x,0,0.05,0.1,...
//! 0,149,38,38,...
//! 0.01,149,59.80,...
//!
//! Errors (analytical - numerical ):
//! t\x,0,0.05,0.1,...,,uniform_norm(t),two_norm(t)
//! 0,0,0,0,...,,0,0
//! ...
//! ```
//!
//! [`write_first_step_section`] appends the same blocks headed by
//! ` First Step Solver :,<name>` instead of the step sizes, so several
//! bootstrap variants can share one file.
//!
//! Numbers are written with `precision` significant digits (16 by default)
//! and trailing zeros removed, so `3·0.05` prints as `0.15`.
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let config = CsvConfig::default().with_metadata(CsvMetadata::for_scheme("Richardson"));
//! ```
//!
//! ```csv
//! # Heat Conduction Simulation Data
//! # Generated: 2026-10-19T15:30:00+00:00
//! # Scheme: Richardson
//! #
//! deltaX:,0.05,deltaT:,0.01
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::DMatrix;

use crate::output::ReportError;
use crate::output::norms::{error_grid, two_norm, two_norm_row, uniform_norm, uniform_norm_row};
use crate::physics::ProblemParameters;
use crate::solver::SolutionGrid;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use heat_rs::output::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').precision(10);
/// assert_eq!(config.delimiter, ';');
/// assert!(!config.include_metadata);
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Significant digits for floating-point values (default: 16)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 16,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only the fields that are set end up in the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Scheme name (e.g. "Crank-Nicolson")
    pub scheme_name: Option<String>,

    /// First-step label of a three-level scheme (e.g. "Laasonen with RE")
    pub first_step: Option<String>,

    /// Problem constants
    pub parameters: Option<ProblemParameters>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    pub fn for_scheme(name: &str) -> Self {
        Self {
            scheme_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Builder pattern: record the problem constants
    pub fn with_parameters(mut self, parameters: &ProblemParameters) -> Self {
        self.parameters = Some(*parameters);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(writer: &mut W, metadata: &CsvMetadata) -> Result<(), ReportError> {
    writeln!(writer, "# Heat Conduction Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(scheme) = &metadata.scheme_name {
        writeln!(writer, "# Scheme: {scheme}")?;
    }
    if let Some(first_step) = &metadata.first_step {
        writeln!(writer, "# First Step: {first_step}")?;
    }

    if let Some(parameters) = &metadata.parameters {
        let fields = [
            ("Diffusivity", parameters.diffusivity()),
            ("Width", parameters.width()),
            ("Internal Temperature", parameters.internal_temperature()),
            ("Surface Temperature", parameters.surface_temperature()),
            ("Time Stop", parameters.time_stop()),
        ];
        // Unset fields are skipped
        for (label, value) in fields {
            if let Ok(value) = value {
                writeln!(writer, "# {label}: {value}")?;
            }
        }
    }

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {key}: {value}")?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

/// Format `value` with `precision` significant digits, trailing zeros removed
///
/// Very small or very large magnitudes switch to exponent notation.
fn format_number(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = precision.max(1);
    let exponent = value.abs().log10().floor() as i32;

    if exponent < -5 || exponent >= precision as i32 {
        let formatted = format!("{:.*e}", precision - 1, value);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_zeros(mantissa)),
            None => formatted,
        }
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Norm block, numerical table and error table shared by both report kinds
fn write_tables<W: Write>(
    writer: &mut W,
    numerical: &SolutionGrid,
    errors: &DMatrix<f64>,
    config: &CsvConfig,
) -> Result<(), ReportError> {
    let d = config.delimiter;
    let number = |value: f64| format_number(value, config.precision);

    // ============================= Norms ==================================

    writeln!(writer, "Errors measurements : ")?;
    writeln!(writer, "Uniform norm :{d}{}", number(uniform_norm(errors)))?;
    writeln!(writer, "Two norm :{d}{}", number(two_norm(errors)))?;
    writeln!(writer)?;

    // ============================= Position header ========================

    let header: String = numerical
        .positions()
        .into_iter()
        .map(|x| format!("{d}{}", number(x)))
        .collect();

    // ============================= Numerical solution =====================

    writeln!(writer, "Numerical solution : ")?;
    writeln!(writer, "t\\x{header}")?;
    for (i, row) in numerical.rows().iter().enumerate() {
        write!(writer, "{}", number(numerical.time_at(i)))?;
        for value in row.iter() {
            write!(writer, "{d}{}", number(*value))?;
        }
        writeln!(writer)?;
    }

    // ============================= Errors =================================

    writeln!(writer)?;
    writeln!(writer, "Errors (analytical - numerical ): ")?;
    writeln!(writer, "t\\x{header}{d}{d}uniform_norm(t){d}two_norm(t)")?;
    for i in 0..errors.nrows() {
        write!(writer, "{}", number(numerical.time_at(i)))?;
        for value in errors.row(i).iter() {
            write!(writer, "{d}{}", number(*value))?;
        }
        writeln!(
            writer,
            "{d}{d}{}{d}{}",
            number(uniform_norm_row(errors, i)),
            number(two_norm_row(errors, i))
        )?;
    }

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write a full report of `numerical` against `analytical`
///
/// # Errors
///
/// - [`ReportError::EmptyGrid`] / [`ReportError::ShapeMismatch`] if the
///   grids cannot be compared
/// - [`ReportError::Io`] on write failure
pub fn write_report<W: Write>(
    writer: &mut W,
    numerical: &SolutionGrid,
    analytical: &SolutionGrid,
    config: &CsvConfig,
) -> Result<(), ReportError> {
    // ============================= Validation =============================

    let errors = error_grid(analytical, numerical)?;

    // ============================= Write Metadata =========================

    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(writer, metadata)?;
    }

    // ============================= Write Data =============================

    write_step_header(writer, numerical.delta_x(), numerical.delta_t(), config)?;
    write_tables(writer, numerical, &errors, config)
}

/// `deltaX:,<dx>,deltaT:,<dt>` followed by a blank line
///
/// Opens both full reports and first-step files.
pub fn write_step_header<W: Write>(
    writer: &mut W,
    delta_x: f64,
    delta_t: f64,
    config: &CsvConfig,
) -> Result<(), ReportError> {
    let d = config.delimiter;
    writeln!(
        writer,
        "deltaX:{d}{}{d}deltaT:{d}{}",
        format_number(delta_x, config.precision),
        format_number(delta_t, config.precision)
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Append a section for one first-step variant of a three-level scheme
///
/// Metadata is never written here: sections are meant to follow a header
/// written once per file.
pub fn write_first_step_section<W: Write>(
    writer: &mut W,
    numerical: &SolutionGrid,
    analytical: &SolutionGrid,
    first_step_name: &str,
    config: &CsvConfig,
) -> Result<(), ReportError> {
    let errors = error_grid(analytical, numerical)?;

    writeln!(writer)?;
    writeln!(writer, " First Step Solver :{}{first_step_name}", config.delimiter)?;

    write_tables(writer, numerical, &errors, config)
}

/// Create (or truncate) `path` and write a full report into it
pub fn export_report<P: AsRef<Path>>(
    path: P,
    numerical: &SolutionGrid,
    analytical: &SolutionGrid,
    config: &CsvConfig,
) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, numerical, analytical, config)?;
    writer.flush()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
