//! Helper functions for integration tests

#![allow(dead_code)]

use heat_rs::physics::ProblemParameters;
use heat_rs::solver::SolutionGrid;

/// Slab of the comparison runs: D = 93, L = 31, 38 °C inside, 149 °C faces, 0.5 h
pub fn reference_parameters() -> ProblemParameters {
    ProblemParameters::from_values(93.0, 31.0, 38.0, 149.0, 0.5).unwrap()
}

/// Unit slab at 0 °C with faces at 100 °C
pub fn small_slab(time_stop: f64) -> ProblemParameters {
    ProblemParameters::from_values(1.0, 1.0, 0.0, 100.0, time_stop).unwrap()
}

/// Assert the number of rows and of points per row
pub fn assert_shape(grid: &SolutionGrid, rows: usize, points: usize, message: &str) {
    assert_eq!(grid.len(), rows, "{}: row count", message);
    for (i, row) in grid.rows().iter().enumerate() {
        assert_eq!(row.len(), points, "{}: row {} length", message, i);
    }
}

/// Assert that both faces hold `surface` exactly in every row
pub fn assert_boundaries(grid: &SolutionGrid, surface: f64, message: &str) {
    for (i, row) in grid.rows().iter().enumerate() {
        assert_eq!(row[0], surface, "{}: left face of row {}", message, i);
        assert_eq!(row[row.len() - 1], surface, "{}: right face of row {}", message, i);
    }
}

/// Max-norm difference between the last rows of two grids
pub fn last_row_error(grid: &SolutionGrid, reference: &SolutionGrid) -> f64 {
    let a = grid.last_row().expect("grid has rows");
    let b = reference.last_row().expect("reference has rows");
    assert_eq!(a.len(), b.len(), "last rows differ in length");
    (a - b).amax()
}

/// `sqrt(Δx · Σ e²)` over row `time_index`, comparable across grid sizes
pub fn row_error_scaled(grid: &SolutionGrid, reference: &SolutionGrid, time_index: usize) -> f64 {
    let a = grid.row(time_index).expect("row exists");
    let b = reference.row(time_index).expect("reference row exists");
    (grid.delta_x() * (a - b).norm_squared()).sqrt()
}
