//! Space-time grid produced by every solver
//!
//! A [`SolutionGrid`] is an ordered sequence of time rows. Row `i` holds the
//! temperatures at `t = i·Δt`, column `j` the temperature at `x = j·Δx`.
//! Every row has the same length, `floor(width / Δx) + 1`.
//!
//! [`Discretization`] gathers everything a marching engine reads before the
//! first row is produced: validated grid steps and the problem constants.

use nalgebra::{DMatrix, DVector};

use crate::error::{HeatError, HeatResult};
use crate::physics::ProblemParameters;
use crate::solver::boundary::SlabBoundaries;

// =================================================================================================
// Derived sizes
// =================================================================================================

/// Number of space points of a row: `floor(width / delta_x) + 1`
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::space_points;
///
/// assert_eq!(space_points(31.0, 0.05), 621);
/// assert_eq!(space_points(1.0, 0.25), 5);
/// ```
pub fn space_points(width: f64, delta_x: f64) -> usize {
    (width / delta_x) as usize + 1
}

/// Number of rows a two-level march produces over `[0, time_stop]`
///
/// Counts `t = 0` plus every index `i ≥ 1` with `i·delta_t ≤ time_stop`,
/// using the exact comparison the engines use.
pub fn time_rows(time_stop: f64, delta_t: f64) -> usize {
    let mut rows = 1;
    while (rows as f64) * delta_t <= time_stop {
        rows += 1;
    }
    rows
}

// =================================================================================================
// Discretization
// =================================================================================================

/// Validated inputs of one solve call
///
/// Built once at the start of `solve`; reading every field here means an
/// uninitialised parameter fails the call before any row exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discretization {
    pub diffusivity: f64,
    pub width: f64,
    pub time_stop: f64,
    pub delta_x: f64,
    pub delta_t: f64,
    /// Space points per row
    pub points: usize,
    pub boundaries: SlabBoundaries,
}

impl Discretization {
    /// Check the parameter gate and the grid steps, then read every constant
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` (field `parameters`) if `check_initialization()` is false
    /// - `InvalidParameter` (field `delta_x` / `delta_t`) for non-positive or
    ///   non-finite steps, or a space step wider than the slab
    pub fn new(parameters: &ProblemParameters, delta_x: f64, delta_t: f64) -> HeatResult<Self> {
        if !parameters.check_initialization() {
            return Err(HeatError::not_initialized());
        }

        if !(delta_x.is_finite() && delta_x > 0.0) {
            return Err(HeatError::invalid("delta_x", delta_x, "space step must be positive"));
        }
        if !(delta_t.is_finite() && delta_t > 0.0) {
            return Err(HeatError::invalid("delta_t", delta_t, "time step must be positive"));
        }

        let width = parameters.width()?;
        if delta_x > width {
            return Err(HeatError::invalid(
                "delta_x",
                delta_x,
                format!("space step is wider than the slab ({width})"),
            ));
        }

        let points = space_points(width, delta_x);

        Ok(Self {
            diffusivity: parameters.diffusivity()?,
            width,
            time_stop: parameters.time_stop()?,
            delta_x,
            delta_t,
            points,
            boundaries: SlabBoundaries::new(
                parameters.internal_temperature()?,
                parameters.surface_temperature()?,
                points,
            ),
        })
    }

    /// `D·Δt/Δx²`, the mesh Fourier number
    pub fn fourier_number(&self) -> f64 {
        self.diffusivity * self.delta_t / (self.delta_x * self.delta_x)
    }

    /// Whether the row at `time_index` lies inside the time horizon
    pub fn within_horizon(&self, time_index: usize) -> bool {
        (time_index as f64) * self.delta_t <= self.time_stop
    }

    /// Empty grid sized for this discretization
    pub fn empty_grid(&self) -> SolutionGrid {
        SolutionGrid::with_capacity(
            self.delta_x,
            self.delta_t,
            time_rows(self.time_stop, self.delta_t),
        )
    }
}

// =================================================================================================
// Solution Grid
// =================================================================================================

/// Temperatures over the space-time grid
///
/// Rows are appended in increasing time order and never modified afterwards.
///
/// # Example
///
/// ```rust
/// use heat_rs::physics::ProblemParameters;
/// use heat_rs::solver::{HeatSolver, Solver};
///
/// let parameters = ProblemParameters::from_values(1.0, 1.0, 0.0, 100.0, 0.5)?;
/// let mut solver = HeatSolver::laasonen();
/// solver.configure(&parameters)?;
///
/// let grid = solver.solve(0.25, 0.125)?;
/// assert_eq!(grid.points(), 5);
/// assert_eq!(grid.len(), 5);
/// assert_eq!(grid.time_at(4), 0.5);
/// # Ok::<(), heat_rs::HeatError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionGrid {
    rows: Vec<DVector<f64>>,
    delta_x: f64,
    delta_t: f64,
}

impl SolutionGrid {
    /// Create an empty grid for the given steps
    pub fn new(delta_x: f64, delta_t: f64) -> Self {
        Self::with_capacity(delta_x, delta_t, 0)
    }

    /// Create an empty grid with room for `rows` time rows
    pub fn with_capacity(delta_x: f64, delta_t: f64, rows: usize) -> Self {
        Self {
            rows: Vec::with_capacity(rows),
            delta_x,
            delta_t,
        }
    }

    /// Append the next time row
    ///
    /// # Panics
    ///
    /// Panics when `row` does not have the length of the rows already stored.
    pub fn push_row(&mut self, row: DVector<f64>) {
        if let Some(first) = self.rows.first() {
            assert_eq!(
                first.len(),
                row.len(),
                "every row of a solution grid must have the same length"
            );
        }
        self.rows.push(row);
    }

    /// All rows, oldest first
    pub fn rows(&self) -> &[DVector<f64>] {
        &self.rows
    }

    /// Row at `time_index`
    pub fn row(&self, time_index: usize) -> Option<&DVector<f64>> {
        self.rows.get(time_index)
    }

    /// Row at t = 0
    pub fn first_row(&self) -> Option<&DVector<f64>> {
        self.rows.first()
    }

    /// Most recent row
    pub fn last_row(&self) -> Option<&DVector<f64>> {
        self.rows.last()
    }

    /// Number of time rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of space points per row (0 for an empty grid)
    pub fn points(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn delta_x(&self) -> f64 {
        self.delta_x
    }

    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Time of row `time_index`, computed from the index to avoid drift
    pub fn time_at(&self, time_index: usize) -> f64 {
        time_index as f64 * self.delta_t
    }

    /// Position of column `space_index`
    pub fn position_at(&self, space_index: usize) -> f64 {
        space_index as f64 * self.delta_x
    }

    /// Times of every row
    pub fn time_points(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.time_at(i)).collect()
    }

    /// Positions of every column
    pub fn positions(&self) -> Vec<f64> {
        (0..self.points()).map(|j| self.position_at(j)).collect()
    }

    /// Dense `rows × points` copy of the grid
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), self.points(), |i, j| self.rows[i][j])
    }

    /// Consume the grid and return its rows
    pub fn into_rows(self) -> Vec<DVector<f64>> {
        self.rows
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters() -> ProblemParameters {
        ProblemParameters::from_values(2.0, 1.0, 10.0, 50.0, 1.0).unwrap()
    }

    #[test]
    fn test_space_points_reference_scenario() {
        assert_eq!(space_points(31.0, 0.05), 621);
        assert_eq!(space_points(31.0, 0.025), 1241);
    }

    #[test]
    fn test_space_points_truncates() {
        // 1 / 0.3 = 3.33 → 3 intervals
        assert_eq!(space_points(1.0, 0.3), 4);
    }

    #[test]
    fn test_time_rows_counts_initial_row() {
        assert_eq!(time_rows(1.0, 0.25), 5);
        assert_eq!(time_rows(0.5, 0.01), 51);
        assert_eq!(time_rows(0.1, 0.25), 1);
    }

    #[test]
    fn test_discretization_reads_all_constants() {
        let disc = Discretization::new(&parameters(), 0.25, 0.125).unwrap();
        assert_eq!(disc.points, 5);
        assert_eq!(disc.diffusivity, 2.0);
        assert_eq!(disc.time_stop, 1.0);
        assert_eq!(disc.boundaries.surface_temperature(), 50.0);
        assert!((disc.fourier_number() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_discretization_requires_initialized_parameters() {
        let mut incomplete = ProblemParameters::new();
        incomplete.set_width(1.0).unwrap();
        let error = Discretization::new(&incomplete, 0.1, 0.1).unwrap_err();
        assert_eq!(error, HeatError::not_initialized());
    }

    #[test]
    fn test_discretization_rejects_bad_steps() {
        let p = parameters();
        for (dx, dt, field) in [
            (0.0, 0.1, "delta_x"),
            (-0.1, 0.1, "delta_x"),
            (f64::NAN, 0.1, "delta_x"),
            (2.0, 0.1, "delta_x"),
            (0.1, 0.0, "delta_t"),
            (0.1, f64::INFINITY, "delta_t"),
        ] {
            match Discretization::new(&p, dx, dt) {
                Err(HeatError::InvalidParameter { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected InvalidParameter for ({dx}, {dt}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_within_horizon() {
        let disc = Discretization::new(&parameters(), 0.25, 0.25).unwrap();
        assert!(disc.within_horizon(4));
        assert!(!disc.within_horizon(5));
    }

    #[test]
    fn test_grid_accessors() {
        let mut grid = SolutionGrid::new(0.5, 0.1);
        assert!(grid.is_empty());
        assert_eq!(grid.points(), 0);

        grid.push_row(DVector::from_vec(vec![1.0, 2.0, 3.0]));
        grid.push_row(DVector::from_vec(vec![4.0, 5.0, 6.0]));

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.points(), 3);
        assert_eq!(grid.first_row().unwrap()[0], 1.0);
        assert_eq!(grid.last_row().unwrap()[2], 6.0);
        assert_eq!(grid.positions(), vec![0.0, 0.5, 1.0]);
        assert!((grid.time_points()[1] - 0.1).abs() < 1e-15);

        let matrix = grid.to_matrix();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix[(1, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_grid_rejects_ragged_rows() {
        let mut grid = SolutionGrid::new(0.5, 0.1);
        grid.push_row(DVector::from_vec(vec![1.0, 2.0, 3.0]));
        grid.push_row(DVector::from_vec(vec![1.0, 2.0]));
    }
}
