//! Generic engine for explicit schemes
//!
//! # Algorithm
//!
//! 1. Validate the parameters and grid steps ([`Discretization`]).
//! 2. Two-level schemes: row 0 is the initial/boundary row, marching starts
//!    at time index 1.
//! 3. Three-level schemes: rows 0 and 1 come from a first-step delegate
//!    ([`FirstStep`]) run over a horizon of exactly one step, marching starts
//!    at time index 2.
//! 4. For every following index while `index·Δt ≤ time_stop`: both faces are
//!    set to the surface temperature and every interior point is computed by
//!    the scheme's [`ExplicitStencil`] from the rows built so far.
//!
//! # Richardson-extrapolated bootstrap
//!
//! With extrapolation enabled the delegate runs twice, on `(Δx, Δt)` giving
//! grid A and on `(Δx/2, Δt/4)` giving grid B. Row 0 is taken from A and
//!
//! ```text
//! row1[j] = (4·B_last[2j] - A_last[j]) / 3
//! ```

use std::fmt;

use log::{debug, warn};
use nalgebra::DVector;

use crate::error::{HeatError, HeatResult};
use crate::physics::ProblemParameters;
use crate::solver::grid::{Discretization, SolutionGrid};
use crate::solver::heat_solver::HeatSolver;
use crate::solver::traits::Solver;

// =================================================================================================
// Stencil trait
// =================================================================================================

/// Per-point update formula of an explicit scheme
pub trait ExplicitStencil {
    /// Temperature at `(time_index, space_index)` for an interior point
    ///
    /// `history` holds every row already computed, so `history[time_index - 1]`
    /// is the previous row (and `history[time_index - 2]` the one before for
    /// three-level schemes).
    fn next_value(&self, history: &[DVector<f64>], time_index: usize, space_index: usize) -> f64;
}

// =================================================================================================
// First-step delegate
// =================================================================================================

/// How a three-level scheme obtains its second row
///
/// The delegate is borrowed, never owned: it is the caller's solver and is
/// only invoked through [`Solver::solve_with`] during the bootstrap. Without
/// an explicit delegate a Laasonen solver is used.
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::{FirstStep, HeatSolver};
///
/// let crank_nicolson = HeatSolver::crank_nicolson();
/// let dufort_frankel = HeatSolver::dufort_frankel()
///     .with_first_step(FirstStep::new(&crank_nicolson, false));
///
/// assert_eq!(dufort_frankel.first_step().delegate_name(), "Crank-Nicolson");
/// ```
#[derive(Clone, Copy)]
pub struct FirstStep<'d> {
    delegate: Option<&'d dyn Solver>,
    richardson_extrapolation: bool,
}

impl<'d> FirstStep<'d> {
    /// Bootstrap with `delegate`, extrapolated or not
    pub fn new(delegate: &'d dyn Solver, richardson_extrapolation: bool) -> Self {
        Self {
            delegate: Some(delegate),
            richardson_extrapolation,
        }
    }

    /// Bootstrap with the built-in Laasonen solver
    pub fn laasonen(richardson_extrapolation: bool) -> Self {
        Self {
            delegate: None,
            richardson_extrapolation,
        }
    }

    pub fn richardson_extrapolation(&self) -> bool {
        self.richardson_extrapolation
    }

    /// Name of the solver that computes row 1
    pub fn delegate_name(&self) -> &str {
        match self.delegate {
            Some(delegate) => delegate.name(),
            None => HeatSolver::LAASONEN_NAME,
        }
    }

    /// Label used in reports, e.g. `"Laasonen with RE"`
    pub fn label(&self) -> String {
        if self.richardson_extrapolation {
            format!("{} with RE", self.delegate_name())
        } else {
            self.delegate_name().to_string()
        }
    }
}

impl Default for FirstStep<'_> {
    /// Laasonen with Richardson extrapolation
    fn default() -> Self {
        Self::laasonen(true)
    }
}

impl fmt::Debug for FirstStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstStep")
            .field("delegate", &self.delegate_name())
            .field("richardson_extrapolation", &self.richardson_extrapolation)
            .finish()
    }
}

// =================================================================================================
// Explicit time marcher
// =================================================================================================

/// Time-marching engine shared by the explicit schemes
pub struct ExplicitTimeMarcher<'a> {
    parameters: &'a ProblemParameters,
    discretization: Discretization,
}

impl<'a> ExplicitTimeMarcher<'a> {
    pub fn new(parameters: &'a ProblemParameters, discretization: Discretization) -> Self {
        Self {
            parameters,
            discretization,
        }
    }

    /// March a two-level scheme (`first_step = None`) or a three-level one
    pub fn march<S: ExplicitStencil>(
        &self,
        stencil: &S,
        first_step: Option<&FirstStep<'_>>,
    ) -> HeatResult<SolutionGrid> {
        let disc = &self.discretization;

        let (mut grid, start_index) = match first_step {
            Some(first_step) if disc.within_horizon(1) => (self.bootstrap(first_step)?, 2),
            _ => {
                let mut grid = disc.empty_grid();
                grid.push_row(disc.boundaries.initial_row());
                (grid, 1)
            }
        };

        let n = disc.points;
        let surface = disc.boundaries.surface_temperature();
        let mut reported_non_finite = false;

        let mut time_index = start_index;
        while disc.within_horizon(time_index) {
            let row = {
                let history = grid.rows();
                DVector::from_fn(n, |j, _| {
                    if j == 0 || j + 1 == n {
                        surface
                    } else {
                        stencil.next_value(history, time_index, j)
                    }
                })
            };

            if !reported_non_finite && row.iter().any(|t| !t.is_finite()) {
                warn!(
                    "non-finite temperature at time index {time_index} (t = {})",
                    grid.time_at(time_index)
                );
                reported_non_finite = true;
            }

            grid.push_row(row);
            time_index += 1;
        }

        Ok(grid)
    }

    /// Rows 0 and 1 of a three-level scheme
    fn bootstrap(&self, first_step: &FirstStep<'_>) -> HeatResult<SolutionGrid> {
        let disc = &self.discretization;
        let (delta_x, delta_t) = (disc.delta_x, disc.delta_t);

        // Delegate runs over exactly one step
        let one_step = self.parameters.with_time_stop(delta_t)?;
        let fallback = HeatSolver::laasonen();
        let delegate: &dyn Solver = match first_step.delegate {
            Some(delegate) => delegate,
            None => &fallback,
        };

        debug!(
            "bootstrapping first step with {} (Richardson extrapolation: {})",
            delegate.name(),
            first_step.richardson_extrapolation
        );

        let mut grid = disc.empty_grid();

        if first_step.richardson_extrapolation {
            let coarse = delegate.solve_with(&one_step, delta_x, delta_t)?;
            let fine = delegate.solve_with(&one_step, delta_x / 2.0, delta_t / 4.0)?;

            let (Some(coarse_first), Some(coarse_last), Some(fine_last)) =
                (coarse.first_row(), coarse.last_row(), fine.last_row())
            else {
                return Err(short_delegate_grid(delegate.name()));
            };
            if coarse.len() < 2 || fine_last.len() < 2 * (disc.points - 1) + 1 {
                return Err(short_delegate_grid(delegate.name()));
            }

            let mut second = DVector::from_fn(disc.points, |j, _| {
                (4.0 * fine_last[2 * j] - coarse_last[j]) / 3.0
            });
            disc.boundaries.pin(&mut second);

            grid.push_row(coarse_first.clone());
            grid.push_row(second);
        } else {
            let delegate_grid = delegate.solve_with(&one_step, delta_x, delta_t)?;
            if delegate_grid.len() < 2 {
                return Err(short_delegate_grid(delegate.name()));
            }
            for row in delegate_grid.into_rows().into_iter().take(2) {
                grid.push_row(row);
            }
        }

        Ok(grid)
    }
}

fn short_delegate_grid(name: &str) -> HeatError {
    HeatError::InvalidParameter {
        field: "first_step",
        value: None,
        reason: format!("first-step solver {name} did not produce the two rows needed"),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Copies the previous value: the field never changes
    struct Frozen;

    impl ExplicitStencil for Frozen {
        fn next_value(&self, history: &[DVector<f64>], time_index: usize, space_index: usize) -> f64 {
            history[time_index - 1][space_index]
        }
    }

    /// Returns the time index so that rows are easy to identify
    struct TimeIndex;

    impl ExplicitStencil for TimeIndex {
        fn next_value(&self, history: &[DVector<f64>], time_index: usize, _space_index: usize) -> f64 {
            assert_eq!(history.len(), time_index, "history must hold every previous row");
            time_index as f64
        }
    }

    fn parameters() -> ProblemParameters {
        ProblemParameters::from_values(1.0, 1.0, 20.0, 80.0, 1.0).unwrap()
    }

    fn marcher(parameters: &ProblemParameters, delta_x: f64, delta_t: f64) -> ExplicitTimeMarcher<'_> {
        ExplicitTimeMarcher::new(parameters, Discretization::new(parameters, delta_x, delta_t).unwrap())
    }

    #[test]
    fn test_two_level_shape() {
        let p = parameters();
        let grid = marcher(&p, 0.25, 0.25).march(&Frozen, None).unwrap();

        assert_eq!(grid.len(), 5);
        assert!(grid.rows().iter().all(|row| row.len() == 5));
        for row in grid.rows() {
            assert_eq!(row.as_slice(), &[80.0, 20.0, 20.0, 20.0, 80.0]);
        }
    }

    #[test]
    fn test_stencil_sees_full_history() {
        let p = parameters();
        let grid = marcher(&p, 0.5, 0.25).march(&TimeIndex, None).unwrap();
        assert_eq!(grid.row(3).unwrap().as_slice(), &[80.0, 3.0, 80.0]);
    }

    #[test]
    fn test_three_level_starts_marching_at_two() {
        let p = parameters();
        let first_step = FirstStep::laasonen(false);
        let grid = marcher(&p, 0.5, 0.25)
            .march(&TimeIndex, Some(&first_step))
            .unwrap();

        assert_eq!(grid.len(), 5);
        // Row 1 comes from Laasonen, not from the stencil
        assert_ne!(grid.row(1).unwrap()[1], 1.0);
        assert_eq!(grid.row(2).unwrap()[1], 2.0);
    }

    #[test]
    fn test_bootstrap_without_extrapolation_copies_delegate_rows() {
        let p = parameters();
        let delegate = HeatSolver::crank_nicolson();
        let first_step = FirstStep::new(&delegate, false);

        let grid = marcher(&p, 0.25, 0.125).bootstrap(&first_step).unwrap();
        let reference = delegate
            .solve_with(&p.with_time_stop(0.125).unwrap(), 0.25, 0.125)
            .unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.rows(), reference.rows());
    }

    #[test]
    fn test_bootstrap_with_extrapolation_formula() {
        let p = parameters();
        let delegate = HeatSolver::laasonen();
        let first_step = FirstStep::new(&delegate, true);
        let one_step = p.with_time_stop(0.125).unwrap();

        let grid = marcher(&p, 0.25, 0.125).bootstrap(&first_step).unwrap();
        let coarse = delegate.solve_with(&one_step, 0.25, 0.125).unwrap();
        let fine = delegate.solve_with(&one_step, 0.125, 0.03125).unwrap();

        assert_eq!(grid.first_row(), coarse.first_row());
        let second = grid.row(1).unwrap();
        for j in 1..4 {
            let expected = (4.0 * fine.last_row().unwrap()[2 * j] - coarse.last_row().unwrap()[j]) / 3.0;
            assert!((second[j] - expected).abs() < 1e-12);
        }
        assert_eq!(second[0], 80.0);
        assert_eq!(second[4], 80.0);
    }

    #[test]
    fn test_bootstrap_leaves_parameters_untouched() {
        let p = parameters();
        let _ = marcher(&p, 0.25, 0.125).bootstrap(&FirstStep::default()).unwrap();
        assert_eq!(p.time_stop().unwrap(), 1.0);
    }

    #[test]
    fn test_first_step_labels() {
        let exact = HeatSolver::exact();
        assert_eq!(FirstStep::default().label(), "Laasonen with RE");
        assert_eq!(FirstStep::new(&exact, false).label(), "Analytical");
        assert!(format!("{:?}", FirstStep::new(&exact, true)).contains("Analytical"));
    }
}
