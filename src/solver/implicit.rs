//! Generic engine for implicit schemes
//!
//! # Algorithm
//!
//! 1. Validate the parameters and grid steps, build row 0.
//! 2. Eliminate the coefficient matrix once: it depends only on `Δx`, `Δt`
//!    and the diffusivity.
//! 3. For every index while `index·Δt ≤ time_stop`: eliminate the
//!    right-hand side from the previous row and back-substitute the new row.
//!
//! The [`TridiagonalSystem`] lives for one `march` call only.

use log::{trace, warn};

use crate::error::HeatResult;
use crate::solver::grid::{Discretization, SolutionGrid};
use crate::solver::tridiagonal::TridiagonalSystem;
use nalgebra::DVector;

/// Assembly rule of an implicit scheme
///
/// Implementations perform the forward elimination while filling the
/// system; back substitution is left to the engine.
pub trait ImplicitAssembly {
    /// Fill the eliminated superdiagonal (called once per solve)
    fn assemble_coefficients(&self, system: &mut TridiagonalSystem);

    /// Fill the eliminated right-hand side from the previous row
    fn assemble_rhs(&self, previous: &DVector<f64>, system: &mut TridiagonalSystem);
}

/// Time-marching engine shared by the implicit schemes
pub struct ImplicitTimeMarcher {
    discretization: Discretization,
}

impl ImplicitTimeMarcher {
    pub fn new(discretization: Discretization) -> Self {
        Self { discretization }
    }

    pub fn march<A: ImplicitAssembly>(&self, assembly: &A) -> HeatResult<SolutionGrid> {
        let disc = &self.discretization;

        let mut grid = disc.empty_grid();
        grid.push_row(disc.boundaries.initial_row());

        let mut system = TridiagonalSystem::new(disc.points);
        assembly.assemble_coefficients(&mut system);
        trace!("coefficient system built for {} points", disc.points);

        let mut reported_non_finite = false;
        let mut time_index = 1;
        while disc.within_horizon(time_index) {
            assembly.assemble_rhs(&grid.rows()[time_index - 1], &mut system);
            let row = system.back_substitute();

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
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ProblemParameters;

    /// Identity system: every row repeats the previous one
    struct Identity;

    impl ImplicitAssembly for Identity {
        fn assemble_coefficients(&self, system: &mut TridiagonalSystem) {
            system.eliminate_coefficients(0.0, 1.0);
        }

        fn assemble_rhs(&self, previous: &DVector<f64>, system: &mut TridiagonalSystem) {
            let n = previous.len();
            system.eliminate_rhs(0.0, 1.0, previous[0], previous[n - 1], |i| previous[i]);
        }
    }

    #[test]
    fn test_identity_assembly_keeps_initial_row() {
        let p = ProblemParameters::from_values(1.0, 2.0, 5.0, 15.0, 0.5).unwrap();
        let disc = Discretization::new(&p, 0.5, 0.125).unwrap();
        let grid = ImplicitTimeMarcher::new(disc).march(&Identity).unwrap();

        assert_eq!(grid.len(), 5);
        for row in grid.rows() {
            assert_eq!(row.as_slice(), &[15.0, 5.0, 5.0, 5.0, 15.0]);
        }
    }

    #[test]
    fn test_horizon_shorter_than_step_gives_initial_row_only() {
        let p = ProblemParameters::from_values(1.0, 1.0, 0.0, 1.0, 0.1).unwrap();
        let disc = Discretization::new(&p, 0.25, 0.5).unwrap();
        let grid = ImplicitTimeMarcher::new(disc).march(&Identity).unwrap();
        assert_eq!(grid.len(), 1);
    }
}
