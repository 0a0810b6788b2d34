//! Crank-Nicolson scheme
//!
//! # Mathematical Background
//!
//! Average of the explicit and implicit central-space operators:
//!
//! ```text
//! (T_j^{n+1} - T_j^n) / Δt = D/2 · [ δ²T^{n+1} + δ²T^n ]_j / Δx²
//! ```
//!
//! With `c = D·Δt / (2Δx²)` every interior row reads
//!
//! ```text
//! -c·T_{j-1}^{n+1} + (1 + 2c)·T_j^{n+1} - c·T_{j+1}^{n+1}
//!     = (1 - 2c)·T_j^n + c·(T_{j+1}^n + T_{j-1}^n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: second order in time and space
//! - **Stability**: unconditionally stable (may oscillate for large `c`)
//! - **Cost**: one tridiagonal solve (O(N)) per step

use nalgebra::DVector;

use crate::solver::grid::Discretization;
use crate::solver::implicit::ImplicitAssembly;
use crate::solver::tridiagonal::TridiagonalSystem;

/// Crank-Nicolson assembly rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrankNicolson {
    /// `c = D·Δt / (2Δx²)`
    c: f64,
}

impl CrankNicolson {
    pub fn new(discretization: &Discretization) -> Self {
        Self {
            c: discretization.fourier_number() / 2.0,
        }
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Explicit half of the update at interior point `j`
    fn explicit_part(&self, previous: &DVector<f64>, j: usize) -> f64 {
        (1.0 - 2.0 * self.c) * previous[j] + self.c * (previous[j + 1] + previous[j - 1])
    }
}

impl ImplicitAssembly for CrankNicolson {
    fn assemble_coefficients(&self, system: &mut TridiagonalSystem) {
        system.eliminate_coefficients(self.c, 1.0 + 2.0 * self.c);
    }

    fn assemble_rhs(&self, previous: &DVector<f64>, system: &mut TridiagonalSystem) {
        let n = previous.len();
        system.eliminate_rhs(
            self.c,
            1.0 + 2.0 * self.c,
            previous[0],
            previous[n - 1],
            |i| self.explicit_part(previous, i),
        );
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ProblemParameters;

    fn discretization() -> Discretization {
        let p = ProblemParameters::from_values(1.0, 1.0, 0.0, 1.0, 1.0).unwrap();
        Discretization::new(&p, 0.25, 0.0625).unwrap()
    }

    #[test]
    fn test_coefficient_is_half_fourier_number() {
        // D·Δt/Δx² = 1 → c = 0.5
        let scheme = CrankNicolson::new(&discretization());
        assert!((scheme.c() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_one_step_satisfies_equations() {
        let scheme = CrankNicolson::new(&discretization());
        let previous = DVector::from_vec(vec![1.0, 0.2, 0.0, 0.4, 1.0]);

        let mut system = TridiagonalSystem::new(5);
        scheme.assemble_coefficients(&mut system);
        scheme.assemble_rhs(&previous, &mut system);
        let next = system.back_substitute();

        let c = scheme.c();
        for j in 1..4 {
            let lhs = -c * next[j - 1] + (1.0 + 2.0 * c) * next[j] - c * next[j + 1];
            let rhs = (1.0 - 2.0 * c) * previous[j] + c * (previous[j + 1] + previous[j - 1]);
            assert!((lhs - rhs).abs() < 1e-12, "row {j}: {lhs} != {rhs}");
        }
    }

    #[test]
    fn test_uniform_field_is_steady() {
        let scheme = CrankNicolson::new(&discretization());
        let previous = DVector::from_element(5, 7.0);

        let mut system = TridiagonalSystem::new(5);
        scheme.assemble_coefficients(&mut system);
        scheme.assemble_rhs(&previous, &mut system);
        let next = system.back_substitute();

        assert!(next.iter().all(|&t| (t - 7.0).abs() < 1e-12));
    }
}
