//! Laasonen (simple implicit) scheme
//!
//! # Mathematical Background
//!
//! Backward difference in time, central difference in space:
//!
//! ```text
//! (T_j^{n+1} - T_j^n) / Δt = D · (T_{j+1}^{n+1} - 2T_j^{n+1} + T_{j-1}^{n+1}) / Δx²
//! ```
//!
//! With `s = D·Δt/Δx²` every interior row of the linear system reads
//!
//! ```text
//! -s·T_{j-1}^{n+1} + (1 + 2s)·T_j^{n+1} - s·T_{j+1}^{n+1} = T_j^n
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: unconditionally stable
//! - **Cost**: one tridiagonal solve (O(N)) per step
//!
//! Also the default first-step solver of the three-level schemes.

use nalgebra::DVector;

use crate::solver::grid::Discretization;
use crate::solver::implicit::ImplicitAssembly;
use crate::solver::tridiagonal::TridiagonalSystem;

/// Laasonen assembly rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laasonen {
    /// `s = D·Δt/Δx²`
    s: f64,
}

impl Laasonen {
    pub fn new(discretization: &Discretization) -> Self {
        Self {
            s: discretization.fourier_number(),
        }
    }

    pub fn s(&self) -> f64 {
        self.s
    }
}

impl ImplicitAssembly for Laasonen {
    /// `c'_i = -s / (1 + 2s + s·c'_{i-1})`, identity boundary rows
    fn assemble_coefficients(&self, system: &mut TridiagonalSystem) {
        system.eliminate_coefficients(self.s, 1.0 + 2.0 * self.s);
    }

    /// `d'_i = (T_i^n + s·d'_{i-1}) / (1 + 2s + s·c'_{i-1})`
    fn assemble_rhs(&self, previous: &DVector<f64>, system: &mut TridiagonalSystem) {
        let n = previous.len();
        system.eliminate_rhs(
            self.s,
            1.0 + 2.0 * self.s,
            previous[0],
            previous[n - 1],
            |i| previous[i],
        );
    }
}

// =================================================================================================
// Tests
// =================================================================================================
