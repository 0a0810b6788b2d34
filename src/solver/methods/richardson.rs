//! Richardson (leapfrog) scheme
//!
//! Central difference in time and space:
//!
//! ```text
//! T_j^{n+1} = T_j^{n-1} + 2D·Δt/Δx² · (T_{j+1}^n - 2T_j^n + T_{j-1}^n)
//! ```
//!
//! Unstable for every positive step ratio. Kept as a comparison case; any
//! long enough run ends in non-finite values.

use nalgebra::DVector;

use crate::solver::explicit::ExplicitStencil;
use crate::solver::grid::Discretization;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Richardson {
    /// `r = 2D·Δt/Δx²`
    r: f64,
}

impl Richardson {
    pub fn new(discretization: &Discretization) -> Self {
        Self {
            r: 2.0 * discretization.fourier_number(),
        }
    }
}

impl ExplicitStencil for Richardson {
    fn next_value(&self, history: &[DVector<f64>], time_index: usize, x: usize) -> f64 {
        let before = &history[time_index - 2];
        let previous = &history[time_index - 1];

        before[x] + self.r * (previous[x + 1] - 2.0 * previous[x] + previous[x - 1])
    }
}
