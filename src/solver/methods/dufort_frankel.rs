//! Dufort-Frankel scheme
//!
//! # Mathematical Background
//!
//! Richardson's leapfrog scheme with the centre value `2T_j^n` replaced by
//! the average `T_j^{n+1} + T_j^{n-1}`:
//!
//! ```text
//! (T_j^{n+1} - T_j^{n-1}) / 2Δt = D · (T_{j+1}^n - T_j^{n+1} - T_j^{n-1} + T_{j-1}^n) / Δx²
//! ```
//!
//! Solving for `T_j^{n+1}` with `r = 2D·Δt/Δx²`:
//!
//! ```text
//! T_j^{n+1} = (T_j^{n-1} + r·(T_{j+1}^n - T_j^{n-1} + T_{j-1}^n)) / (1 + r)
//! ```
//!
//! # Characteristics
//!
//! - **Levels**: three (needs a first-step bootstrap)
//! - **Stability**: unconditionally stable
//! - **Consistency**: only when `Δt/Δx → 0`

use nalgebra::DVector;

use crate::solver::explicit::ExplicitStencil;
use crate::solver::grid::Discretization;

/// Dufort-Frankel update formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DufortFrankel {
    /// `r = 2D·Δt/Δx²`
    r: f64,
}

impl DufortFrankel {
    pub fn new(discretization: &Discretization) -> Self {
        Self {
            r: 2.0 * discretization.fourier_number(),
        }
    }

    pub fn r(&self) -> f64 {
        self.r
    }
}

impl ExplicitStencil for DufortFrankel {
    fn next_value(&self, history: &[DVector<f64>], time_index: usize, x: usize) -> f64 {
        let before = &history[time_index - 2];
        let previous = &history[time_index - 1];

        (before[x] + self.r * (previous[x + 1] - before[x] + previous[x - 1])) / (1.0 + self.r)
    }
}
