//! Analytical solution by truncated Fourier series
//!
//! # Mathematical Background
//!
//! For a slab of width `L` starting uniformly at `T_in` whose faces are held
//! at `T_s`, separation of variables gives
//!
//! ```text
//! T(x, t) = T_s + 2(T_in - T_s) · Σ_{m odd} exp(-D(mπ/L)²t) · 2/(mπ) · sin(mπx/L)
//! ```
//!
//! The series is truncated after the odd terms `m = 1, 3, …, 61` (31 terms).
//! Even terms vanish because the initial profile is symmetric.
//!
//! # Role
//!
//! Used as the reference every finite-difference scheme is compared to. It is
//! run through the explicit engine as a two-level scheme so that its grid has
//! exactly the same shape as the numerical ones: row 0 is the initial row,
//! row `i` the series evaluated at `t = i·Δt`.
//!
//! Near `t = 0` the truncated series oscillates around the discontinuity
//! between the faces and the interior (Gibbs phenomenon); row 0 never uses it.

use std::f64::consts::PI;

use nalgebra::DVector;

use crate::solver::explicit::ExplicitStencil;
use crate::solver::grid::Discretization;

/// Largest odd index kept in the series
pub const SERIES_LAST_TERM: u32 = 61;

/// Truncated Fourier series of the cooling slab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exact {
    diffusivity: f64,
    width: f64,
    internal_temperature: f64,
    surface_temperature: f64,
    delta_x: f64,
    delta_t: f64,
    points: usize,
}

impl Exact {
    pub fn new(discretization: &Discretization) -> Self {
        Self {
            diffusivity: discretization.diffusivity,
            width: discretization.width,
            internal_temperature: discretization.boundaries.internal_temperature(),
            surface_temperature: discretization.boundaries.surface_temperature(),
            delta_x: discretization.delta_x,
            delta_t: discretization.delta_t,
            points: discretization.points,
        }
    }

    /// Temperature at position `x` and time `t`
    ///
    /// Outside the open interval `(0, width)` the surface temperature is
    /// returned exactly.
    pub fn temperature_at(&self, x: f64, t: f64) -> f64 {
        if x <= 0.0 || x >= self.width {
            return self.surface_temperature;
        }

        let amplitude = 2.0 * (self.internal_temperature - self.surface_temperature);
        self.surface_temperature + amplitude * self.series(x, t)
    }

    /// Temperature at grid node `(time_index, space_index)`
    ///
    /// Both face columns return the surface temperature exactly.
    pub fn value_at(&self, time_index: usize, space_index: usize) -> f64 {
        if space_index == 0 || space_index + 1 >= self.points {
            return self.surface_temperature;
        }
        self.temperature_at(
            space_index as f64 * self.delta_x,
            time_index as f64 * self.delta_t,
        )
    }

    /// `Σ exp(-D(mπ/L)²t) · 2/(mπ) · sin(mπx/L)`, smallest terms first
    fn series(&self, x: f64, t: f64) -> f64 {
        (1..=SERIES_LAST_TERM)
            .rev()
            .step_by(2)
            .map(|m| {
                let k = f64::from(m) * PI;
                let wave = k / self.width;
                (-self.diffusivity * wave * wave * t).exp() * (2.0 / k) * (wave * x).sin()
            })
            .sum()
    }
}

impl ExplicitStencil for Exact {
    fn next_value(&self, _history: &[DVector<f64>], time_index: usize, space_index: usize) -> f64 {
        self.value_at(time_index, space_index)
    }
}
