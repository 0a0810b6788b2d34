//! The single [`Solver`] implementation, dispatching on [`SchemeKind`]
//!
//! # Workflow
//!
//! ```text
//! HeatSolver::new(kind)          configure(&parameters)          solve(Δx, Δt)
//!        │                              │                              │
//!        │  kind fixed for life         │  copy stored if complete     │  Discretization::new
//!        ▼                              ▼                              ▼
//!  ┌───────────┐                 ┌────────────┐           ┌─────────────────────────┐
//!  │ SchemeKind│                 │ parameters │           │ Implicit / Explicit     │
//!  │ FirstStep │                 └────────────┘           │ TimeMarcher + scheme    │
//!  └───────────┘                                          └─────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use heat_rs::physics::ProblemParameters;
//! use heat_rs::solver::{FirstStep, HeatSolver, Solver};
//!
//! let parameters = ProblemParameters::from_values(93.0, 31.0, 38.0, 149.0, 0.1)?;
//!
//! let crank_nicolson = HeatSolver::crank_nicolson();
//! let mut dufort_frankel =
//!     HeatSolver::dufort_frankel().with_first_step(FirstStep::new(&crank_nicolson, true));
//!
//! dufort_frankel.configure(&parameters)?;
//! let grid = dufort_frankel.solve(0.5, 0.01)?;
//! assert_eq!(grid.points(), 63);
//! # Ok::<(), heat_rs::HeatError>(())
//! ```

use std::fmt;

use log::{debug, warn};

use crate::error::{HeatError, HeatResult};
use crate::physics::ProblemParameters;
use crate::solver::explicit::{ExplicitTimeMarcher, FirstStep};
use crate::solver::grid::{Discretization, SolutionGrid, time_rows};
use crate::solver::implicit::ImplicitTimeMarcher;
use crate::solver::methods::{CrankNicolson, DufortFrankel, Exact, Laasonen, Richardson};
use crate::solver::traits::{SchemeKind, Solver};

/// Heat conduction solver for one scheme
///
/// `'d` is the lifetime of the borrowed first-step delegate; solvers built
/// without one are `HeatSolver<'static>`.
#[derive(Clone, Copy)]
pub struct HeatSolver<'d> {
    kind: SchemeKind,
    parameters: Option<ProblemParameters>,
    first_step: FirstStep<'d>,
}

impl<'d> HeatSolver<'d> {
    /// Name of the built-in first-step solver
    pub const LAASONEN_NAME: &'static str = "Laasonen";

    /// Unconfigured solver; three-level schemes default to a Laasonen
    /// first step with Richardson extrapolation
    pub fn new(kind: SchemeKind) -> Self {
        Self {
            kind,
            parameters: None,
            first_step: FirstStep::default(),
        }
    }

    pub fn laasonen() -> Self {
        Self::new(SchemeKind::Laasonen)
    }

    pub fn crank_nicolson() -> Self {
        Self::new(SchemeKind::CrankNicolson)
    }

    pub fn dufort_frankel() -> Self {
        Self::new(SchemeKind::DufortFrankel)
    }

    pub fn richardson() -> Self {
        Self::new(SchemeKind::Richardson)
    }

    /// Reference solver evaluating the truncated analytical series
    pub fn exact() -> Self {
        Self::new(SchemeKind::Exact)
    }

    /// Replace the first-step strategy (builder form)
    ///
    /// Ignored by two-level schemes.
    pub fn with_first_step<'e>(self, first_step: FirstStep<'e>) -> HeatSolver<'e> {
        HeatSolver {
            kind: self.kind,
            parameters: self.parameters,
            first_step,
        }
    }

    /// Replace the first-step delegate and extrapolation flag in place
    pub fn set_first_step(&mut self, delegate: &'d dyn Solver, richardson_extrapolation: bool) {
        self.first_step = FirstStep::new(delegate, richardson_extrapolation);
    }

    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    pub fn first_step(&self) -> &FirstStep<'d> {
        &self.first_step
    }

    /// Parameters stored by the last successful `configure`
    pub fn parameters(&self) -> Option<&ProblemParameters> {
        self.parameters.as_ref()
    }
}

impl Solver for HeatSolver<'_> {
    fn configure(&mut self, parameters: &ProblemParameters) -> HeatResult<()> {
        if !parameters.check_initialization() {
            return Err(HeatError::not_initialized());
        }
        self.parameters = Some(*parameters);
        Ok(())
    }

    fn solve(&self, delta_x: f64, delta_t: f64) -> HeatResult<SolutionGrid> {
        let parameters = self.parameters.ok_or_else(HeatError::not_initialized)?;
        self.solve_with(&parameters, delta_x, delta_t)
    }

    fn solve_with(
        &self,
        parameters: &ProblemParameters,
        delta_x: f64,
        delta_t: f64,
    ) -> HeatResult<SolutionGrid> {
        // ====== Step 1: Validation ======
        let disc = Discretization::new(parameters, delta_x, delta_t)?;

        debug!(
            "{}: Δx = {delta_x}, Δt = {delta_t}, {} points, {} rows, s = {:.6}",
            self.name(),
            disc.points,
            time_rows(disc.time_stop, delta_t),
            disc.fourier_number()
        );
        if !self.kind.is_stable() {
            warn!("{} is unconditionally unstable, expect divergence", self.name());
        }

        // ====== Step 2: March ======
        match self.kind {
            SchemeKind::Laasonen => ImplicitTimeMarcher::new(disc).march(&Laasonen::new(&disc)),
            SchemeKind::CrankNicolson => {
                ImplicitTimeMarcher::new(disc).march(&CrankNicolson::new(&disc))
            }
            SchemeKind::DufortFrankel => ExplicitTimeMarcher::new(parameters, disc)
                .march(&DufortFrankel::new(&disc), Some(&self.first_step)),
            SchemeKind::Richardson => ExplicitTimeMarcher::new(parameters, disc)
                .march(&Richardson::new(&disc), Some(&self.first_step)),
            SchemeKind::Exact => {
                ExplicitTimeMarcher::new(parameters, disc).march(&Exact::new(&disc), None)
            }
        }
    }

    fn name(&self) -> &str {
        self.kind.name()
    }
}

impl fmt::Debug for HeatSolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("HeatSolver");
        debug
            .field("kind", &self.kind)
            .field("configured", &self.parameters.is_some());
        if self.kind.is_three_level() {
            debug.field("first_step", &self.first_step);
        }
        debug.finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
