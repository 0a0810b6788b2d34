//! heat-rs: One-Dimensional Transient Heat Conduction
//!
//! Finite-difference solvers for the heat equation `∂T/∂t = D·∂²T/∂x²` on a
//! slab whose faces are held at a fixed temperature, compared against the
//! analytical Fourier-series solution.
//!
//! # Architecture
//!
//! heat-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Numerics**
//!    - [`physics::ProblemParameters`] defines what is solved
//!    - [`solver`] schemes and engines define how
//!
//! 2. **One contract for every scheme**
//!    - Five schemes behind the [`solver::Solver`] trait
//!    - Two shared marching engines (explicit and implicit)
//!    - Reporting only consumes grids
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::prelude::*;
//!
//! // 1. Describe the problem
//! let parameters = ProblemParameters::from_values(
//!     93.0,   // diffusivity
//!     31.0,   // width
//!     38.0,   // internal temperature
//!     149.0,  // surface temperature
//!     0.5,    // time limit
//! )?;
//!
//! // 2. Pick a scheme and solve
//! let mut solver = HeatSolver::crank_nicolson();
//! solver.configure(&parameters)?;
//! let grid = solver.solve(0.05, 0.01)?;
//!
//! // 3. Compare against the analytical solution
//! let analytical = HeatSolver::exact().solve_with(&parameters, 0.05, 0.01)?;
//! let norms = ErrorNorms::between(&analytical, &grid)?;
//! println!("{}: max error {:.3e}", solver.name(), norms.uniform);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`physics`]: problem constants
//! - [`solver`]: schemes, engines and the solution grid
//! - [`output`]: error norms and CSV reports
//! - [`config`]: JSON study configuration
//! - [`study`]: the comparison studies of the `heat-rs` binary

pub mod error;
pub mod physics;
pub mod solver;

pub mod config;
pub mod output;
pub mod study;

pub use error::{HeatError, HeatResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use heat_rs::prelude::*;
    //! ```
    pub use crate::error::{HeatError, HeatResult};
    pub use crate::output::ErrorNorms;
    pub use crate::physics::ProblemParameters;
    pub use crate::solver::{FirstStep, HeatSolver, SchemeKind, SolutionGrid, Solver};
}
