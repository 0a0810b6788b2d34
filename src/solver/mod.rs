//! Finite-difference solvers for transient conduction in a slab
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Problem** ([`ProblemParameters`](crate::physics::ProblemParameters)) - WHAT to solve
//!    - diffusivity, width, initial and surface temperatures, time limit
//!
//! 2. **Scheme** ([`SchemeKind`], [`methods`]) - the per-point mathematics
//!    - explicit update formula, or tridiagonal assembly rule
//!
//! 3. **Engine** ([`ExplicitTimeMarcher`], [`ImplicitTimeMarcher`]) - HOW rows are produced
//!    - initial row, three-level bootstrap, marching loop
//!
//! [`HeatSolver`] ties the three together behind the [`Solver`] trait, so a
//! caller can run any scheme with `configure` then `solve(Δx, Δt)`.
//!
//! # Module Organization
//!
//! - **`traits`**: [`Solver`] trait, [`SchemeKind`] and its constant configuration
//! - **`grid`**: [`SolutionGrid`] output and the per-solve [`Discretization`]
//! - **`boundary`**: [`SlabBoundaries`], initial row and face pinning
//! - **`tridiagonal`**: fused Thomas elimination and back substitution
//! - **`explicit`** / **`implicit`**: the two marching engines
//! - **`methods`**: one file per scheme
//! - **`heat_solver`**: [`HeatSolver`], dispatch from kind to engine
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌────────────────────┐
//! │ ProblemParameters  │
//! └─────────┬──────────┘
//!           │ configure
//! ┌─────────▼──────────┐      ┌─────────────────────┐
//! │ HeatSolver (kind)  │─────▶│ FirstStep delegate  │ (three-level only)
//! └─────────┬──────────┘      └─────────────────────┘
//!           │ solve(Δx, Δt)
//!     ┌─────┴───────────────┐
//!     │                     │
//! ┌───▼──────────────┐ ┌────▼─────────────┐
//! │ ImplicitTime     │ │ ExplicitTime     │
//! │ Marcher          │ │ Marcher          │
//! │ Laasonen, CN     │ │ DF, Richardson,  │
//! │                  │ │ Exact            │
//! └───┬──────────────┘ └────┬─────────────┘
//!     └─────────┬───────────┘
//!     ┌─────────▼──────────┐
//!     │ SolutionGrid       │ rows i·Δt × columns j·Δx
//!     └────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use heat_rs::physics::ProblemParameters;
//! use heat_rs::solver::{HeatSolver, SchemeKind, Solver};
//!
//! let parameters = ProblemParameters::from_values(93.0, 31.0, 38.0, 149.0, 0.5)?;
//!
//! let mut reference = HeatSolver::exact();
//! reference.configure(&parameters)?;
//! let exact = reference.solve(0.05, 0.01)?;
//!
//! let mut laasonen = HeatSolver::new(SchemeKind::Laasonen);
//! laasonen.configure(&parameters)?;
//! let grid = laasonen.solve(0.05, 0.01)?;
//!
//! assert_eq!(grid.points(), 621);
//! assert_eq!(grid.len(), exact.len());
//! # Ok::<(), heat_rs::HeatError>(())
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns [`HeatResult`](crate::HeatResult). A solve
//! either returns a complete grid or an error, never a partial grid. Values
//! that become non-finite while marching (Richardson) are not an error: they
//! are logged once per solve and kept in the grid.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod boundary;
mod explicit;
mod grid;
mod heat_solver;
mod implicit;
pub mod methods;
mod traits;
pub mod tridiagonal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Marching, SchemeKind, Solver, TimeLevels};

pub use boundary::SlabBoundaries;
pub use grid::{Discretization, SolutionGrid, space_points, time_rows};

pub use explicit::{ExplicitStencil, ExplicitTimeMarcher, FirstStep};
pub use implicit::{ImplicitAssembly, ImplicitTimeMarcher};

pub use heat_solver::HeatSolver;
pub use tridiagonal::TridiagonalSystem;
