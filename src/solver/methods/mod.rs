//! Per-scheme mathematics
//!
//! Each scheme is a small value type built from a
//! [`Discretization`](crate::solver::Discretization) at the start of a solve.
//! It holds only the coefficients its formula needs and plugs into one of the
//! two marching engines.
//!
//! # Available Schemes
//!
//! ## Implicit ([`ImplicitAssembly`](crate::solver::ImplicitAssembly))
//!
//! - **[`Laasonen`]**: backward Euler in time
//!   - Order: O(Δt + Δx²)
//!   - Stability: unconditional
//!
//! - **[`CrankNicolson`]**: trapezoidal in time
//!   - Order: O(Δt² + Δx²)
//!   - Stability: unconditional
//!
//! ## Explicit ([`ExplicitStencil`](crate::solver::ExplicitStencil))
//!
//! - **[`DufortFrankel`]**: three-level, unconditionally stable
//! - **[`Richardson`]**: three-level leapfrog, unconditionally unstable
//! - **[`Exact`]**: two-level, evaluates the analytical series at each node
//!
//! # Adding a Scheme
//!
//! Implement one of the two engine traits, add a [`SchemeKind`](crate::solver::SchemeKind)
//! variant and route it in [`HeatSolver`](crate::solver::HeatSolver).

pub mod crank_nicolson;
pub mod dufort_frankel;
pub mod exact;
pub mod laasonen;
pub mod richardson;

pub use crank_nicolson::CrankNicolson;
pub use dufort_frankel::DufortFrankel;
pub use exact::{Exact, SERIES_LAST_TERM};
pub use laasonen::Laasonen;
pub use richardson::Richardson;
