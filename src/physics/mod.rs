//! Physical description of the problem
//!
//! The crate solves the one-dimensional transient heat conduction equation
//!
//! ```text
//! ∂T/∂t = D · ∂²T/∂x²        0 ≤ x ≤ L,  t ≥ 0
//! ```
//!
//! over a slab of width `L` whose interior starts at a uniform temperature
//! `T_in` and whose two faces are held at `T_sur` for all `t > 0`.
//!
//! This module only holds the constants of that problem
//! ([`ProblemParameters`]); the numerical methods live in
//! [`crate::solver`].
//!
//! # Example
//!
//! ```rust
//! use heat_rs::physics::ProblemParameters;
//!
//! let parameters = ProblemParameters::from_values(
//!     93.0,   // diffusivity (cm²/h)
//!     31.0,   // width (cm)
//!     38.0,   // internal temperature (°C)
//!     149.0,  // surface temperature (°C)
//!     0.5,    // time limit (h)
//! )?;
//! assert!(parameters.check_initialization());
//! # Ok::<(), heat_rs::HeatError>(())
//! ```

pub mod parameters;

pub use parameters::ProblemParameters;
