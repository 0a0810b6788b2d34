//! Solver contract and scheme enumeration
//!
//! # Design Philosophy
//!
//! - `Solver` trait: the single capability shared by every scheme
//!   (`configure`, `solve`, `name`), so callers treat schemes uniformly.
//! - `SchemeKind` enum: the closed set of schemes. Everything that differs
//!   between schemes at the configuration level (name, explicit or implicit,
//!   two or three time levels) is a constant of the variant, resolved at
//!   construction time.

use std::fmt;
use std::str::FromStr;

use crate::error::{HeatError, HeatResult};
use crate::physics::ProblemParameters;
use crate::solver::grid::SolutionGrid;

// =================================================================================================
// Solver trait
// =================================================================================================

/// Capability shared by every heat conduction scheme
///
/// # Contract
///
/// - [`configure`](Solver::configure) stores a copy of the parameters and
///   fails with `InvalidParameter` if `check_initialization()` is false.
/// - [`solve`](Solver::solve) fails with `InvalidParameter` when no
///   successful `configure` happened before.
/// - [`solve_with`](Solver::solve_with) is the stateless core: it solves for
///   the given parameters without touching the configured ones. Three-level
///   schemes call it on their borrowed first-step delegate.
///
/// # Example
///
/// ```rust
/// use heat_rs::physics::ProblemParameters;
/// use heat_rs::solver::{HeatSolver, Solver};
///
/// let parameters = ProblemParameters::from_values(1.0, 1.0, 0.0, 100.0, 0.25)?;
///
/// let mut solvers = [HeatSolver::laasonen(), HeatSolver::crank_nicolson(), HeatSolver::exact()];
/// for solver in solvers.iter_mut() {
///     solver.configure(&parameters)?;
///     let grid = solver.solve(0.125, 0.0625)?;
///     println!("{}: {} rows", solver.name(), grid.len());
/// }
/// # Ok::<(), heat_rs::HeatError>(())
/// ```
pub trait Solver {
    /// Store the problem to solve
    fn configure(&mut self, parameters: &ProblemParameters) -> HeatResult<()>;

    /// Solve the configured problem on a regular `delta_x × delta_t` grid
    fn solve(&self, delta_x: f64, delta_t: f64) -> HeatResult<SolutionGrid>;

    /// Solve `parameters` on a regular grid, ignoring the configured problem
    fn solve_with(
        &self,
        parameters: &ProblemParameters,
        delta_x: f64,
        delta_t: f64,
    ) -> HeatResult<SolutionGrid>;

    /// Name of the scheme
    fn name(&self) -> &str;
}

// =================================================================================================
// Scheme kinds
// =================================================================================================

/// How a scheme produces a new row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marching {
    /// Explicit formula over known past values
    Explicit,
    /// One tridiagonal solve per step
    Implicit,
}

/// Number of time rows a scheme update reads, plus the row it writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLevels {
    /// Reads row n, writes row n+1
    Two,
    /// Reads rows n-1 and n, writes row n+1; row 1 needs a bootstrap
    Three,
}

/// The five available schemes
///
/// | Scheme          | Marching | Levels | Stability                 |
/// |-----------------|----------|--------|---------------------------|
/// | Laasonen        | implicit | two    | unconditional             |
/// | Crank-Nicolson  | implicit | two    | unconditional             |
/// | Dufort-Frankel  | explicit | three  | unconditional             |
/// | Richardson      | explicit | three  | unconditionally unstable  |
/// | Analytical      | explicit | two    | exact (Fourier series)    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Laasonen,
    CrankNicolson,
    DufortFrankel,
    Richardson,
    Exact,
}

impl SchemeKind {
    /// Every scheme, analytical reference last
    pub const ALL: [SchemeKind; 5] = [
        SchemeKind::Laasonen,
        SchemeKind::CrankNicolson,
        SchemeKind::DufortFrankel,
        SchemeKind::Richardson,
        SchemeKind::Exact,
    ];

    /// The four finite-difference schemes
    pub const NUMERICAL: [SchemeKind; 4] = [
        SchemeKind::Laasonen,
        SchemeKind::Richardson,
        SchemeKind::CrankNicolson,
        SchemeKind::DufortFrankel,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Laasonen => "Laasonen",
            SchemeKind::CrankNicolson => "Crank-Nicolson",
            SchemeKind::DufortFrankel => "Dufort-Frankel",
            SchemeKind::Richardson => "Richardson",
            SchemeKind::Exact => "Analytical",
        }
    }

    pub fn marching(self) -> Marching {
        match self {
            SchemeKind::Laasonen | SchemeKind::CrankNicolson => Marching::Implicit,
            SchemeKind::DufortFrankel | SchemeKind::Richardson | SchemeKind::Exact => {
                Marching::Explicit
            }
        }
    }

    pub fn time_levels(self) -> TimeLevels {
        match self {
            SchemeKind::DufortFrankel | SchemeKind::Richardson => TimeLevels::Three,
            SchemeKind::Laasonen | SchemeKind::CrankNicolson | SchemeKind::Exact => TimeLevels::Two,
        }
    }

    pub fn is_three_level(self) -> bool {
        self.time_levels() == TimeLevels::Three
    }

    /// `false` only for Richardson, which diverges for every step ratio
    pub fn is_stable(self) -> bool {
        self != SchemeKind::Richardson
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = HeatError;

    /// Parse a scheme name, ignoring case, spaces, dashes and underscores
    ///
    /// `"exact"` and `"analytical"` both map to [`SchemeKind::Exact`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "laasonen" => Ok(SchemeKind::Laasonen),
            "cranknicolson" | "cranknicholson" => Ok(SchemeKind::CrankNicolson),
            "dufortfrankel" => Ok(SchemeKind::DufortFrankel),
            "richardson" => Ok(SchemeKind::Richardson),
            "exact" | "analytical" => Ok(SchemeKind::Exact),
            _ => Err(HeatError::InvalidParameter {
                field: "scheme",
                value: None,
                reason: format!("unknown scheme '{s}'"),
            }),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(SchemeKind::Laasonen.name(), "Laasonen");
        assert_eq!(SchemeKind::CrankNicolson.name(), "Crank-Nicolson");
        assert_eq!(SchemeKind::DufortFrankel.name(), "Dufort-Frankel");
        assert_eq!(SchemeKind::Richardson.name(), "Richardson");
        assert_eq!(SchemeKind::Exact.name(), "Analytical");
        assert_eq!(SchemeKind::Exact.to_string(), "Analytical");
    }

    #[test]
    fn test_constant_configuration() {
        assert_eq!(SchemeKind::Laasonen.marching(), Marching::Implicit);
        assert_eq!(SchemeKind::CrankNicolson.marching(), Marching::Implicit);
        assert_eq!(SchemeKind::Exact.marching(), Marching::Explicit);

        let three_level: Vec<_> = SchemeKind::ALL
            .iter()
            .filter(|kind| kind.is_three_level())
            .collect();
        assert_eq!(three_level, vec![&SchemeKind::DufortFrankel, &SchemeKind::Richardson]);
    }

    #[test]
    fn test_only_richardson_unstable() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.is_stable(), kind != SchemeKind::Richardson);
        }
    }

    #[test]
    fn test_numerical_excludes_exact() {
        assert!(!SchemeKind::NUMERICAL.contains(&SchemeKind::Exact));
        assert_eq!(SchemeKind::NUMERICAL.len(), 4);
    }

    #[test]
    fn test_from_str_round_trip_names() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.name().parse::<SchemeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("crank_nicholson".parse::<SchemeKind>().unwrap(), SchemeKind::CrankNicolson);
        assert_eq!("EXACT".parse::<SchemeKind>().unwrap(), SchemeKind::Exact);
        assert_eq!("dufort frankel".parse::<SchemeKind>().unwrap(), SchemeKind::DufortFrankel);
    }

    #[test]
    fn test_from_str_unknown() {
        let error = "forward-euler".parse::<SchemeKind>().unwrap_err();
        assert!(error.to_string().contains("unknown scheme"));
    }
}
