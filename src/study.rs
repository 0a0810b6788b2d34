//! Comparison studies run by the `heat-rs` binary
//!
//! Each study returns its grids in memory; writing them is left to the
//! caller (see [`crate::output::export`]). Every numerical grid comes with the
//! analytical grid computed on the same steps and horizon, ready for
//! [`ErrorNorms::between`](crate::output::ErrorNorms::between).
//!
//! 1. [`scheme_comparison`]: the four finite-difference schemes on one grid
//! 2. [`laasonen_time_step_study`]: Laasonen for several time steps
//! 3. [`first_step_study`]: the two three-level schemes with every bootstrap
//!    variant, over a short horizon where the bootstrap error dominates

use log::info;

use crate::error::HeatResult;
use crate::physics::ProblemParameters;
use crate::solver::{FirstStep, HeatSolver, SchemeKind, SolutionGrid, Solver};

/// A grid labelled with what produced it
#[derive(Debug, Clone)]
pub struct LabelledGrid {
    pub label: String,
    pub grid: SolutionGrid,
}

/// Result of [`scheme_comparison`]
#[derive(Debug, Clone)]
pub struct SchemeComparison {
    pub analytical: SolutionGrid,
    /// Laasonen, Richardson, Crank-Nicolson, Dufort-Frankel
    pub runs: Vec<LabelledGrid>,
}

/// One time step of [`laasonen_time_step_study`]
#[derive(Debug, Clone)]
pub struct TimeStepRun {
    pub delta_t: f64,
    pub numerical: SolutionGrid,
    pub analytical: SolutionGrid,
}

/// One three-level scheme of [`first_step_study`]
#[derive(Debug, Clone)]
pub struct FirstStepComparison {
    pub scheme: SchemeKind,
    pub analytical: SolutionGrid,
    /// One run per bootstrap variant, labelled with [`FirstStep::label`]
    pub runs: Vec<LabelledGrid>,
}

/// Analytical reference plus every numerical scheme on `(delta_x, delta_t)`
pub fn scheme_comparison(
    parameters: &ProblemParameters,
    delta_x: f64,
    delta_t: f64,
) -> HeatResult<SchemeComparison> {
    let analytical = solve_configured(HeatSolver::exact(), parameters, delta_x, delta_t)?;

    let runs = SchemeKind::NUMERICAL
        .into_iter()
        .map(|kind| {
            let grid = solve_configured(HeatSolver::new(kind), parameters, delta_x, delta_t)?;
            info!("{kind}: {} rows × {} points", grid.len(), grid.points());
            Ok(LabelledGrid {
                label: kind.name().to_string(),
                grid,
            })
        })
        .collect::<HeatResult<Vec<_>>>()?;

    Ok(SchemeComparison { analytical, runs })
}

/// Laasonen against the analytical solution for each time step
pub fn laasonen_time_step_study(
    parameters: &ProblemParameters,
    delta_x: f64,
    delta_ts: &[f64],
) -> HeatResult<Vec<TimeStepRun>> {
    let mut laasonen = HeatSolver::laasonen();
    let mut exact = HeatSolver::exact();
    laasonen.configure(parameters)?;
    exact.configure(parameters)?;

    delta_ts
        .iter()
        .map(|&delta_t| {
            info!("Laasonen with Δt = {delta_t}");
            Ok(TimeStepRun {
                delta_t,
                numerical: laasonen.solve(delta_x, delta_t)?,
                analytical: exact.solve(delta_x, delta_t)?,
            })
        })
        .collect()
}

/// Dufort-Frankel and Richardson with every bootstrap variant
///
/// The horizon is shortened to `horizon_steps · delta_t`. Variants, in order:
/// Analytical, Crank-Nicolson and Laasonen without extrapolation, then
/// Crank-Nicolson and Laasonen with Richardson extrapolation.
pub fn first_step_study(
    parameters: &ProblemParameters,
    delta_x: f64,
    delta_t: f64,
    horizon_steps: usize,
) -> HeatResult<Vec<FirstStepComparison>> {
    let short = parameters.with_time_stop(horizon_steps as f64 * delta_t)?;

    let exact = HeatSolver::exact();
    let crank_nicolson = HeatSolver::crank_nicolson();
    let laasonen = HeatSolver::laasonen();

    let variants = [
        FirstStep::new(&exact, false),
        FirstStep::new(&crank_nicolson, false),
        FirstStep::new(&laasonen, false),
        FirstStep::new(&crank_nicolson, true),
        FirstStep::new(&laasonen, true),
    ];

    let analytical = exact.solve_with(&short, delta_x, delta_t)?;

    [SchemeKind::DufortFrankel, SchemeKind::Richardson]
        .into_iter()
        .map(|scheme| {
            let runs = variants
                .iter()
                .map(|first_step| {
                    let solver = HeatSolver::new(scheme).with_first_step(*first_step);
                    let grid = solve_configured(solver, &short, delta_x, delta_t)?;
                    info!("{scheme} bootstrapped with {}", first_step.label());
                    Ok(LabelledGrid {
                        label: first_step.label(),
                        grid,
                    })
                })
                .collect::<HeatResult<Vec<_>>>()?;

            Ok(FirstStepComparison {
                scheme,
                analytical: analytical.clone(),
                runs,
            })
        })
        .collect()
}

fn solve_configured(
    mut solver: HeatSolver<'_>,
    parameters: &ProblemParameters,
    delta_x: f64,
    delta_t: f64,
) -> HeatResult<SolutionGrid> {
    solver.configure(parameters)?;
    solver.solve(delta_x, delta_t)
}
