//! Convergence tests for the finite-difference schemes
//!
//! These tests verify that the numerical grids approach the analytical one
//! when the grid is refined, and that the Richardson-extrapolated bootstrap
//! improves the second row of the three-level schemes.

use heat_rs::solver::{FirstStep, HeatSolver, Solver};

mod common;
use common::{last_row_error, reference_parameters, row_error_scaled, small_slab};

#[test]
fn test_laasonen_first_order_in_time() {
    // Laasonen is O(Δt): dividing Δt by 10 divides the error by about 10
    let parameters = reference_parameters();
    let mut errors = Vec::new();

    for delta_t in [0.01, 0.001] {
        let analytical = HeatSolver::exact().solve_with(&parameters, 0.05, delta_t).unwrap();
        let laasonen = HeatSolver::laasonen().solve_with(&parameters, 0.05, delta_t).unwrap();
        errors.push(last_row_error(&laasonen, &analytical));
    }

    let ratio = errors[0] / errors[1];
    println!("Laasonen errors {errors:?}, ratio {ratio}");
    assert!(errors[0] < 1.0);
    assert!(ratio > 8.0 && ratio < 12.0, "ratio {ratio} is not first order");
}

#[test]
fn test_crank_nicolson_error_decreases_with_time_step() {
    // With c = DΔt/2Δx² ≫ 1 the face discontinuity oscillates; shrinking Δt
    // damps it and the final row closes in on the analytical one.
    let parameters = reference_parameters();
    let mut errors = Vec::new();

    for delta_t in [0.01, 0.005, 0.0025, 0.001] {
        let analytical = HeatSolver::exact().solve_with(&parameters, 0.05, delta_t).unwrap();
        let crank_nicolson = HeatSolver::crank_nicolson()
            .solve_with(&parameters, 0.05, delta_t)
            .unwrap();
        errors.push(last_row_error(&crank_nicolson, &analytical));
    }

    println!("Crank-Nicolson errors {errors:?}");
    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "errors must decrease: {errors:?}");
    }
    assert!(errors[3] < 0.01, "finest error {}", errors[3]);
}

#[test]
fn test_dufort_frankel_converges_on_small_slab() {
    let parameters = small_slab(0.1);
    let mut errors = Vec::new();

    for (delta_x, delta_t) in [(0.1, 0.004), (0.05, 0.001), (0.025, 0.00025)] {
        let analytical = HeatSolver::exact().solve_with(&parameters, delta_x, delta_t).unwrap();
        let grid = HeatSolver::dufort_frankel()
            .solve_with(&parameters, delta_x, delta_t)
            .unwrap();
        errors.push(last_row_error(&grid, &analytical));
    }

    println!("Dufort-Frankel errors {errors:?}");
    assert!(errors[1] < errors[0] && errors[2] < errors[1], "errors: {errors:?}");
}

#[test]
fn test_richardson_extrapolation_changes_second_row() {
    let parameters = small_slab(0.01);
    let laasonen = HeatSolver::laasonen();

    let extrapolated = HeatSolver::dufort_frankel()
        .with_first_step(FirstStep::new(&laasonen, true))
        .solve_with(&parameters, 0.05, 0.00125)
        .unwrap();
    let plain = HeatSolver::dufort_frankel()
        .with_first_step(FirstStep::new(&laasonen, false))
        .solve_with(&parameters, 0.05, 0.00125)
        .unwrap();

    assert_eq!(extrapolated.row(0), plain.row(0));
    assert_ne!(extrapolated.row(1), plain.row(1));
}

#[test]
fn test_second_row_converges_under_refinement() {
    // Fixed mesh ratio DΔt/Δx² = 0.5: the error stays near the faces, so its
    // Δx-weighted two norm shrinks like sqrt(Δx).
    let parameters = small_slab(0.01);
    let grids = [(0.1, 0.005), (0.05, 0.00125), (0.025, 0.0003125)];

    for (delegate, extrapolate) in [
        (HeatSolver::laasonen(), true),
        (HeatSolver::laasonen(), false),
        (HeatSolver::crank_nicolson(), true),
        (HeatSolver::crank_nicolson(), false),
    ] {
        let first_step = FirstStep::new(&delegate, extrapolate);
        let errors: Vec<f64> = grids
            .iter()
            .map(|&(delta_x, delta_t)| {
                let analytical = HeatSolver::exact().solve_with(&parameters, delta_x, delta_t).unwrap();
                let grid = HeatSolver::richardson()
                    .with_first_step(first_step)
                    .solve_with(&parameters, delta_x, delta_t)
                    .unwrap();
                row_error_scaled(&grid, &analytical, 1)
            })
            .collect();

        println!("{}: {errors:?}", first_step.label());
        for pair in errors.windows(2) {
            assert!(pair[1] < 0.8 * pair[0], "{}: {errors:?}", first_step.label());
        }
    }
}

#[test]
fn test_extrapolated_bootstrap_is_more_accurate() {
    let parameters = small_slab(0.01);
    let analytical = HeatSolver::exact().solve_with(&parameters, 0.05, 0.00125).unwrap();

    for delegate in [HeatSolver::laasonen(), HeatSolver::crank_nicolson()] {
        let error = |extrapolate| {
            let grid = HeatSolver::dufort_frankel()
                .with_first_step(FirstStep::new(&delegate, extrapolate))
                .solve_with(&parameters, 0.05, 0.00125)
                .unwrap();
            row_error_scaled(&grid, &analytical, 1)
        };
        assert!(error(true) < error(false), "{}", delegate.name());
    }
}

#[test]
fn test_richardson_diverges() {
    let parameters = reference_parameters();
    let analytical = HeatSolver::exact().solve_with(&parameters, 0.05, 0.01).unwrap();
    let richardson = HeatSolver::richardson().solve_with(&parameters, 0.05, 0.01).unwrap();

    let error = last_row_error(&richardson, &analytical);
    assert!(!error.is_finite() || error > 1.0e3, "Richardson should blow up, error {error}");
}
