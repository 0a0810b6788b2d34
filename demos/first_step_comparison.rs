//! Example: Bootstrapping the three-level schemes
//!
//! Dufort-Frankel and Richardson need two known rows before they can march.
//! The second row comes from a one-step solver, optionally improved by
//! Richardson extrapolation: a second run on (Δx/2, Δt/4) is combined as
//! `(4·fine - coarse) / 3`.
//!
//! This example runs both schemes with every bootstrap variant over five
//! steps of the reference slab and prints the error of the second row and
//! of the last row against the analytical solution.

use heat_rs::{
    output::{ErrorNorms, error_grid, two_norm_row, uniform_norm_row},
    physics::ProblemParameters,
    study,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Three-level schemes - First step comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Reference slab, short horizon ======

    let parameters = ProblemParameters::from_values(93.0, 31.0, 38.0, 149.0, 0.5)?;
    let delta_x = 0.05;
    let delta_t = 0.01;
    let horizon_steps = 5;

    println!("Grid: Δx = {} cm, Δt = {} h, {} steps\n", delta_x, delta_t, horizon_steps);

    let comparisons = study::first_step_study(&parameters, delta_x, delta_t, horizon_steps)?;

    for comparison in &comparisons {
        println!("{}", comparison.scheme);
        println!(
            "  {:<24} {:>14} {:>14} {:>14}",
            "First step", "Row 1 uniform", "Row 1 two", "Grid uniform"
        );
        println!("  {:-<68}", "");

        for run in &comparison.runs {
            let errors = error_grid(&comparison.analytical, &run.grid)?;
            let overall = ErrorNorms::of(&errors);
            println!(
                "  {:<24} {:>14.4e} {:>14.4e} {:>14.4e}",
                run.label,
                uniform_norm_row(&errors, 1),
                two_norm_row(&errors, 1),
                overall.uniform
            );
        }
        println!();
    }

    Ok(())
}
