//! Example: Slab heated from both faces - every scheme on the reference grid
//!
//! A 31 cm slab at 38 °C has both faces brought to 149 °C at t = 0. The four
//! finite-difference schemes are run on Δx = 0.05 cm, Δt = 0.01 h and compared
//! with the analytical series solution after 0.5 h.
//!
//! **Parameters**:
//! - D = 93 cm²/h (thermal diffusivity)
//! - L = 31 cm (slab width)
//! - T_in = 38 °C, T_sur = 149 °C
//! - Mesh ratio D·Δt/Δx² = 372
//!
//! Richardson is unconditionally unstable and is expected to blow up; the
//! other three stay bounded.
//!
//! Writes one CSV report per scheme to the system temporary directory.

use heat_rs::{
    output::{CsvConfig, CsvMetadata, ErrorNorms, export_report},
    physics::ProblemParameters,
    solver::{HeatSolver, SchemeKind, Solver},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Slab heating - Finite-difference scheme comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Physical parameters ======

    let diffusivity = 93.0; // [cm²/h]
    let width = 31.0; // [cm]
    let internal_temperature = 38.0; // [°C]
    let surface_temperature = 149.0; // [°C]
    let time_stop = 0.5; // [h]

    let parameters = ProblemParameters::from_values(
        diffusivity,
        width,
        internal_temperature,
        surface_temperature,
        time_stop,
    )?;

    println!("Slab:");
    println!("  D      : {} cm²/h", diffusivity);
    println!("  L      : {} cm", width);
    println!("  T_in   : {} °C", internal_temperature);
    println!("  T_sur  : {} °C", surface_temperature);
    println!("  t_stop : {} h\n", time_stop);

    // ====== Discretization ======

    let delta_x = 0.05;
    let delta_t = 0.01;
    println!("Grid:");
    println!("  Δx         : {} cm", delta_x);
    println!("  Δt         : {} h", delta_t);
    println!("  Mesh ratio : {:.1}\n", diffusivity * delta_t / (delta_x * delta_x));

    // ====== Analytical reference ======

    let analytical = HeatSolver::exact().solve_with(&parameters, delta_x, delta_t)?;
    let output_dir = std::env::temp_dir();

    // ====== Schemes ======

    println!("{:<16} {:>14} {:>14} {:>10}", "Scheme", "Uniform norm", "Two norm", "Time (ms)");
    println!("{:-<58}", "");

    for kind in SchemeKind::NUMERICAL {
        let solver = HeatSolver::new(kind);

        let start = Instant::now();
        let numerical = solver.solve_with(&parameters, delta_x, delta_t)?;
        let elapsed = start.elapsed().as_secs_f64() * 1e3;

        let norms = ErrorNorms::between(&analytical, &numerical)?;
        println!(
            "{:<16} {:>14.4e} {:>14.4e} {:>10.2}",
            solver.name(),
            norms.uniform,
            norms.two,
            elapsed
        );

        let metadata = CsvMetadata::for_scheme(solver.name()).with_parameters(&parameters);
        let csv = CsvConfig::default().with_metadata(metadata);
        export_report(output_dir.join(format!("{}.csv", solver.name())), &numerical, &analytical, &csv)?;
    }

    // ====== Centre temperature ======

    if let Some(last) = analytical.last_row() {
        let centre = last.len() / 2;
        println!(
            "\nAnalytical centre temperature at t = {} h: {:.3} °C",
            time_stop, last[centre]
        );
    }

    println!("\nReports written to {}", output_dir.display());
    Ok(())
}
