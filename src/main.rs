//! heat-rs command line
//!
//! Runs the comparison studies on the reference slab (or a JSON study file)
//! and writes one CSV report per run:
//!
//! ```text
//! <output_dir>/fullSolutionForSeveralSolvers/<scheme>.csv
//! <output_dir>/LaasonenSeveralDeltat/Laasonen Deltat = <dt>.csv
//! <output_dir>/FirstStepSolvers/<scheme> with several first steps.csv
//! ```
//!
//! Log level is read from `RUST_LOG` (default `info`).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use heat_rs::config::StudyConfig;
use heat_rs::output::{
    CsvConfig, ErrorNorms, export_report, write_first_step_section, write_step_header,
};
use heat_rs::solver::SolutionGrid;
use heat_rs::study;

/// Finite-difference schemes for transient heat conduction in a slab
#[derive(Parser)]
#[command(name = "heat-rs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare finite-difference heat conduction schemes", long_about = None)]
struct Cli {
    /// JSON study file (defaults to the reference scenario)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving the CSV reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Which study to run
    #[arg(short, long, value_enum, default_value_t = Study::All)]
    study: Study,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Study {
    All,
    Schemes,
    Laasonen,
    FirstStep,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StudyConfig::from_file(path)
            .with_context(|| format!("loading study file {}", path.display()))?,
        None => StudyConfig::default(),
    };
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    if matches!(cli.study, Study::All | Study::Schemes) {
        run_scheme_comparison(&config)?;
    }
    if matches!(cli.study, Study::All | Study::Laasonen) {
        run_laasonen_study(&config)?;
    }
    if matches!(cli.study, Study::All | Study::FirstStep) {
        run_first_step_study(&config)?;
    }

    Ok(())
}

fn run_scheme_comparison(config: &StudyConfig) -> anyhow::Result<()> {
    let parameters = config.problem_parameters()?;
    let directory = prepare_directory(&config.output_dir, "fullSolutionForSeveralSolvers")?;

    let comparison = study::scheme_comparison(&parameters, config.grid.delta_x, config.grid.delta_t)
        .context("scheme comparison")?;

    let csv = CsvConfig::default();
    let analytical = &comparison.analytical;
    export(&directory.join("Analytical.csv"), analytical, analytical, &csv)?;

    for run in &comparison.runs {
        export(&directory.join(format!("{}.csv", run.label)), &run.grid, analytical, &csv)?;
        let norms = ErrorNorms::between(analytical, &run.grid)?;
        info!("{}: uniform norm {:.6e}, two norm {:.6e}", run.label, norms.uniform, norms.two);
    }
    Ok(())
}

fn run_laasonen_study(config: &StudyConfig) -> anyhow::Result<()> {
    let parameters = config.problem_parameters()?;
    let directory = prepare_directory(&config.output_dir, "LaasonenSeveralDeltat")?;

    let runs = study::laasonen_time_step_study(
        &parameters,
        config.grid.delta_x,
        &config.laasonen_delta_ts,
    )
    .context("Laasonen time-step study")?;

    let csv = CsvConfig::default();
    for run in &runs {
        let path = directory.join(format!("Laasonen Deltat = {}.csv", run.delta_t));
        export(&path, &run.numerical, &run.analytical, &csv)?;
    }
    Ok(())
}

fn run_first_step_study(config: &StudyConfig) -> anyhow::Result<()> {
    let parameters = config.problem_parameters()?;
    let directory = prepare_directory(&config.output_dir, "FirstStepSolvers")?;
    let (delta_x, delta_t) = (config.grid.delta_x, config.grid.delta_t);

    let comparisons =
        study::first_step_study(&parameters, delta_x, delta_t, config.first_step_horizon_steps)
            .context("first-step study")?;

    let csv = CsvConfig::default();
    for comparison in &comparisons {
        let path = directory.join(format!("{} with several first steps.csv", comparison.scheme));
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        write_step_header(&mut writer, delta_x, delta_t, &csv)?;
        for run in &comparison.runs {
            write_first_step_section(&mut writer, &run.grid, &comparison.analytical, &run.label, &csv)
                .with_context(|| format!("writing section {} to {}", run.label, path.display()))?;
        }
        writer.flush()?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn prepare_directory(output_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let directory = output_dir.join(name);
    fs::create_dir_all(&directory)
        .with_context(|| format!("creating directory {}", directory.display()))?;
    Ok(directory)
}

fn export(
    path: &Path,
    numerical: &SolutionGrid,
    analytical: &SolutionGrid,
    csv: &CsvConfig,
) -> anyhow::Result<()> {
    export_report(path, numerical, analytical, csv)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
