//! The command line driver: reads parameter files, solves them in parallel, prints the reports
//! and draws the potentials

mod configuration;
mod telemetry;

pub(crate) use configuration::Configuration;

use crate::{
    error::PfdError,
    parameters::PfdParameters,
    plot::{default_plot_path, PlotData},
    potential::JoinedPotential,
    result::SolveResult,
    solver::{PfdSolver, PfdSolverBuilder},
};
use clap::{ArgEnum, Parser};
use color_eyre::eyre::eyre;
use configuration::RootMethod;
use pfd_roots::{Bisection, Brent, RootFinder};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// Parameter files, TOML or YAML
    #[clap(required = true)]
    file_paths: Vec<PathBuf>,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
    /// Only report failures to locate xstar
    #[clap(short, long)]
    quiet: bool,
    /// Do not draw or write the sampled potentials
    #[clap(long)]
    no_plot: bool,
    /// Reject non-positive densities, dielectric constants, saturation parameters and temperatures
    #[clap(long)]
    strict: bool,
    /// Write figures and samples here instead of next to each parameter file
    #[clap(long)]
    plot_directory: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", level)
    }
}

/// A parameter file which was read and solved
struct Solved {
    parameters: PfdParameters,
    result: SolveResult,
}

/// Run the command line application
///
/// Fails when any parameter file could not be read, solved or written out. Files which succeed are
/// reported regardless.
pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = App::parse();
    let config = Configuration::build()?;

    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level, &config.telemetry);
    telemetry::init_subscriber(subscriber);

    let root = &config.root;
    let outcomes = match root.method {
        RootMethod::Brent => solve_files(
            &PfdSolverBuilder::new()
                .with_root_finder(Brent::new(root.maximum_iterations, root.residual_tolerance))
                .with_tolerance(root.tolerance)
                .with_minimum_upper_bound(root.minimum_upper_bound)
                .build(),
            &cli.file_paths,
            cli.strict,
        ),
        RootMethod::Bisection => solve_files(
            &PfdSolverBuilder::new()
                .with_root_finder(Bisection::new(root.maximum_iterations, root.residual_tolerance))
                .with_tolerance(root.tolerance)
                .with_minimum_upper_bound(root.minimum_upper_bound)
                .build(),
            &cli.file_paths,
            cli.strict,
        ),
    };

    let term = console::Term::stdout();
    let print_values = config.report.print_values && !cli.quiet;
    let mut failures = 0;
    for (path, outcome) in cli.file_paths.iter().zip(outcomes) {
        if cli.file_paths.len() > 1 {
            term.write_line(&format!("{}", console::style(path.display()).bold()))?;
        }
        match outcome.and_then(|solved| {
            report(&term, &solved.result, print_values)?;
            if !cli.no_plot {
                write_plot(path, cli.plot_directory.as_deref(), &solved, &config)?;
            }
            Ok(())
        }) {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                term.write_line(&format!("{:?}", miette::Report::new(e)))?;
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(eyre!(
            "{} of {} parameter files could not be processed",
            failures,
            cli.file_paths.len()
        ));
    }
    Ok(())
}

/// Solve every file, in parallel, keeping the input order
fn solve_files<Finder>(
    solver: &PfdSolver<Finder>,
    paths: &[PathBuf],
    strict: bool,
) -> Vec<Result<Solved, PfdError>>
where
    Finder: RootFinder<f64> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            tracing::info!("Solving {}", path.display());
            let parameters = PfdParameters::from_file(path)?;
            if strict {
                parameters.validate()?;
            }
            let result = solver.solve(&parameters);
            if !result.is_finite() {
                tracing::warn!("{} produced non-finite values", path.display());
            }
            Ok(Solved { parameters, result })
        })
        .collect()
}

fn report(term: &console::Term, result: &SolveResult, print_values: bool) -> Result<(), PfdError> {
    for line in result.report_lines(print_values) {
        term.write_line(&line)?;
    }
    Ok(())
}

fn write_plot(
    input: &Path,
    directory: Option<&Path>,
    solved: &Solved,
    config: &Configuration,
) -> Result<(), PfdError> {
    let potential = JoinedPotential::new(&solved.parameters);
    let data = PlotData::sample(&potential, &solved.result, &config.plot);

    let figure = default_plot_path(input, directory, "svg");
    data.render_svg(&figure, &config.plot)?;
    let samples = default_plot_path(input, directory, "csv");
    data.write_csv(&samples)?;
    tracing::info!(
        "Wrote the potential to {} and {}",
        figure.display(),
        samples.display()
    );
    Ok(())
}
