use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;
use log::info;

use solvex::algorithm::graphical::GraphicalSolver;
use solvex::algorithm::transportation::TransportationSolver;
use solvex::algorithm::two_phase::SimplexSolver;
use solvex::io::{import, Problem};

/// Solve linear programs and transportation problems described in a JSON file.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    info!("Reading problem file: {:?}", opts.problem_file);
    let problem = import(&opts.problem_file)
        .with_context(|| format!("Couldn't read {}", opts.problem_file.display()))?;

    let output = match &problem {
        Problem::Graphical(problem) => {
            let solution = GraphicalSolver::new().solve(problem)?;
            if opts.json {
                serde_json::to_string_pretty(&solution)?
            } else {
                solution.to_solution().to_string()
            }
        },
        Problem::Simplex(problem) => {
            let solution = SimplexSolver::new().solve(problem)?;
            if opts.json {
                serde_json::to_string_pretty(&solution)?
            } else {
                solution.to_string()
            }
        },
        Problem::Transportation { problem, strategy } => {
            let solution = TransportationSolver::new().solve(problem, *strategy)?;
            if opts.json {
                serde_json::to_string_pretty(&solution)?
            } else {
                solution.to_string()
            }
        },
    };

    println!("{}", output.trim_end());
    Ok(())
}
