use indicatif::ParallelProgressIterator;
use miette::*;
use rayon::prelude::*;

use crate::{dimensions::parse_sizes, solve, Dimensions, LightsOutError, Solution};

fn report(dims: Dimensions, solution: &Solution) -> String {
    let verdict = if solution.verify() {
        "verified"
    } else {
        "NOT a solution"
    };
    format!(
        "{dims} kernel dimension {} ({verdict})\n{}",
        solution.kernel_dimension, solution.grid
    )
}

/// Solves every board size listed in `input` and renders the press patterns,
/// `#` for a press and `.` otherwise, in input order.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let sizes = parse_sizes(input)?;

    let reports = sizes
        .par_iter()
        .progress_count(sizes.len() as u64)
        .map(|&dims| solve(dims.rows(), dims.cols()).map(|solution| report(dims, &solution)))
        .collect::<Result<Vec<_>, LightsOutError>>()?;

    Ok(reports.join("\n\n"))
}
