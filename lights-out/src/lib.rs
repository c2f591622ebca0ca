pub mod batch;
pub mod constant_mask;
pub mod dimensions;
pub mod error;
pub mod gf2;
pub mod grid;
pub mod pascal;
pub mod sequence;
pub mod system;

use std::time::Instant;

pub use dimensions::Dimensions;
pub use error::LightsOutError;
pub use grid::Grid;

use constant_mask::constant_mask;
use grid::reconstruct;
use pascal::pascal_rhombus;
use system::AugmentedSystem;

/// A press pattern for a board together with the rank deficiency of the
/// system it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub grid: Grid,
    /// Free unknowns left by elimination. When this is non-zero the grid is
    /// one of several candidates and may not solve the board at all.
    pub kernel_dimension: usize,
}

impl Solution {
    pub fn is_unique(&self) -> bool {
        self.kernel_dimension == 0
    }

    /// Replays the presses on a fully lit board.
    pub fn verify(&self) -> bool {
        self.grid.solves_board()
    }
}

/// Finds presses that turn off every light of a fully lit `rows x cols` board.
///
/// Only the first row is solved for, as an `N x N` system over GF(2); the
/// remaining rows follow from chasing the lights downward.
#[tracing::instrument]
pub fn solve(rows: usize, cols: usize) -> Result<Solution, LightsOutError> {
    let dims = Dimensions::new(rows, cols)?;

    let mut lap = Instant::now();
    let pascal = pascal_rhombus(rows, cols);
    let mask = constant_mask(rows, cols);
    tracing::debug!(elapsed = ?lap.elapsed(), "generated sequences");

    lap = Instant::now();
    let system = AugmentedSystem::assemble(&pascal, &mask, cols);
    tracing::debug!(elapsed = ?lap.elapsed(), "assembled system");

    lap = Instant::now();
    let reduction = system.reduce();
    tracing::debug!(elapsed = ?lap.elapsed(), "eliminated system");

    if reduction.kernel_dimension > 0 {
        tracing::warn!(
            kernel_dimension = reduction.kernel_dimension,
            %dims,
            "system is rank deficient, the solution may not be unique or valid"
        );
    }

    lap = Instant::now();
    let grid = reconstruct(&reduction.solution, dims);
    tracing::debug!(elapsed = ?lap.elapsed(), "reconstructed board");

    Ok(Solution {
        grid,
        kernel_dimension: reduction.kernel_dimension,
    })
}
