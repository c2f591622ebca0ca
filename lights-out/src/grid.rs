use std::fmt;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::dimensions::Dimensions;

/// Row-major board of booleans. For a solution `true` means "press this cell";
/// for [`Grid::simulate`] it means "this light is on".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (`row`, `col`), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Lights left on after pressing every `true` cell of `self` on a board
    /// that starts fully lit. A press toggles the cell and its orthogonal
    /// neighbours; there is no wraparound.
    pub fn simulate(&self) -> Grid {
        let mut lights = vec![true; self.cells.len()];
        for (row, col) in (0..self.rows).cartesian_product(0..self.cols) {
            if self.get(row, col) != Some(true) {
                continue;
            }
            lights[row * self.cols + col] ^= true;
            if row > 0 {
                lights[(row - 1) * self.cols + col] ^= true;
            }
            if row + 1 < self.rows {
                lights[(row + 1) * self.cols + col] ^= true;
            }
            if col > 0 {
                lights[row * self.cols + col - 1] ^= true;
            }
            if col + 1 < self.cols {
                lights[row * self.cols + col + 1] ^= true;
            }
        }
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: lights,
        }
    }

    /// True when pressing `self` turns every light off.
    pub fn solves_board(&self) -> bool {
        self.simulate().cells.iter().all(|&lit| !lit)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .iter_rows()
            .map(|row| {
                row.iter()
                    .map(|&press| if press { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n");
        f.write_str(&rendered)
    }
}

/// Expands the first-row presses into the whole board.
///
/// Bit `j - 1` of `first_row` presses column `j` of row 1. Each later row
/// presses exactly the cells the row above left lit, which is the row above,
/// its two horizontal neighbours, the row two above, and the initial light.
/// The board is worked on with a one cell dark border on every side.
#[tracing::instrument(level = "debug", skip(first_row))]
pub fn reconstruct(first_row: &BitSlice<usize, Lsb0>, dims: Dimensions) -> Grid {
    let (rows, cols) = (dims.rows(), dims.cols());
    let width = cols + 2;
    let mut padded = vec![false; (rows + 2) * width];

    for col in 1..=cols {
        padded[width + col] = first_row[col - 1];
    }

    for row in 2..=rows {
        for col in 1..=cols {
            let above = (row - 1) * width + col;
            padded[row * width + col] = padded[above]
                ^ padded[above - 1]
                ^ padded[above + 1]
                ^ padded[above - width]
                ^ true;
        }
        if row % 100 == 0 {
            tracing::trace!(row, rows, "reconstruction progress");
        }
    }

    let cells = padded
        .chunks_exact(width)
        .skip(1)
        .take(rows)
        .flat_map(|row| row[1..=cols].iter().copied())
        .collect();

    Grid { rows, cols, cells }
}
