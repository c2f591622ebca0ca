use bitvec::prelude::*;

use crate::sequence::Sequence;

/// One augmented equation over GF(2): bit 0 is the right-hand side and bit `j`
/// is the coefficient of unknown `x_j`.
pub type BitRow = BitVec<usize, Lsb0>;

/// The reduced `N x N` system whose unknowns are the presses of the first row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedSystem {
    pub(crate) rows: Vec<BitRow>,
    pub(crate) unknowns: usize,
}

impl AugmentedSystem {
    /// Builds one equation per column of the board. Equation `target` states
    /// that column `target` of row `rows + 1` must need no press, given the
    /// parities of [`pascal_rhombus`] and the forcing of [`constant_mask`].
    ///
    /// [`pascal_rhombus`]: crate::pascal::pascal_rhombus
    /// [`constant_mask`]: crate::constant_mask::constant_mask
    #[tracing::instrument(level = "debug", skip_all, fields(cols = cols))]
    pub fn assemble(pascal: &Sequence, mask: &Sequence, cols: usize) -> Self {
        debug_assert_eq!(pascal.len(), 2 * cols + 1);
        debug_assert_eq!(mask.len(), cols + 2);

        let mirror = 2 * cols + 2;
        let rows = (1..=cols)
            .map(|target| {
                let mut row = BitRow::repeat(false, cols + 1);
                for source in 1..=cols {
                    let coefficient = pascal[target.abs_diff(source)]
                        ^ pascal[mirror - source - target]
                        ^ pascal[source + target];
                    row.set(source, coefficient);
                }
                row.set(0, mask[target]);
                row
            })
            .collect();

        Self {
            rows,
            unknowns: cols,
        }
    }

    /// Wraps hand-built equations. Every row needs at least `rows.len() + 1` bits.
    pub fn from_rows(rows: Vec<BitRow>) -> Self {
        let unknowns = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() > unknowns));
        Self { rows, unknowns }
    }

    pub fn rows(&self) -> &[BitRow] {
        &self.rows
    }

    pub fn unknowns(&self) -> usize {
        self.unknowns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::{
        constant_mask::constant_mask,
        pascal::{pascal_rhombus, unbounded_rhombus},
    };

    fn row(value: u64, width: usize) -> BitRow {
        (0..width).map(|bit| (value >> bit) & 1 == 1).collect()
    }

    fn system_for(rows: usize, cols: usize) -> AugmentedSystem {
        AugmentedSystem::assemble(
            &pascal_rhombus(rows, cols),
            &constant_mask(rows, cols),
            cols,
        )
    }

    #[rstest]
    #[case(1, 3, &[0b111, 0b1111, 0b1101])]
    #[case(2, 2, &[0b11, 0b101])]
    #[case(3, 3, &[0b1101, 0b1110, 0b111])]
    #[case(4, 3, &[0b1001, 0b101, 0b11])]
    #[case(5, 5, &[0b101101, 0b1110, 0b110110, 0b111000, 0b11011])]
    #[case(8, 4, &[0b11, 0b101, 0b1001, 0b10001])]
    fn known_systems(#[case] rows: usize, #[case] cols: usize, #[case] expected: &[u64]) {
        let system = system_for(rows, cols);
        let expected: Vec<BitRow> = expected.iter().map(|&v| row(v, cols + 1)).collect();
        assert_eq!(system.unknowns(), cols);
        assert_eq!(system.rows(), expected.as_slice());
    }

    #[test]
    fn single_row_board_is_tridiagonal() {
        let cols = 6;
        let system = system_for(1, cols);
        for (index, equation) in system.rows().iter().enumerate() {
            let target = index + 1;
            assert!(equation[0], "every light starts on");
            for source in 1..=cols {
                assert_eq!(equation[source], target.abs_diff(source) <= 1);
            }
        }
    }

    #[test]
    fn coefficients_are_symmetric() {
        let cols = 9;
        let system = system_for(14, cols);
        for target in 1..=cols {
            for source in 1..=cols {
                assert_eq!(
                    system.rows()[target - 1][source],
                    system.rows()[source - 1][target]
                );
            }
        }
    }

    #[test]
    fn folding_leaves_the_system_unchanged_up_to_one_row_past_square() {
        for cols in 1..=29 {
            for rows in 1..=cols + 1 {
                let mask = constant_mask(rows, cols);
                assert_eq!(
                    AugmentedSystem::assemble(&pascal_rhombus(rows, cols), &mask, cols),
                    AugmentedSystem::assemble(&unbounded_rhombus(rows, cols), &mask, cols),
                    "{rows}x{cols}"
                );
            }
        }
    }

    #[test]
    fn singular_board_assembles_to_zero() {
        let system = system_for(3, 2);
        assert!(system.rows().iter().all(|equation| equation.not_any()));
    }
}
