use crate::system::{AugmentedSystem, BitRow};

/// Progress of a single pivot index through forward elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotState {
    /// Looking at or below the pivot index for a row with the pivot bit set.
    SeekPivot,
    /// The pivot row sits at the pivot index; clear its bit from the rows below.
    Eliminate,
    /// `pivoted` is false when no row carried the pivot bit, which leaves the
    /// unknown free and adds one to the kernel dimension.
    Done { pivoted: bool },
}

/// Result of reducing an [`AugmentedSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Bit `i` is the right-hand side of reduced row `i`.
    pub solution: BitRow,
    /// Number of pivot indices without a pivot row.
    pub kernel_dimension: usize,
    /// The system in reduced row echelon form.
    pub rows: Vec<BitRow>,
}

/// Gaussian elimination over GF(2) on rows packed as bit vectors.
///
/// Pivot index `i` owns bit `unknowns - i`, so the pivots walk from the highest
/// coefficient bit down to bit 1 while bit 0 carries the right-hand side along.
#[derive(Debug, Clone)]
pub struct Eliminator {
    rows: Vec<BitRow>,
    unknowns: usize,
    kernel_dimension: usize,
}

impl Eliminator {
    pub fn new(system: AugmentedSystem) -> Self {
        Self {
            rows: system.rows,
            unknowns: system.unknowns,
            kernel_dimension: 0,
        }
    }

    fn pivot_bit(&self, index: usize) -> usize {
        self.unknowns - index
    }

    /// Applies one transition for pivot `index`. An index past the last
    /// unknown has no pivot bit and finishes unpivoted without touching the
    /// rows or the kernel dimension.
    pub fn step(&mut self, index: usize, state: PivotState) -> PivotState {
        if index >= self.unknowns {
            return PivotState::Done { pivoted: false };
        }
        let bit = self.pivot_bit(index);
        match state {
            PivotState::SeekPivot => {
                match (index..self.unknowns).find(|&candidate| self.rows[candidate][bit]) {
                    Some(found) => {
                        self.rows.swap(index, found);
                        PivotState::Eliminate
                    }
                    None => {
                        self.kernel_dimension += 1;
                        PivotState::Done { pivoted: false }
                    }
                }
            }
            PivotState::Eliminate => {
                let (head, tail) = self.rows.split_at_mut(index + 1);
                let pivot = &head[index];
                for row in tail.iter_mut().filter(|row| row[bit]) {
                    *row ^= pivot.as_bitslice();
                }
                PivotState::Done { pivoted: true }
            }
            done @ PivotState::Done { .. } => done,
        }
    }

    /// Runs every pivot index to `Done`, leaving the rows in row echelon form.
    pub fn forward(&mut self) {
        for index in 0..self.unknowns {
            let mut state = PivotState::SeekPivot;
            while !matches!(state, PivotState::Done { .. }) {
                state = self.step(index, state);
            }
            if index % 100 == 0 {
                tracing::trace!(index, unknowns = self.unknowns, "forward elimination");
            }
        }
    }

    /// Clears each pivot bit from the rows above it.
    ///
    /// Rows left without a pivot by [`forward`](Self::forward) are still added
    /// upward; that is a valid row operation, it just cannot clear the bit.
    pub fn backward(&mut self) {
        for index in (0..self.unknowns).rev() {
            let bit = self.pivot_bit(index);
            let (head, tail) = self.rows.split_at_mut(index);
            let pivot = &tail[0];
            for row in head.iter_mut().filter(|row| row[bit]) {
                *row ^= pivot.as_bitslice();
            }
            if index % 100 == 0 {
                tracing::trace!(index, unknowns = self.unknowns, "back substitution");
            }
        }
    }

    pub fn rows(&self) -> &[BitRow] {
        &self.rows
    }

    pub fn kernel_dimension(&self) -> usize {
        self.kernel_dimension
    }

    pub fn finish(self) -> Reduction {
        let solution = self.rows.iter().map(|row| row[0]).collect();
        Reduction {
            solution,
            kernel_dimension: self.kernel_dimension,
            rows: self.rows,
        }
    }
}

impl AugmentedSystem {
    /// Solves the system. A non-zero kernel dimension means some unknowns were
    /// left free; the solution is then one candidate and is not checked against
    /// the equations that became dependent.
    #[tracing::instrument(level = "debug", skip(self), fields(unknowns = self.unknowns))]
    pub fn reduce(self) -> Reduction {
        let mut eliminator = Eliminator::new(self);
        eliminator.forward();
        eliminator.backward();
        eliminator.finish()
    }
}
