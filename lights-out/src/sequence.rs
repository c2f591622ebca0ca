use bitvec::prelude::*;

/// A bit vector backed by `usize` words with Least Significant Bit first ordering.
pub type Sequence = BitVec<usize, Lsb0>;

/// Two equally sized buffers for recurrences that read the previous step
/// and write the next one. `current` names the buffer holding the latest step.
#[derive(Debug, Clone)]
pub struct PingPong {
    buffers: [Sequence; 2],
    current: usize,
}

impl PingPong {
    pub fn new(len: usize) -> Self {
        Self {
            buffers: [Sequence::repeat(false, len), Sequence::repeat(false, len)],
            current: 0,
        }
    }

    pub fn current_mut(&mut self) -> &mut Sequence {
        &mut self.buffers[self.current]
    }

    /// Returns `(current, next)`. `next` still holds the step before `current`,
    /// which the recurrences fold into their update.
    pub fn split(&mut self) -> (&Sequence, &mut Sequence) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    pub fn into_current(self) -> Sequence {
        let [first, second] = self.buffers;
        if self.current == 0 {
            first
        } else {
            second
        }
    }
}
