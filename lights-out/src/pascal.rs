use crate::sequence::{PingPong, Sequence};

/// Pascal's rhombus mod 2 (https://oeis.org/A059318) after `rows` steps, as
/// `2 * cols + 1` parities indexed by column distance.
///
/// Column `cols + 1` is the dark border of the board and is never written, so
/// every reflection of the rhombus off either border is folded into the first
/// `cols + 1` entries. The remaining entries stay clear, which keeps the
/// three-term lookup in [`AugmentedSystem::assemble`] exact for boards taller
/// than they are wide.
///
/// [`AugmentedSystem::assemble`]: crate::system::AugmentedSystem::assemble
#[tracing::instrument(level = "debug")]
pub fn pascal_rhombus(rows: usize, cols: usize) -> Sequence {
    let len = 2 * cols + 1;
    if cols == 0 {
        return Sequence::repeat(true, len);
    }

    let mut buffers = PingPong::new(len);
    buffers.current_mut().set(0, true);

    for step in 2..=rows + 1 {
        let (current, next) = buffers.split();
        // Nothing reaches past column `step - 1` yet
        for j in 0..step.min(cols + 1) {
            let value = current[j] ^ current[j.abs_diff(1)] ^ current[j + 1] ^ next[j];
            next.set(j, value);
        }
        if step % 100 == 0 {
            tracing::trace!(step, rows, "pascal rhombus progress");
        }
        buffers.swap();
    }

    buffers.into_current()
}

/// The same recurrence without the border, bounded only by `2 * cols`.
#[cfg(test)]
pub(crate) fn unbounded_rhombus(rows: usize, cols: usize) -> Sequence {
    let n = 2 * cols;
    let mut current = vec![false; n + 1];
    let mut next = vec![false; n + 1];
    current[0] = true;
    for step in 2..=rows + 1 {
        for j in 0..step.min(n) {
            let right = current.get(j + 1).copied().unwrap_or(false);
            next[j] ^= current[j] ^ current[j.abs_diff(1)] ^ right;
        }
        std::mem::swap(&mut current, &mut next);
    }
    current.into_iter().collect()
}
