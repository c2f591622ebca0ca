use crate::sequence::{PingPong, Sequence};

/// Presses forced into row `rows + 1` by the all-on start when the first row
/// is left alone, as `cols + 2` bits with a clear border at both ends.
///
/// Boards are mirror symmetric, so only the left half is computed and each
/// entry is copied to its mirror `cols + 1 - j`.
#[tracing::instrument(level = "debug")]
pub fn constant_mask(rows: usize, cols: usize) -> Sequence {
    let mut buffers = PingPong::new(cols + 2);
    let half = (cols + 1) / 2;

    for step in 2..=rows + 1 {
        let (current, next) = buffers.split();
        for j in 1..=half {
            let value = current[j] ^ current[j - 1] ^ current[j + 1] ^ next[j] ^ true;
            next.set(j, value);
            next.set(cols + 1 - j, value);
        }
        if step % 100 == 0 {
            tracing::trace!(step, rows, "constant mask progress");
        }
        buffers.swap();
    }

    buffers.into_current()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn bits(pattern: &str) -> Sequence {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[rstest]
    #[case(1, 3, "01110")]
    #[case(3, 3, "01010")]
    #[case(5, 5, "0100010")]
    #[case(6, 3, "00000")]
    #[case(8, 4, "011110")]
    fn known_masks(#[case] rows: usize, #[case] cols: usize, #[case] expected: &str) {
        assert_eq!(constant_mask(rows, cols), bits(expected));
    }

    #[test]
    fn mask_is_a_palindrome() {
        for rows in 1..=30 {
            for cols in 1..=30 {
                let mask = constant_mask(rows, cols);
                assert_eq!(mask.len(), cols + 2);
                for j in 0..=cols + 1 {
                    assert_eq!(mask[j], mask[cols + 1 - j], "{rows}x{cols} at {j}");
                }
            }
        }
    }

    #[test]
    fn border_bits_stay_clear() {
        for cols in 1..=12 {
            let mask = constant_mask(17, cols);
            assert!(!mask[0]);
            assert!(!mask[cols + 1]);
        }
    }

    #[test]
    fn single_row_needs_every_column() {
        assert_eq!(constant_mask(1, 6), bits("01111110"));
    }

    #[test]
    fn repeated_calls_agree() {
        assert_eq!(constant_mask(31, 12), constant_mask(31, 12));
    }
}
