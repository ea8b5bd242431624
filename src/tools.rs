//! Some helper functions

/// Number of variables associated to a vector of the given length.
///
/// Returns ```None``` if the length is not a power of two.
///
/// ```
/// # use boolmin::tools::variable_count;
/// assert_eq!(variable_count(1), Some(0));
/// assert_eq!(variable_count(16), Some(4));
/// assert_eq!(variable_count(12), None);
/// assert_eq!(variable_count(0), None);
/// ```
pub fn variable_count(len: usize) -> Option<usize> {
    match len.is_power_of_two() {
        true => Some(len.trailing_zeros() as usize),
        false => None,
    }
}

/// The reflected binary Gray code of an integer.
///
/// Consecutive codes differ by exactly one bit, including the wrap from the last code to the first
/// when enumerating all codes of a fixed width.
///
/// ```
/// # use boolmin::tools::gray_code;
/// let codes: Vec<usize> = (0..4).map(gray_code).collect();
/// assert_eq!(codes, vec![0, 1, 3, 2]);
/// ```
pub fn gray_code(i: usize) -> usize {
    i ^ (i >> 1)
}

/// Write the lowest bits of a value, most significant first.
pub fn to_binary(value: usize, width: usize) -> String {
    (0..width)
        .rev()
        .map(|b| if (value >> b) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Get the value of a variable in the assignment with the given index.
///
/// Variables are numbered from the most significant bit: with 3 variables,
/// the first one is given by the bit of weight 4.
pub fn bit_at(index: usize, position: usize, width: usize) -> bool {
    (index >> (width - 1 - position)) & 1 == 1
}

/// Bring a coordinate back on a torus of the given dimensions.
///
/// All wrapping in Karnaugh maps goes through this function.
pub fn wrap(row: usize, col: usize, rows: usize, cols: usize) -> (usize, usize) {
    (row % rows, col % cols)
}

/// All powers of two up to (and including) the given bound.
pub fn powers_of_two(bound: usize) -> impl DoubleEndedIterator<Item = usize> {
    (0..usize::BITS)
        .map(|e| 1usize << e)
        .take_while(move |p| *p <= bound)
        .collect::<Vec<_>>()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn gray_codes_are_adjacent() {
        for width in 1..5 {
            let count = 1 << width;
            for i in 0..count {
                let next = (i + 1) % count;
                let diff = gray_code(i) ^ gray_code(next);
                assert_eq!(diff.count_ones(), 1);
            }
        }
    }

    #[test]
    fn binary_labels() {
        assert_eq!(to_binary(2, 2), "10");
        assert_eq!(to_binary(1, 3), "001");
        assert_eq!(to_binary(0, 0), "");
    }

    #[test]
    fn bits_from_msb() {
        // 6 = 110
        assert!(bit_at(6, 0, 3));
        assert!(bit_at(6, 1, 3));
        assert!(!bit_at(6, 2, 3));
    }

    #[test]
    fn wrapping_and_sizes() {
        assert_eq!(wrap(5, 2, 4, 2), (1, 0));
        assert_eq!(powers_of_two(4).collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(powers_of_two(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(powers_of_two(4).rev().next(), Some(4));
    }
}
