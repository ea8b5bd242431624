use crate::tools::bit_at;
use crate::BoolminError;

use bit_set::BitSet;
use std::fmt;
use std::str::FromStr;

/// A subspace of fixed width, defined by sets of positive and negative positions, the others are free.
///
/// They are represented as a pair of [BitSet] storing the positions fixed at ```1``` and at ```0```.
/// Position ```0``` is the first (most significant) variable.
///
/// A Pattern can be parsed from strings where the character defines the value of each position:
/// ```-``` for free, ```0``` for inactive, ```1``` for active.
/// To make the strings easier to read, spaces and single quotes are ignored around and inside the string.
/// For example "0-10", "  0-10", and "0-1 0" are equivalent.
///
/// ```
/// use boolmin::Pattern;
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let a: Pattern = "001".parse()?;
/// let b: Pattern = "011".parse()?;
/// let c = a.combine(&b).unwrap();
/// assert_eq!(c.to_string(), "0-1");
/// assert!(c.contains_index(3));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Pattern {
    width: usize,
    positive: BitSet,
    negative: BitSet,
}

impl Pattern {
    /// Create a pattern restricted to a single state, given by its index in the truth table.
    ///
    /// Only the lowest ```width``` bits of the index are used.
    pub fn from_index(index: usize, width: usize) -> Self {
        let mut p = Pattern {
            width,
            ..Default::default()
        };
        for pos in 0..width {
            p.set(pos, bit_at(index, pos, width));
        }
        p
    }

    /// Number of variables covered by this pattern, free or not
    pub fn width(&self) -> usize {
        self.width
    }

    /// Fix a position to a specific value.
    pub fn set(&mut self, pos: usize, value: bool) {
        if value {
            self.negative.remove(pos);
            self.positive.insert(pos);
        } else {
            self.positive.remove(pos);
            self.negative.insert(pos);
        }
    }

    /// Remove all constraints on a given position.
    pub fn free_position(&mut self, pos: usize) {
        self.positive.remove(pos);
        self.negative.remove(pos);
    }

    /// The value of a position, ```None``` if it is free
    pub fn get(&self, pos: usize) -> Option<bool> {
        if self.positive.contains(pos) {
            Some(true)
        } else if self.negative.contains(pos) {
            Some(false)
        } else {
            None
        }
    }

    /// Number of positions fixed at ```1```
    pub fn ones(&self) -> usize {
        self.positive.len()
    }

    /// Test if no position is fixed
    pub fn is_free_pattern(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Iterate over the fixed positions and their value, in increasing order
    pub fn iter_fixed_values(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.width).filter_map(move |pos| self.get(pos).map(|b| (pos, b)))
    }

    /// Merge two patterns differing on a single fixed position.
    ///
    /// Both patterns must have the same free positions. If their fixed positions conflict on exactly
    /// one position, this position becomes free in the result. Each of the initial patterns covers
    /// half of the new pattern.
    pub fn combine(&self, other: &Self) -> Option<Self> {
        if self.width != other.width {
            return None;
        }

        let mut fixed = self.positive.clone();
        fixed.union_with(&self.negative);
        let mut other_fixed = other.positive.clone();
        other_fixed.union_with(&other.negative);
        if fixed != other_fixed {
            return None;
        }

        let mut conflicts = self.positive.symmetric_difference(&other.positive);
        if let Some(pos) = conflicts.next() {
            if conflicts.next().is_none() {
                let mut result = self.clone();
                result.free_position(pos);
                return Some(result);
            }
        }
        None
    }

    /// Check if the state with the given index is contained in this pattern
    pub fn contains_index(&self, index: usize) -> bool {
        self.iter_fixed_values()
            .all(|(pos, b)| bit_at(index, pos, self.width) == b)
    }
}

impl FromStr for Pattern {
    type Err = BoolminError;

    fn from_str(descr: &str) -> Result<Pattern, BoolminError> {
        let mut p = Pattern::default();
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => continue, // skip spacing and ` for formatting
                '-' => (),
                '0' => p.set(p.width, false),
                '1' => p.set(p.width, true),
                _ => return Err(BoolminError::InvalidPattern(descr.to_string())),
            };
            p.width += 1;
        }
        Ok(p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for pos in 0..self.width {
            let c = match self.get(pos) {
                None => '-',
                Some(true) => '1',
                Some(false) => '0',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::pattern::*;

    #[test]
    fn construct_and_display() -> Result<(), BoolminError> {
        let p = Pattern::from_str("-0--01-11--0-1---")?;
        assert_eq!(p.width(), 17);
        assert_eq!(format!("{}", p), "-0--01-11--0-1---");

        let p = Pattern::from_index(5, 4);
        assert_eq!(format!("{}", p), "0101");
        assert_eq!(p.ones(), 2);

        assert!(Pattern::from_str("01x").is_err());
        Ok(())
    }

    #[test]
    fn combine() -> Result<(), BoolminError> {
        let p = Pattern::from_str("1010")?;
        let t = Pattern::from_str("1000")?;
        assert_eq!(format!("{}", p.combine(&t).unwrap()), "10-0");

        // two conflicts
        let t2 = Pattern::from_str("0000")?;
        assert!(p.combine(&t2).is_none());

        // different free positions
        let a = Pattern::from_str("00-")?;
        let b = Pattern::from_str("-01")?;
        assert!(a.combine(&b).is_none());

        // identical patterns do not combine
        assert!(p.combine(&p).is_none());
        Ok(())
    }

    #[test]
    fn contained() -> Result<(), BoolminError> {
        let p = Pattern::from_str("1--0")?;
        assert!(p.contains_index(0b1000));
        assert!(p.contains_index(0b1110));
        assert!(!p.contains_index(0b1001));
        Ok(())
    }
}
