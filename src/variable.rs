//! Variable names and default naming policies
//!
//! Variables are identified by a single letter. When a truth vector is given without
//! variables, the names are synthesized by a [NamingPolicy]. The policies provided by
//! this crate pick names at the end of the alphabet, around ```w, x, y, z```.

use crate::BoolminError;

use std::collections::HashSet;

/// Provide the names of the variables of a function with a given number of variables.
///
/// Any closure mapping a number of variables to a list of names can be used as a policy.
///
/// ```
/// use boolmin::{parse_with, Node};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let naming = |n: usize| ('a'..='z').take(n).collect::<Vec<_>>();
/// let node = parse_with("0110", &naming)?;
/// if let Node::Vector(v) = node {
///     assert_eq!(v.variables(), &['a', 'b']);
/// }
/// # Ok(())
/// # }
/// ```
pub trait NamingPolicy {
    /// Select ```count``` distinct names
    fn names(&self, count: usize) -> Result<Vec<char>, BoolminError>;
}

/// Default names: start at ```x``` for up to two variables, at ```w``` for up to four,
/// then extend backwards from ```z```.
///
/// | variables | names        |
/// |-----------|--------------|
/// | 1         | x            |
/// | 2         | x, y         |
/// | 3         | w, x, y      |
/// | 4         | w, x, y, z   |
/// | 5         | v, w, x, y, z|
#[derive(Clone, Copy, Debug, Default)]
pub struct ReservedNaming;

/// Names used for canonical forms: the first letters of ```w, x, y, z```,
/// then the same as [ReservedNaming].
#[derive(Clone, Copy, Debug, Default)]
pub struct LeadingNaming;

pub static DEFAULT_NAMING: ReservedNaming = ReservedNaming;
pub static CANONICAL_NAMING: LeadingNaming = LeadingNaming;

const ALPHABET_SIZE: usize = 26;

fn names_from(first: char, count: usize) -> Vec<char> {
    (first..='z').take(count).collect()
}

fn tail_of_alphabet(count: usize) -> Result<Vec<char>, BoolminError> {
    if count > ALPHABET_SIZE {
        return Err(BoolminError::TooManyVariables(count));
    }
    let first = (b'z' - (count as u8 - 1)) as char;
    Ok(names_from(first, count))
}

impl NamingPolicy for ReservedNaming {
    fn names(&self, count: usize) -> Result<Vec<char>, BoolminError> {
        match count {
            0..=2 => Ok(names_from('x', count)),
            3 | 4 => Ok(names_from('w', count)),
            _ => tail_of_alphabet(count),
        }
    }
}

impl NamingPolicy for LeadingNaming {
    fn names(&self, count: usize) -> Result<Vec<char>, BoolminError> {
        match count {
            0..=4 => Ok(names_from('w', count)),
            _ => tail_of_alphabet(count),
        }
    }
}

impl<F> NamingPolicy for F
where
    F: Fn(usize) -> Vec<char>,
{
    fn names(&self, count: usize) -> Result<Vec<char>, BoolminError> {
        let names = self(count);
        if names.len() != count {
            return Err(BoolminError::VariableCount {
                expected: count,
                found: names.len(),
            });
        }
        check_variables(&names)?;
        Ok(names)
    }
}

/// Check that a list of variables contains only distinct letters
pub fn check_variables(variables: &[char]) -> Result<(), BoolminError> {
    let mut seen = HashSet::new();
    for v in variables {
        if !v.is_ascii_alphabetic() {
            return Err(BoolminError::UnexpectedSymbol(*v, 0));
        }
        if !seen.insert(*v) {
            return Err(BoolminError::DuplicateVariable(*v));
        }
    }
    Ok(())
}

/// Write a list of variables as a compact label, for example ```wx```
pub(crate) fn label(variables: &[char]) -> String {
    variables.iter().collect()
}
