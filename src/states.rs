use crate::tools::bit_at;
use crate::BoolminError;

use std::fmt;

/// An assignment of Boolean values to an ordered list of variables.
///
/// The state is identified by its index in the truth table: the binary digits of the index,
/// read from the most significant one, give the value of the variables in order.
/// For example, with variables ```x, y, z```, the state ```5``` (101) sets ```x``` and ```z```.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State<'a> {
    variables: &'a [char],
    index: usize,
}

impl<'a> State<'a> {
    pub fn new(variables: &'a [char], index: usize) -> Self {
        Self { variables, index }
    }

    /// Index of this state in the truth table
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn variables(&self) -> &'a [char] {
        self.variables
    }

    /// Value of a variable, if it is defined in this state
    pub fn value(&self, name: char) -> Option<bool> {
        self.variables
            .iter()
            .position(|v| *v == name)
            .map(|pos| bit_at(self.index, pos, self.variables.len()))
    }

    /// Value of a variable, failing if it is not defined in this state
    pub fn try_value(&self, name: char) -> Result<bool, BoolminError> {
        self.value(name).ok_or(BoolminError::NoSuchVariable(name))
    }

    /// Iterate over pairs of variable and value
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + 'a {
        let width = self.variables.len();
        let index = self.index;
        self.variables
            .iter()
            .enumerate()
            .map(move |(pos, v)| (*v, bit_at(index, pos, width)))
    }
}

impl fmt::Display for State<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (_, b) in self.iter() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn values() -> Result<(), BoolminError> {
        let vars = ['x', 'y', 'z'];
        let state = State::new(&vars, 5);
        assert_eq!(state.value('x'), Some(true));
        assert_eq!(state.value('y'), Some(false));
        assert_eq!(state.try_value('z')?, true);
        assert!(state.try_value('a').is_err());
        assert_eq!(format!("{}", state), "101");
        Ok(())
    }
}
