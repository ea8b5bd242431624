//! Truth vectors and the evaluation of expressions into truth tables.

use crate::rules::push_variable;
use crate::tools::variable_count;
use crate::variable::check_variables;
use crate::*;

use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// Maximal number of variables enumerated when evaluating an expression
pub const MAX_VARIABLES: usize = 20;

/// Value of a Boolean function for all assignments of its variables.
///
/// The value at index ```i``` is obtained for the assignment given by the binary digits of ```i```,
/// the most significant digit giving the value of the first variable (see [State]).
/// The length of a truth vector is always a power of two.
///
/// The list of variables may be empty if the vector was parsed without names: the names can then be
/// provided by a [NamingPolicy].
///
/// ```
/// use boolmin::TruthVector;
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let xor: TruthVector = "0110".parse()?;
/// assert_eq!(xor.variable_count(), 2);
/// assert_eq!(xor.indices_of(true), vec![1, 2]);
///
/// assert!("011".parse::<TruthVector>().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TruthVector {
    values: Vec<bool>,
    variables: Vec<char>,
}

impl TruthVector {
    /// Create an unnamed truth vector
    pub fn new(values: Vec<bool>) -> Result<Self, BoolminError> {
        if variable_count(values.len()).is_none() {
            return Err(BoolminError::VectorLength(values.len()));
        }
        Ok(Self {
            values,
            variables: vec![],
        })
    }

    /// A vector of length one, for functions without variables
    pub fn constant(value: bool) -> Self {
        Self {
            values: vec![value],
            variables: vec![],
        }
    }

    /// Associate names to the variables of this vector.
    ///
    /// The number of names must match the length of the vector.
    pub fn with_variables(mut self, variables: Vec<char>) -> Result<Self, BoolminError> {
        if variables.len() != self.variable_count() {
            return Err(BoolminError::VariableCount {
                expected: self.variable_count(),
                found: variables.len(),
            });
        }
        check_variables(&variables)?;
        self.variables = variables;
        Ok(self)
    }

    /// Fill the list of variables using the given policy if it is empty
    pub fn ensure_variables(self, naming: &dyn NamingPolicy) -> Result<Self, BoolminError> {
        if self.has_variables() {
            return Ok(self);
        }
        let names = naming.names(self.variable_count())?;
        self.with_variables(names)
    }

    /// The variables of this vector, or names provided by the policy if they are not defined
    pub fn variables_or(&self, naming: &dyn NamingPolicy) -> Result<Vec<char>, BoolminError> {
        match self.has_variables() {
            true => Ok(self.variables.clone()),
            false => naming.names(self.variable_count()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A truth vector always has at least one value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn variable_count(&self) -> usize {
        self.len().trailing_zeros() as usize
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Check if variable names are defined, vectors of length one do not need them
    pub fn has_variables(&self) -> bool {
        self.variables.len() == self.variable_count()
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    /// Positions of the given value: minterms for ```true```, maxterms for ```false```
    pub fn indices_of(&self, value: bool) -> Vec<usize> {
        self.values.iter().positions(|v| *v == value).collect()
    }

    /// The fixed value of a constant function, if all values are equal
    pub fn get_fixed(&self) -> Option<bool> {
        let first = self.values[0];
        match self.values.iter().all(|v| *v == first) {
            true => Some(first),
            false => None,
        }
    }

    /// Enumerate the states of this vector with their value
    pub fn states<'a>(&'a self, variables: &'a [char]) -> impl Iterator<Item = (State<'a>, bool)> {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, v)| (State::new(variables, i), *v))
    }
}

impl FromStr for TruthVector {
    type Err = BoolminError;

    fn from_str(descr: &str) -> Result<Self, Self::Err> {
        let mut values = vec![];
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => (), // skip spacing and ` for formatting
                '0' => values.push(false),
                '1' => values.push(true),
                _ => return Err(BoolminError::InvalidVectorSymbol(c)),
            }
        }
        if values.is_empty() {
            return Err(BoolminError::EmptyInput);
        }
        TruthVector::new(values)
    }
}

impl fmt::Display for TruthVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in &self.values {
            write!(f, "{}", if *v { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Rule for TruthVector {
    fn eval(&self, state: &State) -> Result<bool, BoolminError> {
        if !self.has_variables() {
            return Err(BoolminError::MissingVariables(self.to_string()));
        }
        let mut index = 0;
        for v in &self.variables {
            index = (index << 1) | state.try_value(*v)? as usize;
        }
        Ok(self.values[index])
    }

    fn collect_variables(&self, variables: &mut Vec<char>) {
        for v in &self.variables {
            push_variable(variables, *v);
        }
    }
}

/// Evaluate an expression into a truth vector, see [build_vector_with].
pub fn build_vector(node: &Node) -> Result<TruthVector, BoolminError> {
    build_vector_with(node, &DEFAULT_NAMING)
}

/// Evaluate an expression into a truth vector.
///
/// * A vector node is returned unchanged, with names provided by the policy if it has none.
/// * A constant gives a vector of length one, without variables.
/// * Other expressions are evaluated for all assignments of their variables, taken in order of
///   first appearance.
///
/// ```
/// use boolmin::{build_vector, parse};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let v = build_vector(&parse("x ∧ y")?)?;
/// assert_eq!(v.to_string(), "0001");
///
/// // variables follow their first appearance
/// let v = build_vector(&parse("y → x")?)?;
/// assert_eq!(v.variables(), &['y', 'x']);
/// assert_eq!(v.to_string(), "1101");
/// # Ok(())
/// # }
/// ```
pub fn build_vector_with(
    node: &Node,
    naming: &dyn NamingPolicy,
) -> Result<TruthVector, BoolminError> {
    match node {
        Node::Vector(v) => v.clone().ensure_variables(naming),
        Node::Constant(b) => Ok(TruthVector::constant(*b)),
        _ => build_vector_for(node, &node.get_variables()),
    }
}

/// Evaluate an expression over an explicit list of variables.
///
/// The list may contain variables which do not appear in the expression, but it must contain
/// all its variables. This is used to compare expressions which do not depend on the same variables.
///
/// ```
/// use boolmin::{build_vector_for, parse};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let v = build_vector_for(&parse("¬y")?, &['x', 'y'])?;
/// assert_eq!(v.to_string(), "1010");
/// assert!(build_vector_for(&parse("x ∨ z")?, &['x', 'y']).is_err());
/// # Ok(())
/// # }
/// ```
pub fn build_vector_for(node: &Node, variables: &[char]) -> Result<TruthVector, BoolminError> {
    if variables.len() > MAX_VARIABLES {
        return Err(BoolminError::TooManyVariables(variables.len()));
    }
    check_variables(variables)?;
    if let Some(v) = node.nested_vector() {
        return Err(BoolminError::VectorInExpression(v.to_string()));
    }
    if let Some(missing) = node.get_variables().iter().find(|v| !variables.contains(v)) {
        return Err(BoolminError::NoSuchVariable(*missing));
    }

    let size = 1usize << variables.len();
    debug!("Evaluate {} over {} states", node, size);
    let values = (0..size)
        .map(|i| node.eval(&State::new(variables, i)))
        .collect::<Result<Vec<bool>, BoolminError>>()?;
    trace!("Evaluated vector: {:?}", values);

    TruthVector::new(values)?.with_variables(variables.to_vec())
}

/// A row of a truth table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthRow {
    values: Vec<(char, bool)>,
    result: bool,
}

impl TruthRow {
    /// Value of a variable in this row
    pub fn get(&self, name: char) -> Option<bool> {
        self.values
            .iter()
            .find(|(v, _)| *v == name)
            .map(|(_, b)| *b)
    }

    pub fn values(&self) -> &[(char, bool)] {
        &self.values
    }

    /// Value of the function (the ```F``` column)
    pub fn result(&self) -> bool {
        self.result
    }
}

/// Complete truth table of a function, with one row per assignment in index order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn from_vector(vector: &TruthVector) -> Self {
        let rows = vector
            .states(vector.variables())
            .map(|(state, result)| TruthRow {
                values: state.iter().collect(),
                result,
            })
            .collect();
        Self {
            variables: vector.variables().to_vec(),
            rows,
        }
    }
}

impl std::ops::Index<usize> for TruthTable {
    type Output = TruthRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in &self.variables {
            write!(f, "{} ", v)?;
        }
        writeln!(f, "| F")?;
        for row in &self.rows {
            for (_, b) in &row.values {
                write!(f, "{} ", *b as u8)?;
            }
            writeln!(f, "| {}", row.result as u8)?;
        }
        Ok(())
    }
}

/// Build the truth table of an expression.
///
/// Unlike [build_vector], a vector node without variables is rejected.
pub fn build_truth_table(node: &Node) -> Result<TruthTable, BoolminError> {
    let vector = match node {
        Node::Vector(v) if !v.has_variables() => {
            return Err(BoolminError::MissingVariables(v.to_string()))
        }
        _ => build_vector(node)?,
    };
    Ok(TruthTable::from_vector(&vector))
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parse_vectors() {
        assert_eq!(
            "0120".parse::<TruthVector>(),
            Err(BoolminError::InvalidVectorSymbol('2'))
        );
        assert_eq!(
            "011".parse::<TruthVector>(),
            Err(BoolminError::VectorLength(3))
        );
        assert_eq!("".parse::<TruthVector>(), Err(BoolminError::EmptyInput));

        let v: TruthVector = "0110 1001".parse().unwrap();
        assert_eq!(v.len(), 8);
        assert_eq!(v.variable_count(), 3);
        assert!(!v.has_variables());
    }

    #[test]
    fn and_expression() -> Result<(), BoolminError> {
        let node = Node::from('x') & Node::from('y');
        assert_eq!(build_vector(&node)?.to_string(), "0001");
        Ok(())
    }

    #[test]
    fn implication_and_equivalence() -> Result<(), BoolminError> {
        let node = Node::from('x').implies(Node::from('y'));
        assert_eq!(build_vector(&node)?.to_string(), "1101");

        let node = Node::from('x').equivalent(Node::from('y'));
        assert_eq!(build_vector(&node)?.to_string(), "1001");
        Ok(())
    }

    #[test]
    fn constants() -> Result<(), BoolminError> {
        let v = build_vector(&Node::from(true))?;
        assert_eq!(v.to_string(), "1");
        assert_eq!(v.variable_count(), 0);

        let v = build_vector(&(Node::from(true) & Node::from(false)))?;
        assert_eq!(v.to_string(), "0");
        Ok(())
    }

    #[test]
    fn infer_vector_variables() -> Result<(), BoolminError> {
        let node = Node::Vector("1010".parse()?);
        let v = build_vector(&node)?;
        assert_eq!(v.to_string(), "1010");
        assert_eq!(v.variables(), &['x', 'y']);
        Ok(())
    }

    #[test]
    fn or_truth_table() -> Result<(), BoolminError> {
        let node = Node::from('x') | Node::from('y');
        let table = build_truth_table(&node)?;
        assert_eq!(table.len(), 4);
        assert!(!table[0].result());
        assert!(table[1].result());
        assert!(table[2].result());
        assert!(table[3].result());
        assert_eq!(table[2].get('x'), Some(true));
        assert_eq!(table[2].get('y'), Some(false));
        Ok(())
    }

    #[test]
    fn vector_truth_table() -> Result<(), BoolminError> {
        let v: TruthVector = "1001".parse()?;
        let node = Node::Vector(v.with_variables(vec!['x', 'y'])?);
        let table = build_truth_table(&node)?;
        assert_eq!(table.len(), 4);
        assert!(table[0].result());
        assert!(!table[1].result());
        assert!(!table[2].result());
        assert!(table[3].result());
        assert_eq!(format!("{}", table).lines().next(), Some("x y | F"));
        Ok(())
    }

    #[test]
    fn vector_truth_table_needs_variables() -> Result<(), BoolminError> {
        let node = Node::Vector("1010".parse()?);
        assert_eq!(
            build_truth_table(&node),
            Err(BoolminError::MissingVariables("1010".to_string()))
        );
        Ok(())
    }

    #[test]
    fn nested_vectors() -> Result<(), BoolminError> {
        let v: TruthVector = "0110".parse()?;
        let xor = Node::Vector(v.with_variables(vec!['x', 'y'])?);
        let err = Err(BoolminError::VectorInExpression("0110".to_string()));
        assert_eq!(build_vector(&!xor.clone()), err);
        assert_eq!(build_vector(&(Node::from('x') | xor.clone())), err);
        assert_eq!(build_vector_for(&(Node::from('x') & !xor), &['x', 'y']), err);

        let unnamed = Node::Vector("0110".parse()?);
        assert!(build_vector(&(unnamed & Node::from('x'))).is_err());
        Ok(())
    }

    #[test]
    fn rename_vector() -> Result<(), BoolminError> {
        let v: TruthVector = "0110".parse()?;
        assert!(v.clone().with_variables(vec!['a']).is_err());
        assert!(v.clone().with_variables(vec!['a', 'a']).is_err());
        assert_eq!(v.with_variables(vec!['a', 'b'])?.variables(), &['a', 'b']);
        Ok(())
    }
}
