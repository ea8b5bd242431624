use thiserror::Error;

#[cfg(feature = "pyo3")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Errors raised while parsing, evaluating or minimizing Boolean functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoolminError {
    /// Nothing to parse
    #[error("The input can not be empty")]
    EmptyInput,

    /// A character outside of the expression alphabet
    #[error("Unexpected symbol '{0}' at position {1}")]
    UnexpectedSymbol(char, usize),

    /// The expression stops in the middle of an operation
    #[error("Unexpected end of the expression")]
    UnexpectedEnd,

    /// An opening parenthesis is never closed
    #[error("Expected ')' to close the parenthesis opened at position {0}")]
    ExpectedClosingParen(usize),

    /// Parentheses and negations are nested beyond the supported depth
    #[error("The expression is nested too deeply at position {0}")]
    TooDeep(usize),

    /// The expression has more operators than supported
    #[error("Too many operators in the expression: {0}")]
    TooManyOperators(usize),

    /// A truth vector combined with operators
    #[error("A vector cannot be inside an expression: '{0}'")]
    VectorInExpression(String),

    /// The length of a truth vector is not a power of two
    #[error("The length of a vector must be a power of two, found {0}")]
    VectorLength(usize),

    /// A truth vector contains something else than 0 and 1
    #[error("Invalid symbol '{0}' in a vector")]
    InvalidVectorSymbol(char),

    /// A vector is used where its variables are needed but none were given
    #[error("The variables of the vector '{0}' are not defined")]
    MissingVariables(String),

    /// The variable is not part of the current assignment
    #[error("There is no variable '{0}' in this assignment")]
    NoSuchVariable(char),

    /// The same name is used twice in a variable list
    #[error("The variable '{0}' is declared twice")]
    DuplicateVariable(char),

    /// The number of variables does not match the size of the vector
    #[error("Expected {expected} variables, found {found}")]
    VariableCount { expected: usize, found: usize },

    /// Too many variables to enumerate or to name
    #[error("Too many variables: {0}")]
    TooManyVariables(usize),

    /// Karnaugh maps are only built for 2, 3 or 4 variables
    #[error("Karnaugh maps need 2, 3 or 4 variables, found {0}")]
    UnsupportedVariableCount(usize),

    /// The pattern of an implicant is invalid
    #[error("The pattern '{0}' is invalid")]
    InvalidPattern(String),

    /// The rows of a map do not define a valid grid
    #[error("Not a valid map: {0}")]
    InvalidGrid(String),
}

#[cfg(feature = "pyo3")]
impl From<BoolminError> for PyErr {
    fn from(e: BoolminError) -> Self {
        PyValueError::new_err(format!("{}", e))
    }
}
