//! Boolean rules defined as expression trees

use core::ops::BitAnd;
use core::ops::BitOr;
use core::ops::Not;
use std::fmt;
use std::sync::Arc;

use crate::efmt::{ExprFormatter, InfixFormatter};
use crate::rules::push_variable;
use crate::*;

/// A Boolean expression tree.
///
/// Represents a Boolean function as a tree where internal nodes are Boolean operations
/// and leaves are individual variables, fixed Boolean values or complete truth vectors.
/// Expressions overload the ```&```, ```|```, and ```!``` operators to facilitate their definition
/// as readable rust statements. Like the parser, these operators keep the tree as written:
/// constants and double negations are not eliminated.
///
/// Expressions can not be [copied](Copy) but they can be [cloned](Clone) in constant time.
///
/// ```
/// use boolmin::{Node, Rule, State};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let (x, y, z) = (Node::from('x'), Node::from('y'), Node::from('z'));
/// let expr = x & (y | !z);
/// assert_eq!(expr.to_string(), "x ∧ (y ∨ ¬z)");
///
/// let vars = ['x', 'y', 'z'];
/// assert!(expr.eval(&State::new(&vars, 0b100))?);
/// assert!(!expr.eval(&State::new(&vars, 0b101))?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    /// A single variable
    Variable(char),

    /// A fixed Boolean value
    Constant(bool),

    /// Negation of a sub-expression
    Not(Arc<Node>),

    /// Two expressions connected with a binary operator
    Operation(Operator, Arc<(Node, Node)>),

    /// A whole truth vector.
    ///
    /// A vector is only valid as the whole expression: the parser rejects vectors combined with
    /// operators and [build_vector] rejects trees built with a vector as operand.
    Vector(TruthVector),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
/// Binary operators used in expression trees.
pub enum Operator {
    /// AND operator: both children need to be true
    And,
    /// OR operator: at least one child needs to be true
    Or,
    /// Material implication: false only if the left child is true and the right one false
    Implies,
    /// Equivalence: both children have the same value
    Equivalent,
}

impl Operator {
    /// Binding strength of the operator, higher values bind tighter
    pub fn priority(&self) -> u8 {
        match self {
            Operator::Equivalent => 1,
            Operator::Implies => 2,
            Operator::Or => 3,
            Operator::And => 4,
        }
    }

    /// Apply the operator on two values
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left && right,
            Operator::Or => left || right,
            Operator::Implies => !left || right,
            Operator::Equivalent => left == right,
        }
    }

    /// Build an operation node joining two expressions
    pub fn join(self, left: Node, right: Node) -> Node {
        Node::Operation(self, Arc::new((left, right)))
    }
}

impl Node {
    /// Find a truth vector used as the operand of a negation or of a binary operator
    pub fn nested_vector(&self) -> Option<&TruthVector> {
        match self {
            Node::Not(child) => child.vector_operand(),
            Node::Operation(_, children) => children
                .0
                .vector_operand()
                .or_else(|| children.1.vector_operand()),
            _ => None,
        }
    }

    fn vector_operand(&self) -> Option<&TruthVector> {
        match self {
            Node::Vector(v) => Some(v),
            _ => self.nested_vector(),
        }
    }

    /// Build the implication ```self → rhs```
    pub fn implies(self, rhs: Node) -> Node {
        Operator::Implies.join(self, rhs)
    }

    /// Build the equivalence ```self ↔ rhs```
    pub fn equivalent(self, rhs: Node) -> Node {
        Operator::Equivalent.join(self, rhs)
    }

    /// The operator of an operation node
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Operation(op, _) => Some(*op),
            _ => None,
        }
    }

    /// The left child of an operation node
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Operation(_, children) => Some(&children.0),
            _ => None,
        }
    }

    /// The right child of an operation node, or the negated child of a negation
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Operation(_, children) => Some(&children.1),
            Node::Not(child) => Some(child.as_ref()),
            _ => None,
        }
    }

    /// Get the fixed value associated to this expression, or none if it is not a constant
    pub fn get_fixed(&self) -> Option<bool> {
        match self {
            Node::Constant(b) => Some(*b),
            _ => None,
        }
    }

    /// Display the expression using the given formatter hooks
    pub fn fmt_with(&self, f: &mut dyn ExprFormatter) -> fmt::Result {
        self._fmt_expr(f, false)
    }

    fn _fmt_expr(&self, f: &mut dyn ExprFormatter, grouped: bool) -> fmt::Result {
        match self {
            Node::Variable(name) => f.write_variable(*name),
            Node::Constant(b) => f.write_bool(*b),
            Node::Vector(v) => f.write_vector(v),
            Node::Not(child) => {
                f.write_not()?;
                child._fmt_expr(f, child.operator().is_some())
            }
            Node::Operation(op, children) => {
                f.start_operation(*op, grouped)?;
                children.0._fmt_expr(f, children.0.needs_group(*op, false))?;
                f.sep_operation(*op)?;
                children.1._fmt_expr(f, children.1.needs_group(*op, true))?;
                f.end_operation(*op, grouped)
            }
        }
    }

    /// Operations binding looser than their parent need parentheses.
    /// Operators are left-associative: a right child with the same priority is also grouped.
    fn needs_group(&self, parent: Operator, right: bool) -> bool {
        match self.operator() {
            None => false,
            Some(op) => {
                op.priority() < parent.priority() || (right && op.priority() == parent.priority())
            }
        }
    }
}

impl Rule for Node {
    fn eval(&self, state: &State) -> Result<bool, BoolminError> {
        match self {
            Node::Variable(name) => state.try_value(*name),
            Node::Constant(b) => Ok(*b),
            Node::Not(child) => child.eval(state).map(|b| !b),
            Node::Operation(op, children) => {
                let left = children.0.eval(state)?;
                let right = children.1.eval(state)?;
                Ok(op.apply(left, right))
            }
            Node::Vector(v) => v.eval(state),
        }
    }

    fn collect_variables(&self, variables: &mut Vec<char>) {
        match self {
            Node::Variable(name) => push_variable(variables, *name),
            Node::Constant(_) => (),
            Node::Not(child) => child.collect_variables(variables),
            Node::Operation(_, children) => {
                children.0.collect_variables(variables);
                children.1.collect_variables(variables);
            }
            Node::Vector(v) => v.collect_variables(variables),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = InfixFormatter::new(f);
        self.fmt_with(&mut ef)
    }
}

impl From<char> for Node {
    fn from(name: char) -> Self {
        Node::Variable(name)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Constant(b)
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl From<TruthVector> for Node {
    fn from(v: TruthVector) -> Self {
        Node::Vector(v)
    }
}

impl Not for Node {
    type Output = Node;
    fn not(self) -> Node {
        Node::Not(Arc::new(self))
    }
}

impl Not for &Node {
    type Output = Node;
    fn not(self) -> Node {
        Node::Not(Arc::new(self.clone()))
    }
}

impl<T: Into<Node>> BitAnd<T> for Node {
    type Output = Node;
    fn bitand(self, rhs: T) -> Node {
        Operator::And.join(self, rhs.into())
    }
}

impl<T: Into<Node>> BitOr<T> for Node {
    type Output = Node;
    fn bitor(self, rhs: T) -> Node {
        Operator::Or.join(self, rhs.into())
    }
}

impl<T: Into<Node>> BitAnd<T> for &Node {
    type Output = Node;
    fn bitand(self, rhs: T) -> Node {
        Operator::And.join(self.clone(), rhs.into())
    }
}

impl<T: Into<Node>> BitOr<T> for &Node {
    type Output = Node;
    fn bitor(self, rhs: T) -> Node {
        Operator::Or.join(self.clone(), rhs.into())
    }
}
