use crate::{BoolminError, NamingPolicy, Node, Operator, TruthVector, DEFAULT_NAMING};

use log::trace;
use once_cell::sync::Lazy;
use pest::error::InputLocation;
use pest::{iterators, Parser};
use regex::Regex;

#[derive(Parser)]
#[grammar_inline = r####"
formula = _{ SOI ~ equiv ~ EOI }
equiv   =  { implies ~ ( equiv_op ~ implies )* }
implies =  { disj ~ ( impl_op ~ disj )* }
disj    =  { conj ~ ( or_op ~ conj )* }
conj    =  { term ~ ( and_op ~ term )* }
term    = _{ neg | grp }
neg     =  { not_op ~ term }
grp     = _{ vector | constant | var | "(" ~ equiv ~ ")" }
vector  = @{ ("0" | "1") ~ ("0" | "1")+ }
constant = @{ "0" | "1" }
var     = @{ ASCII_ALPHA }

equiv_op = _{ "↔" | "<->" | "≡" }
impl_op  = _{ "→" | "->" }
or_op    = _{ "∨" | "|" | "+" }
and_op   = _{ "∧" | "&" | "*" }
not_op   = _{ "¬" | "!" | "~" }

WHITESPACE = _{ " " | "\t" | "\r" | "\n" }
"####]
struct FormulaGrammar;

static RE_VECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[01]{2,}$").unwrap());

static OPERATOR_SYMBOLS: &str = "¬∧∨→↔≡!~&*|+-<>";
static NEGATION_SYMBOLS: &str = "¬!~";
// ASCII arrows are counted once, on their '>'
static BINARY_SYMBOLS: &str = "∧∨→↔≡&*|+>";

/// Maximal depth of parentheses and stacked negations
pub const MAX_NESTING: usize = 256;

/// Maximal number of operators in a single expression
pub const MAX_OPERATORS: usize = 2048;

/// Parse a Boolean expression or a whole truth vector, see [ExprParser]
pub fn parse(input: &str) -> Result<Node, BoolminError> {
    ExprParser::new(&DEFAULT_NAMING).parse(input)
}

/// Parse a Boolean expression, naming the variables of truth vectors with a custom policy
pub fn parse_with(input: &str, naming: &dyn NamingPolicy) -> Result<Node, BoolminError> {
    ExprParser::new(naming).parse(input)
}

/// Parse Boolean expressions written with single-letter variables.
///
/// From the loosest to the tightest, the operators are: equivalence (```↔```), implication (```→```),
/// disjunction (```∨```), conjunction (```∧```) and negation (```¬```). Binary operators are
/// left-associative. ASCII alternatives are accepted: ```<->```, ```->```, ```|```, ```&``` and ```!```.
///
/// An input made only of ```0``` and ```1``` (with at least two digits) is a truth vector: its length
/// must be a power of two and its variables are named by the [NamingPolicy] of the parser.
/// A truth vector can not be used inside a larger expression.
///
/// ```
/// use boolmin::{parse, Node, Operator};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let node = parse("(x ∨ y) ∧ z")?;
/// assert_eq!(node.operator(), Some(Operator::And));
///
/// let node = parse("0110")?;
/// assert!(matches!(node, Node::Vector(_)));
///
/// assert!(parse("x ∧ 0101").is_err());
/// assert!(parse("(x ∨ y").is_err());
/// # Ok(())
/// # }
/// ```
pub struct ExprParser<'a> {
    naming: &'a dyn NamingPolicy,
}

impl<'a> ExprParser<'a> {
    pub fn new(naming: &'a dyn NamingPolicy) -> Self {
        Self { naming }
    }

    pub fn parse(&self, input: &str) -> Result<Node, BoolminError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(BoolminError::EmptyInput);
        }
        trace!("Parse '{}'", text);

        check_symbols(input)?;

        if RE_VECTOR.is_match(text) {
            let vector: TruthVector = text.parse()?;
            return Ok(Node::Vector(vector.ensure_variables(self.naming)?));
        }

        check_nesting(input)?;

        let mut parsed = FormulaGrammar::parse(Rule::formula, input)
            .map_err(|e| syntax_error(input, e))?;
        match parsed.next() {
            Some(root) => self._load_expr(root),
            None => Err(BoolminError::UnexpectedEnd),
        }
    }

    fn _load_expr(&self, expr: iterators::Pair<Rule>) -> Result<Node, BoolminError> {
        let rule = expr.as_rule();
        match rule {
            Rule::var => match expr.as_str().chars().next() {
                Some(name) => Ok(Node::Variable(name)),
                None => Err(BoolminError::UnexpectedEnd),
            },
            Rule::constant => Ok(Node::Constant(expr.as_str() == "1")),
            Rule::vector => Err(BoolminError::VectorInExpression(expr.as_str().to_string())),
            _ => {
                let mut inner = expr.into_inner();
                let mut node = match inner.next() {
                    Some(first) => self._load_expr(first)?,
                    None => return Err(BoolminError::UnexpectedEnd),
                };
                let op = match rule {
                    Rule::neg => return Ok(!node),
                    Rule::conj => Operator::And,
                    Rule::disj => Operator::Or,
                    Rule::implies => Operator::Implies,
                    Rule::equiv => Operator::Equivalent,
                    // Other rules are hidden
                    _ => return Err(BoolminError::UnexpectedEnd),
                };
                for next in inner {
                    node = op.join(node, self._load_expr(next)?);
                }
                Ok(node)
            }
        }
    }
}

/// Reject characters which can not appear in an expression
fn check_symbols(input: &str) -> Result<(), BoolminError> {
    for (pos, c) in input.chars().enumerate() {
        let valid = c.is_ascii_alphabetic()
            || c == '0'
            || c == '1'
            || c == '('
            || c == ')'
            || c.is_whitespace()
            || OPERATOR_SYMBOLS.contains(c);
        if !valid {
            return Err(BoolminError::UnexpectedSymbol(c, pos));
        }
    }
    Ok(())
}

/// Match all parentheses and bound the depth of the tree before parsing.
///
/// The nesting level at a position counts the open parentheses and the negations waiting for
/// their operand, in this group and in the enclosing ones.
fn check_nesting(input: &str) -> Result<(), BoolminError> {
    let mut opened = vec![];
    let mut pending = vec![];
    let mut negations = 0;
    let mut operators = 0;
    for (pos, c) in input.chars().enumerate() {
        match c {
            '(' => {
                opened.push(pos);
                pending.push(negations);
                negations = 0;
            }
            ')' => {
                if opened.pop().is_none() {
                    return Err(BoolminError::UnexpectedSymbol(c, pos));
                }
                pending.pop();
                negations = 0;
            }
            _ if NEGATION_SYMBOLS.contains(c) => {
                negations += 1;
                operators += 1;
            }
            _ if BINARY_SYMBOLS.contains(c) => operators += 1,
            _ if c.is_ascii_alphanumeric() => negations = 0,
            _ => (),
        }
        if opened.len() + pending.iter().sum::<usize>() + negations > MAX_NESTING {
            return Err(BoolminError::TooDeep(pos));
        }
        if operators > MAX_OPERATORS {
            return Err(BoolminError::TooManyOperators(operators));
        }
    }
    match opened.pop() {
        Some(pos) => Err(BoolminError::ExpectedClosingParen(pos)),
        None => Ok(()),
    }
}

/// Translate the position of a parsing error into the offending symbol
fn syntax_error(input: &str, e: pest::error::Error<Rule>) -> BoolminError {
    let offset = match e.location {
        InputLocation::Pos(p) => p,
        InputLocation::Span((s, _)) => s,
    };
    let rest = input.get(offset..).unwrap_or_default();
    match rest.trim_start().chars().next() {
        None => BoolminError::UnexpectedEnd,
        Some(c) => {
            let skipped = rest.len() - rest.trim_start().len();
            let pos = input[..offset + skipped].chars().count();
            BoolminError::UnexpectedSymbol(c, pos)
        }
    }
}
