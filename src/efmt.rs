//! Formatting API for expressions

use crate::{Node, Operator, TruthVector};
use delegate::delegate;

use std::fmt;

/// Symbols used to write the Boolean operators
pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_not: &'a str,
    s_implies: &'a str,
    s_equiv: &'a str,
}

pub static UNICODE_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "∧",
    s_or: "∨",
    s_not: "¬",
    s_implies: "→",
    s_equiv: "↔",
};

pub static ASCII_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "&",
    s_or: "|",
    s_not: "!",
    s_implies: "->",
    s_equiv: "<->",
};

pub struct InfixFormatted<'a> {
    node: &'a Node,
    cfg: &'a FormatterConfig<'a>,
}

/// Define hooks to display separate parts of expressions.
///
/// This trait provide entry points used by [Node::fmt_with] to control the presentation of the expression.
/// The expression visits the inner tree and calls the hooks defined in this trait for each node and leaf.
///
/// A default formatter is implemented on top of [fmt::Formatter], additional formatters are used through
/// wrappers overriding the Display trait.
pub trait ExprFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    /// Write a fixed Boolean node
    fn write_bool(&mut self, b: bool) -> fmt::Result;

    /// Write a single variable
    fn write_variable(&mut self, name: char) -> fmt::Result;

    /// Write a complete truth vector
    fn write_vector(&mut self, v: &TruthVector) -> fmt::Result;

    /// Write the negation symbol, the negated expression follows
    fn write_not(&mut self) -> fmt::Result;

    /// Start writing an operation, ```grouped``` is set if it must be delimited from its context
    fn start_operation(&mut self, op: Operator, grouped: bool) -> fmt::Result;

    /// Stop writing an operation
    fn end_operation(&mut self, op: Operator, grouped: bool) -> fmt::Result;

    /// Separate operands in the ongoing operation
    fn sep_operation(&mut self, op: Operator) -> fmt::Result;
}

impl FormatterConfig<'_> {
    pub fn operator(&self, op: Operator) -> &str {
        match op {
            Operator::And => self.s_and,
            Operator::Or => self.s_or,
            Operator::Implies => self.s_implies,
            Operator::Equivalent => self.s_equiv,
        }
    }

    pub fn negation(&self) -> &str {
        self.s_not
    }

    pub fn infix<'a>(&'a self, node: &'a Node) -> InfixFormatted<'a> {
        InfixFormatted { node, cfg: self }
    }
}

pub struct InfixFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a FormatterConfig<'a>);
pub struct PrefixFormatter<'a, 'b>(InfixFormatter<'a, 'b>);

impl<'a, 'b> InfixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(f, &UNICODE_FMT_CFG)
    }
    pub fn with(f: &'a mut fmt::Formatter<'b>, cfg: &'a FormatterConfig) -> Self {
        Self(f, cfg)
    }
}

impl<'a, 'b> PrefixFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self(InfixFormatter::new(f))
    }
}

impl ExprFormatter for InfixFormatter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_bool(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_variable(&mut self, name: char) -> fmt::Result {
        write!(self, "{}", name)
    }

    fn write_vector(&mut self, v: &TruthVector) -> fmt::Result {
        write!(self, "{}", v)
    }

    fn write_not(&mut self) -> fmt::Result {
        let cfg = self.1;
        write!(self, "{}", cfg.s_not)
    }

    fn start_operation(&mut self, _op: Operator, grouped: bool) -> fmt::Result {
        match grouped {
            true => write!(self, "("),
            false => Ok(()),
        }
    }

    fn end_operation(&mut self, _op: Operator, grouped: bool) -> fmt::Result {
        match grouped {
            true => write!(self, ")"),
            false => Ok(()),
        }
    }

    fn sep_operation(&mut self, op: Operator) -> fmt::Result {
        let cfg = self.1;
        write!(self, " {} ", cfg.operator(op))
    }
}

/// Display an expression in prefix notation, for example ```(∧ x ¬y)```
pub struct PrefixFormatted<'a>(pub &'a Node);

impl fmt::Display for PrefixFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = PrefixFormatter::new(f);
        self.0.fmt_with(&mut ef)
    }
}

impl fmt::Display for InfixFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ef = InfixFormatter::with(f, self.cfg);
        self.node.fmt_with(&mut ef)
    }
}

impl ExprFormatter for PrefixFormatter<'_, '_> {
    delegate! {
        to self.0 {
            fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;
            fn write_bool(&mut self, b: bool) -> fmt::Result;
            fn write_variable(&mut self, name: char) -> fmt::Result;
            fn write_vector(&mut self, v: &TruthVector) -> fmt::Result;
            fn write_not(&mut self) -> fmt::Result;
        }
    }

    fn start_operation(&mut self, op: Operator, _grouped: bool) -> fmt::Result {
        let cfg = self.0 .1;
        write!(self, "({} ", cfg.operator(op))
    }

    fn end_operation(&mut self, _op: Operator, _grouped: bool) -> fmt::Result {
        write!(self, ")")
    }

    fn sep_operation(&mut self, _op: Operator) -> fmt::Result {
        write!(self, " ")
    }
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::*;

    #[test]
    fn infix_and_prefix() -> Result<(), BoolminError> {
        let expr = parse("x ∧ ¬(y ∨ z) → w")?;
        assert_eq!(format!("{}", expr), "x ∧ ¬(y ∨ z) → w");
        assert_eq!(
            format!("{}", ASCII_FMT_CFG.infix(&expr)),
            "x & !(y | z) -> w"
        );
        assert_eq!(
            format!("{}", PrefixFormatted(&expr)),
            "(→ (∧ x ¬(∨ y z)) w)"
        );
        Ok(())
    }

    #[test]
    fn ascii_output_parses_back() -> Result<(), BoolminError> {
        let expr = parse("(x ↔ y) ∨ ¬z ∧ 1")?;
        let ascii = format!("{}", ASCII_FMT_CFG.infix(&expr));
        assert_eq!(parse(&ascii)?, expr);
        Ok(())
    }
}
