//! Minimized and canonical normal forms of truth vectors.

use crate::efmt::{FormatterConfig, UNICODE_FMT_CFG};
use crate::*;

use itertools::Itertools;
use log::debug;

/// The two normal forms: sums of products or products of sums
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NormalForm {
    /// Disjunction of conjunctions, built on the minterms
    Disjunctive,
    /// Conjunction of disjunctions, built on the maxterms
    Conjunctive,
}

impl NormalForm {
    /// The value of the targeted states: 1 for minterms, 0 for maxterms
    pub fn target(&self) -> bool {
        match self {
            NormalForm::Disjunctive => true,
            NormalForm::Conjunctive => false,
        }
    }

    /// Operator connecting the literals of a clause
    fn inner(&self) -> Operator {
        match self {
            NormalForm::Disjunctive => Operator::And,
            NormalForm::Conjunctive => Operator::Or,
        }
    }

    /// Operator connecting the clauses
    fn outer(&self) -> Operator {
        match self {
            NormalForm::Disjunctive => Operator::Or,
            NormalForm::Conjunctive => Operator::And,
        }
    }
}

/// Positions of a character in a vector written as text.
///
/// ```
/// use boolmin::get_indices_by_value;
///
/// assert_eq!(get_indices_by_value("0110", '1'), vec![1, 2]);
/// assert_eq!(get_indices_by_value("0110", '0'), vec![0, 3]);
/// ```
pub fn get_indices_by_value(vector: &str, target: char) -> Vec<usize> {
    vector.chars().positions(|c| c == target).collect()
}

/// Write a list of implicants as a normal form, see [build_expression_with]
pub fn build_expression(implicants: &[Implicant], variables: &[char], form: NormalForm) -> String {
    build_expression_with(implicants, variables, form, &UNICODE_FMT_CFG)
}

/// Write a list of implicants as a normal form using the given operator symbols.
///
/// Each fixed position of an implicant gives a literal: the variable itself if its bit matches the
/// target value of the form (1 for the disjunctive form, 0 for the conjunctive one), and its negation
/// otherwise. Clauses with several literals are enclosed in parentheses.
///
/// ```
/// use boolmin::{build_expression, Implicant, NormalForm};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let implicants = [Implicant::new("1-0", [4, 6])?, Implicant::new("-11", [3, 7])?];
/// let vars = ['x', 'y', 'z'];
/// assert_eq!(
///     build_expression(&implicants, &vars, NormalForm::Disjunctive),
///     "(x ∧ ¬z) ∨ (y ∧ z)"
/// );
/// assert_eq!(
///     build_expression(&implicants, &vars, NormalForm::Conjunctive),
///     "(¬x ∨ z) ∧ (¬y ∨ ¬z)"
/// );
/// # Ok(())
/// # }
/// ```
pub fn build_expression_with(
    implicants: &[Implicant],
    variables: &[char],
    form: NormalForm,
    cfg: &FormatterConfig,
) -> String {
    let inner = format!(" {} ", cfg.operator(form.inner()));
    let outer = format!(" {} ", cfg.operator(form.outer()));

    implicants
        .iter()
        .map(|imp| {
            let literals: Vec<String> = imp
                .pattern()
                .iter_fixed_values()
                .map(|(pos, b)| {
                    let name = match variables.get(pos) {
                        Some(v) => v.to_string(),
                        None => format!("_{}_", pos),
                    };
                    match b == form.target() {
                        true => name,
                        false => format!("{}{}", cfg.negation(), name),
                    }
                })
                .collect();
            match literals.len() {
                // a free implicant is neutral for its clause
                0 => match form {
                    NormalForm::Disjunctive => "1".to_string(),
                    NormalForm::Conjunctive => "0".to_string(),
                },
                1 => literals.into_iter().collect(),
                _ => format!("({})", literals.join(&inner)),
            }
        })
        .join(&outer)
}

/// Minimize a truth vector in the given form.
///
/// Variables are taken from the vector, or from [DEFAULT_NAMING] if it has none.
/// Constant functions are written ```0``` or ```1``` in both forms.
///
/// ```
/// use boolmin::{minimize, NormalForm, TruthVector};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let v: TruthVector = "00010111".parse()?;
/// assert_eq!(minimize(&v, NormalForm::Disjunctive)?, "(x ∧ y) ∨ (w ∧ y) ∨ (w ∧ x)");
/// assert_eq!(minimize(&v, NormalForm::Conjunctive)?, "(w ∨ x) ∧ (w ∨ y) ∧ (x ∨ y)");
/// # Ok(())
/// # }
/// ```
pub fn minimize(vector: &TruthVector, form: NormalForm) -> Result<String, BoolminError> {
    if let Some(b) = vector.get_fixed() {
        return Ok(constant(b));
    }
    let variables = vector.variables_or(&DEFAULT_NAMING)?;
    let targets = vector.indices_of(form.target());

    let primes: Primes = quine_mccluskey(&targets, vector.variable_count())?.into();
    let cover = primes.select_cover(&targets);
    debug!(
        "{:?} form of {}: {} prime implicants, {} selected",
        form,
        vector,
        primes.len(),
        cover.len()
    );
    Ok(build_expression(&cover, &variables, form))
}

/// Write the canonical form of a truth vector, with one complete clause per target state.
///
/// Variables are taken from the vector, or from [CANONICAL_NAMING] if it has none.
pub fn canonical(vector: &TruthVector, form: NormalForm) -> Result<String, BoolminError> {
    if let Some(b) = vector.get_fixed() {
        return Ok(constant(b));
    }
    let variables = vector.variables_or(&CANONICAL_NAMING)?;
    let width = vector.variable_count();
    let clauses: Vec<Implicant> = vector
        .indices_of(form.target())
        .into_iter()
        .map(|idx| Implicant::from_index(idx, width))
        .collect();
    Ok(build_expression(&clauses, &variables, form))
}

fn constant(b: bool) -> String {
    match b {
        true => "1".to_string(),
        false => "0".to_string(),
    }
}

/// Minimal disjunctive form of a vector written as text.
///
/// ```
/// use boolmin::minimize_sdnf;
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// assert_eq!(minimize_sdnf("0111")?, "y ∨ x");
/// assert_eq!(minimize_sdnf("0000")?, "0");
/// # Ok(())
/// # }
/// ```
pub fn minimize_sdnf(vector: &str) -> Result<String, BoolminError> {
    minimize(&vector.parse()?, NormalForm::Disjunctive)
}

/// Minimal conjunctive form of a vector written as text.
pub fn minimize_sknf(vector: &str) -> Result<String, BoolminError> {
    minimize(&vector.parse()?, NormalForm::Conjunctive)
}

/// Full disjunctive normal form of a vector written as text, see [canonical]
pub fn get_full_sdnf(vector: &str) -> Result<String, BoolminError> {
    canonical(&vector.parse()?, NormalForm::Disjunctive)
}

/// Full conjunctive normal form of a vector written as text, see [canonical]
pub fn get_full_sknf(vector: &str) -> Result<String, BoolminError> {
    canonical(&vector.parse()?, NormalForm::Conjunctive)
}
