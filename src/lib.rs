//! Parse Boolean expressions, evaluate them into truth vectors, minimize them and draw their Karnaugh maps.
//!
//! Variables are single letters. A Boolean function is given either as an [expression](Node) combining
//! variables with negation (```¬```), conjunction (```∧```), disjunction (```∨```), implication (```→```)
//! and equivalence (```↔```), or directly as a [truth vector](TruthVector) listing its value for each
//! assignment of its variables.
//!
//! ```
//! use boolmin::{build_vector, parse};
//! # use boolmin::BoolminError;
//! # fn main() -> Result<(), BoolminError> {
//!
//! // Parse an expression and evaluate it for all assignments of its variables
//! let expr = parse("x → y ∧ z")?;
//! let vector = build_vector(&expr)?;
//! assert_eq!(vector.variables(), &['x', 'y', 'z']);
//! assert_eq!(vector.to_string(), "11110001");
//!
//! // A truth vector is also accepted, its variables are named from the end of the alphabet
//! let vector = build_vector(&parse("0110")?)?;
//! assert_eq!(vector.variables(), &['x', 'y']);
//! # Ok(())
//! # }
//! ```
//!
//! # Truth tables
//!
//! The assignment at index ```i``` of a truth vector is given by the binary digits of ```i```, the most
//! significant digit being the value of the first variable. The [truth table](TruthTable) lists these
//! assignments with the value of the function.
//!
//! ```
//! use boolmin::{build_truth_table, parse};
//! # use boolmin::BoolminError;
//! # fn main() -> Result<(), BoolminError> {
//!
//! let table = build_truth_table(&parse("x ∨ y")?)?;
//! assert_eq!(table.len(), 4);
//! assert!(!table[0].result());
//! assert_eq!(table[2].get('x'), Some(true));
//! assert!(table[2].result());
//! # Ok(())
//! # }
//! ```
//!
//! # Minimization
//!
//! The Quine–McCluskey method computes the [prime implicants](Primes) of a function, a subset of them is then
//! selected to cover all minterms (for the disjunctive form) or all maxterms (for the conjunctive form).
//! The full canonical forms, with one complete clause per minterm or maxterm, are also available.
//!
//! ```
//! use boolmin::{get_full_sdnf, minimize_sdnf, minimize_sknf};
//! # use boolmin::BoolminError;
//! # fn main() -> Result<(), BoolminError> {
//!
//! assert_eq!(minimize_sdnf("00010011")?, "(x ∧ y) ∨ (w ∧ x)");
//! assert_eq!(minimize_sknf("1001")?, "(x ∨ ¬y) ∧ (¬x ∨ y)");
//! assert_eq!(get_full_sdnf("0110")?, "(¬w ∧ x) ∨ (w ∧ ¬x)");
//! # Ok(())
//! # }
//! ```
//!
//! # Karnaugh maps
//!
//! Functions of 2, 3 or 4 variables can be laid out on a [Grid] following the Gray code.
//! The [maximal areas](find_all_maximal_areas) of this grid correspond to the prime implicants.
//!
//! ```
//! use boolmin::{build, find_all_maximal_areas, parse, Area};
//! # use boolmin::BoolminError;
//! # fn main() -> Result<(), BoolminError> {
//!
//! let grid = build(&parse("x ∨ y")?)?;
//! assert_eq!(grid.to_table()[0], vec!["x\\y", "0", "1"]);
//!
//! let areas = find_all_maximal_areas(&grid);
//! assert_eq!(areas, vec![Area::new(0, 1, 2, 1), Area::new(1, 0, 1, 2)]);
//! # Ok(())
//! # }
//! ```

mod efmt;
mod error;
mod expr;
mod implicants;
mod kmap;
mod minimize;
mod parse;
mod pattern;
mod primes;
mod rules;
mod states;
pub mod tools;
mod variable;
mod vector;

#[cfg(feature = "pyo3")]
mod python;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use efmt::{
    ExprFormatter, FormatterConfig, InfixFormatted, InfixFormatter, PrefixFormatted,
    PrefixFormatter, ASCII_FMT_CFG, UNICODE_FMT_CFG,
};
pub use error::BoolminError;
pub use expr::{Node, Operator};
pub use implicants::{quine_mccluskey, Implicant, Tabulation};
pub use kmap::{
    build, build_for_four_variables, build_for_three_variables, build_for_two_variables,
    build_steps, build_with, find_all_maximal_areas, find_all_maximal_zero_areas,
    find_maximal_areas, get_variables_from_map, Area, Grid, Step,
};
pub use minimize::{
    build_expression, build_expression_with, canonical, get_full_sdnf, get_full_sknf,
    get_indices_by_value, minimize, minimize_sdnf, minimize_sknf, NormalForm,
};
pub use parse::{parse, parse_with, ExprParser, MAX_NESTING, MAX_OPERATORS};
pub use pattern::Pattern;
pub use primes::{find_essential_prime_implicants, Primes};
pub use rules::Rule;
pub use states::State;
pub use variable::{LeadingNaming, NamingPolicy, ReservedNaming, CANONICAL_NAMING, DEFAULT_NAMING};
pub use vector::{
    build_truth_table, build_vector, build_vector_for, build_vector_with, TruthRow, TruthTable,
    TruthVector, MAX_VARIABLES,
};
