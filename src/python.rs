//! Python bindings for the text-level operations.

use crate::*;

use pyo3::prelude::*;

/// Minimal disjunctive form of a vector
#[pyfunction]
#[pyo3(name = "minimize_sdnf")]
fn minimize_sdnf_py(vector: &str) -> Result<String, BoolminError> {
    minimize_sdnf(vector)
}

/// Minimal conjunctive form of a vector
#[pyfunction]
#[pyo3(name = "minimize_sknf")]
fn minimize_sknf_py(vector: &str) -> Result<String, BoolminError> {
    minimize_sknf(vector)
}

/// Full disjunctive form of a vector
#[pyfunction]
#[pyo3(name = "get_full_sdnf")]
fn get_full_sdnf_py(vector: &str) -> Result<String, BoolminError> {
    get_full_sdnf(vector)
}

/// Full conjunctive form of a vector
#[pyfunction]
#[pyo3(name = "get_full_sknf")]
fn get_full_sknf_py(vector: &str) -> Result<String, BoolminError> {
    get_full_sknf(vector)
}

/// Parse an expression and return its truth vector with the names of its variables
#[pyfunction]
fn vector(expr: &str) -> Result<(String, String), BoolminError> {
    let v = build_vector(&parse(expr)?)?;
    Ok((v.to_string(), v.variables().iter().collect()))
}

/// Parse an expression and return its Karnaugh map as a table of strings
#[pyfunction]
fn karnaugh(expr: &str) -> Result<Vec<Vec<String>>, BoolminError> {
    Ok(build(&parse(expr)?)?.to_table())
}

#[pymodule]
fn boolmin(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(minimize_sdnf_py, m)?)?;
    m.add_function(wrap_pyfunction!(minimize_sknf_py, m)?)?;
    m.add_function(wrap_pyfunction!(get_full_sdnf_py, m)?)?;
    m.add_function(wrap_pyfunction!(get_full_sknf_py, m)?)?;
    m.add_function(wrap_pyfunction!(vector, m)?)?;
    m.add_function(wrap_pyfunction!(karnaugh, m)?)?;
    Ok(())
}
