use boolmin::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn to_vector_text(index: usize, len: usize) -> String {
    (0..len)
        .map(|i| if (index >> (len - 1 - i)) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Parse a minimized form and evaluate it over the variables of the original vector
fn evaluate(text: &str, variables: &[char]) -> Result<String, BoolminError> {
    Ok(build_vector_for(&parse(text)?, variables)?.to_string())
}

fn check_round_trip(vector: &str) -> Result<(), BoolminError> {
    let count = vector.len().trailing_zeros() as usize;
    let variables = DEFAULT_NAMING.names(count)?;

    let sdnf = minimize_sdnf(vector)?;
    assert_eq!(evaluate(&sdnf, &variables)?, vector, "DNF '{}'", sdnf);

    let sknf = minimize_sknf(vector)?;
    assert_eq!(evaluate(&sknf, &variables)?, vector, "CNF '{}'", sknf);
    Ok(())
}

#[test]
fn round_trip_all_three_variable_functions() -> Result<(), BoolminError> {
    init();
    for index in 0..256 {
        check_round_trip(&to_vector_text(index, 8))?;
    }
    Ok(())
}

#[test]
fn round_trip_four_variables() -> Result<(), BoolminError> {
    init();
    for index in (0..1 << 16).step_by(331) {
        check_round_trip(&to_vector_text(index, 16))?;
    }
    check_round_trip("0110110011000011")?;
    check_round_trip("1000000000000001")?;
    Ok(())
}

#[test]
fn full_forms_round_trip() -> Result<(), BoolminError> {
    init();
    let variables = CANONICAL_NAMING.names(3)?;
    for vector in ["01101001", "00010111", "10000000", "11111110"] {
        assert_eq!(evaluate(&get_full_sdnf(vector)?, &variables)?, vector);
        assert_eq!(evaluate(&get_full_sknf(vector)?, &variables)?, vector);
    }
    Ok(())
}

#[test]
fn expression_to_minimal_form() -> Result<(), BoolminError> {
    init();
    let expr = parse("¬(x → y) ∨ (x ↔ y) ∧ x")?;
    let vector = build_vector(&expr)?;
    assert_eq!(vector.to_string(), "0011");
    assert_eq!(minimize(&vector, NormalForm::Disjunctive)?, "x");
    Ok(())
}

#[test]
fn primes_cover_all_minterms() -> Result<(), BoolminError> {
    init();
    for index in (0..1 << 16).step_by(997) {
        let vector = to_vector_text(index, 16);
        let minterms = get_indices_by_value(&vector, '1');
        let primes = quine_mccluskey(&minterms, 4)?;
        let cover = find_essential_prime_implicants(&primes, &minterms);
        for m in &minterms {
            assert!(cover.iter().any(|i| i.covers(*m)), "{} in {}", m, vector);
        }
    }
    Ok(())
}

#[test]
fn karnaugh_areas_are_implicants() -> Result<(), BoolminError> {
    init();
    let expr = parse("(w ∧ ¬y) ∨ (x ∧ z) ∨ ¬(w ∨ x ∨ y ∨ z)")?;
    let vector = build_vector(&expr)?;
    let grid = build(&expr)?;
    for area in find_all_maximal_areas(&grid) {
        for (r, c) in area.covered_cells(grid.height(), grid.width()) {
            assert_eq!(vector.value(grid.assignment_index(r, c)), Some(true));
        }
    }
    for area in find_all_maximal_zero_areas(&grid) {
        for (r, c) in area.covered_cells(grid.height(), grid.width()) {
            assert_eq!(vector.value(grid.assignment_index(r, c)), Some(false));
        }
    }
    Ok(())
}
