use crate::{BoolminError, State};

/// Common API for Boolean functions over named variables.
///
/// This trait defines the API to evaluate a function in a state and to list the variables it depends on.
pub trait Rule {
    /// Evaluate the rule on the given state
    fn eval(&self, state: &State) -> Result<bool, BoolminError>;

    /// Add the variables used by this rule, in order of first appearance, skipping known ones
    fn collect_variables(&self, variables: &mut Vec<char>);

    /// Construct the list of variables
    fn get_variables(&self) -> Vec<char> {
        let mut variables = Vec::new();
        self.collect_variables(&mut variables);
        variables
    }
}

pub(crate) fn push_variable(variables: &mut Vec<char>, name: char) {
    if !variables.contains(&name) {
        variables.push(name);
    }
}
