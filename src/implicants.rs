//! Implicants and the tabulation step of the Quine–McCluskey method.

use crate::*;

use itertools::Itertools;
use log::{debug, trace};
use slab::Slab;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

/// A pattern together with the indices of the target states it covers.
///
/// The targets are the minterms (or maxterms) which were merged to build the pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Implicant {
    pattern: Pattern,
    covered: BTreeSet<usize>,
}

impl Implicant {
    /// Create an implicant from the text of its pattern and the covered indices
    pub fn new(bits: &str, covered: impl IntoIterator<Item = usize>) -> Result<Self, BoolminError> {
        Ok(Self::with(bits.parse()?, covered.into_iter().collect()))
    }

    pub fn with(pattern: Pattern, covered: BTreeSet<usize>) -> Self {
        Self { pattern, covered }
    }

    /// Implicant covering a single state
    pub fn from_index(index: usize, width: usize) -> Self {
        Self::with(Pattern::from_index(index, width), BTreeSet::from([index]))
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The pattern written over ```0```, ```1``` and ```-```
    pub fn bits(&self) -> String {
        self.pattern.to_string()
    }

    pub fn covered(&self) -> &BTreeSet<usize> {
        &self.covered
    }

    pub fn covers(&self, index: usize) -> bool {
        self.covered.contains(&index)
    }

    /// Merge two implicants if their patterns can be combined
    pub fn combine(&self, other: &Self) -> Option<Self> {
        self.pattern.combine(&other.pattern).map(|pattern| {
            let covered = self.covered.union(&other.covered).copied().collect();
            Self::with(pattern, covered)
        })
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{{}}}", self.pattern, self.covered.iter().join(", "))
    }
}

/// Successive generations of combined implicants.
///
/// All implicants live in a single arena, each generation is a list of keys in this arena.
/// The first generation contains one implicant per target index, each following generation
/// contains the new implicants obtained by combining pairs of implicants of the previous one
/// (with one more free position). Implicants which never combine are prime.
///
/// ```
/// use boolmin::Tabulation;
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let tab = Tabulation::new(&[0, 1, 2, 5], 3)?;
/// assert_eq!(tab.generation_count(), 2);
/// assert_eq!(tab.generation(1).count(), 3);
/// assert_eq!(tab.primes().count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tabulation {
    arena: Slab<Implicant>,
    generations: Vec<Vec<usize>>,
    primes: Vec<usize>,
}

impl Tabulation {
    /// Run the tabulation for a list of target indices over ```width``` variables.
    ///
    /// Fails if ```width``` is larger than [MAX_VARIABLES].
    pub fn new(targets: &[usize], width: usize) -> Result<Self, BoolminError> {
        if width > MAX_VARIABLES {
            return Err(BoolminError::TooManyVariables(width));
        }
        let mut tab = Self::default();
        let mut current: Vec<usize> = targets
            .iter()
            .unique()
            .map(|t| tab.arena.insert(Implicant::from_index(*t, width)))
            .collect();

        while !current.is_empty() {
            debug!(
                "Tabulation generation {}: {} implicants",
                tab.generations.len(),
                current.len()
            );
            let next = tab.combine_generation(&current);
            tab.generations.push(current);
            current = next;
        }
        Ok(tab)
    }

    /// Combine all pairs of implicants from neighbouring groups and return the keys of the new ones.
    ///
    /// Implicants of the generation which do not take part to any combination are prime.
    fn combine_generation(&mut self, current: &[usize]) -> Vec<usize> {
        // group the implicants by number of positive positions
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for key in current {
            groups
                .entry(self.arena[*key].pattern.ones())
                .or_default()
                .push(*key);
        }

        let mut used = HashSet::new();
        let mut seen = HashSet::new();
        let mut created = vec![];
        for (ones, lows) in &groups {
            let highs = match groups.get(&(ones + 1)) {
                None => continue,
                Some(highs) => highs,
            };
            for (a, b) in lows.iter().cartesian_product(highs) {
                if let Some(merged) = self.arena[*a].combine(&self.arena[*b]) {
                    used.insert(*a);
                    used.insert(*b);
                    if seen.insert(merged.bits()) {
                        trace!("{} + {} => {}", self.arena[*a], self.arena[*b], merged);
                        created.push(merged);
                    }
                }
            }
        }

        self.primes
            .extend(current.iter().filter(|k| !used.contains(*k)).copied());

        created
            .into_iter()
            .map(|imp| self.arena.insert(imp))
            .collect()
    }

    /// Number of generations, including the initial one
    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    /// Iterate over the implicants of a generation (empty if it does not exist)
    pub fn generation(&self, idx: usize) -> impl Iterator<Item = &Implicant> {
        self.generations
            .get(idx)
            .into_iter()
            .flatten()
            .map(move |k| &self.arena[*k])
    }

    /// Iterate over the prime implicants, by generation and in order of creation
    pub fn primes(&self) -> impl Iterator<Item = &Implicant> {
        self.primes.iter().map(move |k| &self.arena[*k])
    }

    /// Extract the list of prime implicants
    pub fn into_primes(mut self) -> Primes {
        self.primes
            .iter()
            .map(|k| self.arena.remove(*k))
            .collect::<Vec<_>>()
            .into()
    }
}

/// Compute all prime implicants of the function which is true exactly on the given indices.
///
/// ```
/// use boolmin::quine_mccluskey;
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let primes = quine_mccluskey(&[0, 1, 2, 5], 3)?;
/// let bits: Vec<String> = primes.iter().map(|p| p.bits()).collect();
/// assert_eq!(bits, vec!["00-", "0-0", "-01"]);
///
/// assert!(quine_mccluskey(&[], 3)?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn quine_mccluskey(targets: &[usize], width: usize) -> Result<Vec<Implicant>, BoolminError> {
    Ok(Tabulation::new(targets, width)?.into_primes().into_iter().collect())
}
