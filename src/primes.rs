use crate::*;

use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::slice::Iter;
use std::vec::IntoIter;

/// Boolean function represented as a list of prime implicants.
///
/// An implicant is "prime" if it can not be merged with any other implicant.
/// The list is obtained from the [tabulation](Tabulation) of the Quine–McCluskey method
/// and keeps its order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Primes {
    implicants: Vec<Implicant>,
}

impl Primes {
    /// Get the number of prime implicants
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// Return whether there are no prime implicant (the function is always false)
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Implicant> {
        self.implicants.iter()
    }

    /// Select a subset of prime implicants covering all targets, see [find_essential_prime_implicants]
    pub fn select_cover(&self, targets: &[usize]) -> Vec<Implicant> {
        find_essential_prime_implicants(&self.implicants, targets)
    }
}

impl From<Vec<Implicant>> for Primes {
    fn from(implicants: Vec<Implicant>) -> Self {
        Self { implicants }
    }
}

impl FromIterator<Implicant> for Primes {
    fn from_iter<I: IntoIterator<Item = Implicant>>(iter: I) -> Self {
        Self {
            implicants: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

impl IntoIterator for Primes {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.into_iter()
    }
}

/// Select implicants covering all targets: first the essential ones, then a greedy completion.
///
/// An implicant is essential if it is the only one covering some target. If some targets remain
/// uncovered by the essential implicants, the first implicant covering the largest number of
/// uncovered targets is added, until all targets are covered. The result is not guaranteed to be
/// a minimal cover.
///
/// The selected implicants are returned without duplicates, in their original order.
///
/// ```
/// use boolmin::{find_essential_prime_implicants, Implicant};
/// # use boolmin::BoolminError;
/// # fn main() -> Result<(), BoolminError> {
///
/// let implicants = vec![
///     Implicant::new("00-", [0, 1])?,
///     Implicant::new("0-0", [0, 2])?,
///     Implicant::new("-00", [0, 4])?,
/// ];
/// let cover = find_essential_prime_implicants(&implicants, &[0, 1, 2]);
/// assert_eq!(cover.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn find_essential_prime_implicants(implicants: &[Implicant], targets: &[usize]) -> Vec<Implicant> {
    // which implicants cover each target
    let mut coverage: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for t in targets {
        let covering = implicants
            .iter()
            .enumerate()
            .filter(|(_, imp)| imp.covers(*t))
            .map(|(idx, _)| idx)
            .collect();
        coverage.insert(*t, covering);
    }

    let mut selected: BTreeSet<usize> = coverage
        .values()
        .filter(|covering| covering.len() == 1)
        .map(|covering| covering[0])
        .collect();
    debug!("{} essential implicants", selected.len());

    let mut uncovered: BTreeSet<usize> = coverage.keys().copied().collect();
    for idx in &selected {
        uncovered.retain(|t| !implicants[*idx].covers(*t));
    }

    while !uncovered.is_empty() {
        let best = implicants
            .iter()
            .enumerate()
            .filter(|(idx, _)| !selected.contains(idx))
            .map(|(idx, imp)| (idx, uncovered.iter().filter(|t| imp.covers(**t)).count()))
            .fold(None, |best: Option<(usize, usize)>, (idx, count)| match best {
                Some((_, c)) if c >= count => best,
                _ => Some((idx, count)),
            });

        match best {
            Some((idx, count)) if count > 0 => {
                debug!("Add implicant {} covering {} remaining targets", implicants[idx], count);
                selected.insert(idx);
                uncovered.retain(|t| !implicants[idx].covers(*t));
            }
            _ => {
                warn!("{} targets are not covered by any implicant", uncovered.len());
                break;
            }
        }
    }

    selected.into_iter().map(|idx| implicants[idx].clone()).collect()
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn bits(implicants: &[Implicant]) -> Vec<String> {
        implicants.iter().map(|i| i.bits()).collect()
    }

    #[test]
    fn all_essential() -> Result<(), BoolminError> {
        let implicants = vec![
            Implicant::new("00-", [0, 1])?,
            Implicant::new("0-0", [0, 2])?,
            Implicant::new("-11", [5, 7])?,
            Implicant::new("1-0", [6])?,
        ];
        let cover = find_essential_prime_implicants(&implicants, &[0, 1, 2, 5, 6, 7]);
        assert_eq!(bits(&cover), vec!["00-", "0-0", "-11", "1-0"]);
        Ok(())
    }

    #[test]
    fn greedy_completion() -> Result<(), BoolminError> {
        // cyclic cover: no essential implicant
        let primes = quine_mccluskey(&[0, 1, 2, 5, 6, 7], 3)?;
        assert_eq!(primes.len(), 6);
        let cover = find_essential_prime_implicants(&primes, &[0, 1, 2, 5, 6, 7]);
        assert_eq!(cover.len(), 3);
        for t in [0, 1, 2, 5, 6, 7] {
            assert!(cover.iter().any(|i| i.covers(t)));
        }
        Ok(())
    }

    #[test]
    fn no_duplicates() -> Result<(), BoolminError> {
        let implicants = vec![Implicant::new("1-", [2, 3])?, Implicant::new("-1", [1, 3])?];
        // 2 and 1 are each covered by a single implicant
        let cover = find_essential_prime_implicants(&implicants, &[1, 2, 3]);
        assert_eq!(bits(&cover), vec!["1-", "-1"]);
        Ok(())
    }

    #[test]
    fn empty() -> Result<(), BoolminError> {
        assert!(find_essential_prime_implicants(&[], &[]).is_empty());
        let primes: Primes = quine_mccluskey(&[], 2)?.into();
        assert!(primes.is_empty());
        assert!(primes.select_cover(&[]).is_empty());
        Ok(())
    }

    #[test]
    fn cover_from_primes() -> Result<(), BoolminError> {
        let primes: Primes = quine_mccluskey(&[0, 1, 2, 5], 3)?.into();
        let cover = primes.select_cover(&[0, 1, 2, 5]);
        assert_eq!(bits(&cover), vec!["0-0", "-01"]);
        Ok(())
    }
}
