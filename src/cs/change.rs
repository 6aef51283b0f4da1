//! Shared data model for change making: the denomination set and the
//! coin-count mapping produced by the decomposers.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};

/// A fixed set of distinct, positive coin values kept in descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    values: Vec<u64>,
}

impl Denominations {
    /// Builds a denomination set, sorting the values largest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDenominations`] if `values` is empty, contains
    /// a zero, or contains the same value twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::Denominations;
    ///
    /// let coins = Denominations::new(vec![1, 5, 2]).unwrap();
    /// assert_eq!(coins.values(), &[5, 2, 1]);
    /// assert!(Denominations::new(vec![2, 2]).is_err());
    /// ```
    pub fn new(mut values: Vec<u64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidDenominations(
                "at least one denomination is required".to_string(),
            ));
        }
        if values.contains(&0) {
            return Err(Error::InvalidDenominations(
                "denominations must be positive".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(values.len());
        if let Some(dup) = values.iter().find(|&&v| !seen.insert(v)) {
            return Err(Error::InvalidDenominations(format!(
                "duplicate denomination {dup}"
            )));
        }

        values.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { values })
    }

    /// The built-in set {50, 25, 10, 5, 2, 1}, for which greedy is optimal.
    pub fn canonical() -> Self {
        Self {
            values: vec![50, 25, 10, 5, 2, 1],
        }
    }

    /// Denominations in descending order.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn largest(&self) -> u64 {
        self.values[0]
    }

    pub fn smallest(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    pub fn contains(&self, value: u64) -> bool {
        self.values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self::canonical()
    }
}

/// How many coins of each denomination a decomposition uses.
///
/// Only denominations with a count of at least one are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinCounts {
    counts: BTreeMap<u64, usize>,
}

impl CoinCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` coins of `denomination`. A zero count is ignored.
    pub(crate) fn add(&mut self, denomination: u64, count: usize) {
        if count > 0 {
            *self.counts.entry(denomination).or_insert(0) += count;
        }
    }

    /// Number of coins of `denomination` used, zero if absent.
    pub fn count_of(&self, denomination: u64) -> usize {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins across all denominations.
    pub fn total_coins(&self) -> usize {
        self.counts.values().sum()
    }

    /// The amount this decomposition sums to.
    pub fn value(&self) -> u64 {
        self.counts
            .iter()
            .map(|(&denomination, &count)| denomination * count as u64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.counts.iter().rev().map(|(&d, &c)| (d, c))
    }
}

impl FromIterator<(u64, usize)> for CoinCounts {
    fn from_iter<I: IntoIterator<Item = (u64, usize)>>(iter: I) -> Self {
        let mut counts = CoinCounts::new();
        for (denomination, count) in iter {
            counts.add(denomination, count);
        }
        counts
    }
}

impl fmt::Display for CoinCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (denomination, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{denomination}: {count}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denominations_sorted_descending() {
        let coins = Denominations::new(vec![1, 25, 5, 50, 2, 10]).unwrap();
        assert_eq!(coins, Denominations::canonical());
        assert_eq!(coins.largest(), 50);
        assert_eq!(coins.smallest(), 1);
        assert_eq!(coins.len(), 6);
        assert!(coins.contains(25));
        assert!(!coins.contains(20));
    }

    #[test]
    fn test_denominations_rejects_invalid_sets() {
        assert!(matches!(
            Denominations::new(vec![]),
            Err(Error::InvalidDenominations(_))
        ));
        assert!(matches!(
            Denominations::new(vec![5, 0, 1]),
            Err(Error::InvalidDenominations(_))
        ));
        let err = Denominations::new(vec![5, 2, 5]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDenominations("duplicate denomination 5".to_string())
        );
    }

    #[test]
    fn test_coin_counts_totals() {
        let counts: CoinCounts = vec![(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();
        assert_eq!(counts.total_coins(), 5);
        assert_eq!(counts.value(), 113);
        assert_eq!(counts.count_of(50), 2);
        assert_eq!(counts.count_of(25), 0);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_coin_counts_skips_zero_counts() {
        let counts: CoinCounts = vec![(5, 0), (2, 3), (2, 1)].into_iter().collect();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.count_of(2), 4);
        assert!(CoinCounts::new().is_empty());
    }

    #[test]
    fn test_coin_counts_display() {
        let counts: CoinCounts = vec![(1, 1), (50, 2), (10, 1), (2, 1)].into_iter().collect();
        assert_eq!(counts.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
        assert_eq!(CoinCounts::new().to_string(), "{}");
    }
}
