//! Detects denomination sets on which greedy change making is not optimal.

use crate::cs::approx::greedy_change::decompose_greedy;
use crate::cs::change::Denominations;
use crate::cs::dynamic::coin_change::{fill_min_coins, UNREACHABLE};
use crate::error::{Error, Result};

/// Largest search range (sum of the two largest denominations) accepted by
/// [`find_greedy_counterexample`].
pub const MAX_SEARCH_BOUND: u64 = 1 << 24;

/// Finds the smallest amount for which the greedy decomposition is worse than
/// the optimal one, or `None` if greedy is optimal everywhere.
///
/// An amount counts as a counterexample when it is reachable but greedy either
/// uses more coins than necessary or fails to reach it at all.
///
/// By Kozen and Zaks, if a set containing 1 has a counterexample then its
/// smallest one lies below the sum of the two largest denominations, so only
/// that range is searched. A single table fill covers the whole range. For
/// sets without 1 the same range is checked but a `None` is not a proof.
///
/// # Errors
///
/// Returns [`Error::TableTooLarge`] if the two largest denominations sum to
/// more than [`MAX_SEARCH_BOUND`].
///
/// # Examples
///
/// ```
/// use coinchange::{find_greedy_counterexample, Denominations};
///
/// let coins = Denominations::new(vec![4, 3, 1]).unwrap();
/// assert_eq!(find_greedy_counterexample(&coins), Ok(Some(6)));
/// assert_eq!(find_greedy_counterexample(&Denominations::canonical()), Ok(None));
/// ```
pub fn find_greedy_counterexample(denominations: &Denominations) -> Result<Option<u64>> {
    let values = denominations.values();
    if values.len() < 2 {
        return Ok(None);
    }

    let bound = values[0]
        .checked_add(values[1])
        .filter(|&sum| sum <= MAX_SEARCH_BOUND)
        .ok_or(Error::TableTooLarge {
            entries: values[0].saturating_add(values[1]),
        })?;
    let bound = usize::try_from(bound).map_err(|_| Error::TableTooLarge { entries: bound })?;
    let dp = fill_min_coins(bound, values, |_, _| {})?;

    let found = (1..bound)
        .filter(|&amount| dp[amount] != UNREACHABLE)
        .find(|&amount| match decompose_greedy(amount as i64, denominations) {
            Ok(greedy) => greedy.total_coins() > dp[amount],
            Err(_) => true,
        })
        .map(|amount| {
            log::debug!("greedy is suboptimal at {amount} for {values:?}");
            amount as u64
        });
    Ok(found)
}

/// Returns true if the greedy decomposition is optimal for every amount.
///
/// # Errors
///
/// Same as [`find_greedy_counterexample`].
pub fn is_canonical(denominations: &Denominations) -> Result<bool> {
    Ok(find_greedy_counterexample(denominations)?.is_none())
}
