//! coin_change.rs

use crate::cs::change::{CoinCounts, Denominations};
use crate::error::{check_amount, Error, Result};

/// Marks a sum that no combination of coins reaches.
pub(crate) const UNREACHABLE: usize = usize::MAX;

/// Allocates a table of `len` copies of `value`, failing instead of aborting
/// when the memory cannot be reserved.
pub(crate) fn alloc_table<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| Error::TableTooLarge {
            entries: len as u64,
        })?;
    table.resize(len, value);
    Ok(table)
}

/// Fills the table `dp[i]` = minimum number of coins summing to `i`, for every
/// `i` in `0..=amount`, using each coin any number of times.
///
/// Coins are tried in the order given. An entry is only replaced on a strict
/// improvement, so the first coin reaching the minimum wins; `on_improve` is
/// called with `(i, coin)` every time that happens.
pub(crate) fn fill_min_coins<F>(
    amount: usize,
    coins: &[u64],
    mut on_improve: F,
) -> Result<Vec<usize>>
where
    F: FnMut(usize, u64),
{
    let len = amount.checked_add(1).ok_or(Error::TableTooLarge {
        entries: amount as u64,
    })?;
    let mut dp = alloc_table(len, UNREACHABLE)?;
    dp[0] = 0; // base case

    for i in 1..=amount {
        for &coin in coins {
            if coin > i as u64 {
                continue;
            }
            let prev = dp[i - coin as usize];
            if prev != UNREACHABLE && prev + 1 < dp[i] {
                dp[i] = prev + 1;
                on_improve(i, coin);
            }
        }
    }

    Ok(dp)
}

fn table_size(amount: i64) -> Result<(u64, usize)> {
    let checked = check_amount(amount)?;
    let size = usize::try_from(checked).map_err(|_| Error::InvalidArgument { amount })?;
    Ok((checked, size))
}

/// Makes change for `amount` with the fewest possible coins.
///
/// This is the unbounded coin change problem: each denomination may be used
/// any number of times. A table of minimum coin counts is built bottom-up for
/// every sum up to `amount`, alongside a table recording the last coin used to
/// reach each sum. The decomposition is then recovered by walking that second
/// table back from `amount` to zero.
///
/// Runs in O(amount × denominations) time and O(amount) space. Both tables
/// live only for the duration of the call.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `amount` is negative.
/// * [`Error::Unreachable`] if no combination of the denominations sums to
///   `amount`.
/// * [`Error::TableTooLarge`] if the tables for `amount` cannot be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::{decompose_optimal, Denominations};
///
/// // Greedy would take 10 + 6 + 1 + 1 (4 coins)
/// let coins = Denominations::new(vec![1, 6, 10]).unwrap();
/// let change = decompose_optimal(18, &coins).unwrap();
/// assert_eq!(change.count_of(6), 3);
/// assert_eq!(change.total_coins(), 3);
///
/// // 3 cannot be made from 5s and 2s
/// let coins = Denominations::new(vec![5, 2]).unwrap();
/// assert!(decompose_optimal(3, &coins).is_err());
/// ```
pub fn decompose_optimal(amount: i64, denominations: &Denominations) -> Result<CoinCounts> {
    let (amount, size) = table_size(amount)?;

    // last_coin[i] is the coin that gave dp[i] its minimum; 0 means none yet.
    let mut last_coin = alloc_table(size.saturating_add(1), 0_u64)?;
    let dp = fill_min_coins(size, denominations.values(), |i, coin| last_coin[i] = coin)?;
    log::trace!("filled change tables of {} entries", dp.len());

    if dp[size] == UNREACHABLE {
        log::debug!("amount {amount} is unreachable with {:?}", denominations.values());
        return Err(Error::Unreachable { amount });
    }

    let mut counts = CoinCounts::new();
    let mut current = size;
    while current > 0 {
        // Every reachable non-zero sum has a recorded coin.
        let coin = last_coin[current];
        counts.add(coin, 1);
        current -= coin as usize;
    }

    Ok(counts)
}

/// Computes only the minimum number of coins needed to form `amount`,
/// without recovering which coins they are.
///
/// # Errors
///
/// Same as [`decompose_optimal`].
///
/// # Examples
///
/// ```
/// use coinchange::{min_coin_count, Denominations};
///
/// let coins = Denominations::new(vec![1, 6, 10]).unwrap();
/// assert_eq!(min_coin_count(18, &coins), Ok(3));
/// assert_eq!(min_coin_count(0, &coins), Ok(0));
/// ```
pub fn min_coin_count(amount: i64, denominations: &Denominations) -> Result<usize> {
    let (amount, size) = table_size(amount)?;
    let dp = fill_min_coins(size, denominations.values(), |_, _| {})?;

    match dp[size] {
        UNREACHABLE => Err(Error::Unreachable { amount }),
        n => Ok(n),
    }
}
