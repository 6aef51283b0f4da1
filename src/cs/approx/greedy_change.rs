use crate::cs::change::{CoinCounts, Denominations};
use crate::error::{check_amount, Error, Result};

/// Makes change for `amount` by always taking as many of the largest
/// remaining denomination as fit.
///
/// A single pass over the denominations, so the running time is
/// O(number of denominations) regardless of the amount. The result always
/// sums to `amount` exactly, but it only has the minimum number of coins when
/// the denomination set is canonical (see
/// [`is_canonical`](crate::cs::dynamic::canonical_coins::is_canonical)).
///
/// # Arguments
///
/// * `amount` - The value to decompose
/// * `denominations` - The available coin values
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `amount` is negative.
/// * [`Error::GreedyRemainder`] if a remainder is left after the pass, which
///   can only happen when the set does not contain 1. The amount may still be
///   reachable; [`decompose_optimal`](crate::cs::dynamic::coin_change::decompose_optimal)
///   decides that.
///
/// # Examples
///
/// ```
/// use coinchange::{decompose_greedy, Denominations};
///
/// let change = decompose_greedy(113, &Denominations::canonical()).unwrap();
/// assert_eq!(change.count_of(50), 2);
/// assert_eq!(change.total_coins(), 5);
/// ```
pub fn decompose_greedy(amount: i64, denominations: &Denominations) -> Result<CoinCounts> {
    let amount = check_amount(amount)?;
    let mut remaining = amount;
    let mut counts = CoinCounts::new();

    for &coin in denominations.values() {
        if remaining >= coin {
            let count = remaining / coin;
            remaining -= count * coin;
            counts.add(coin, count as usize);
        }
    }

    if remaining != 0 {
        log::debug!("greedy left remainder {remaining} for amount {amount}");
        return Err(Error::GreedyRemainder {
            amount,
            remainder: remaining,
        });
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_canonical_set() {
        let coins = Denominations::canonical();
        let change = decompose_greedy(113, &coins).unwrap();
        let expected: CoinCounts = vec![(50, 2), (10, 1), (2, 1), (1, 1)].into_iter().collect();
        assert_eq!(change, expected);
        assert_eq!(change.value(), 113);
    }

    #[test]
    fn test_greedy_zero_amount() {
        let change = decompose_greedy(0, &Denominations::canonical()).unwrap();
        assert!(change.is_empty());
    }

    #[test]
    fn test_greedy_negative_amount() {
        assert_eq!(
            decompose_greedy(-5, &Denominations::canonical()),
            Err(Error::InvalidArgument { amount: -5 })
        );
    }

    #[test]
    fn test_greedy_sum_matches_amount() {
        let coins = Denominations::new(vec![7, 3, 1]).unwrap();
        for amount in 0..500 {
            let change = decompose_greedy(amount, &coins).unwrap();
            assert_eq!(change.value(), amount as u64);
        }
    }

    #[test]
    fn test_greedy_is_suboptimal_on_non_canonical_set() {
        // 4 + 1 + 1 instead of 3 + 3
        let coins = Denominations::new(vec![4, 3, 1]).unwrap();
        let change = decompose_greedy(6, &coins).unwrap();
        assert_eq!(change.total_coins(), 3);
        assert_eq!(change.count_of(4), 1);
        assert_eq!(change.count_of(1), 2);
    }

    #[test]
    fn test_greedy_remainder_without_unit_coin() {
        let coins = Denominations::new(vec![5, 2]).unwrap();
        assert_eq!(
            decompose_greedy(3, &coins),
            Err(Error::GreedyRemainder {
                amount: 3,
                remainder: 1
            })
        );
    }

    #[test]
    fn test_greedy_remainder_on_reachable_amount() {
        // 6 = 2 + 2 + 2, but greedy takes the 5 first and is left with 1
        let coins = Denominations::new(vec![5, 2]).unwrap();
        let err = decompose_greedy(6, &coins).unwrap_err();
        assert_eq!(
            err,
            Error::GreedyRemainder {
                amount: 6,
                remainder: 1
            }
        );
        assert_ne!(err, Error::Unreachable { amount: 6 });
        assert_eq!(
            crate::cs::dynamic::coin_change::decompose_optimal(6, &coins)
                .unwrap()
                .count_of(2),
            3
        );
    }

    #[test]
    fn test_greedy_idempotent() {
        let coins = Denominations::canonical();
        assert_eq!(
            decompose_greedy(9_999, &coins),
            decompose_greedy(9_999, &coins)
        );
    }
}
