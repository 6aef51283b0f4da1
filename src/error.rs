//! Error types shared by the change-making algorithms.

use thiserror::Error;

/// Errors raised by the decomposers and the denomination set constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A negative amount was passed to a decomposer.
    #[error("invalid amount {amount}: amounts must be non-negative")]
    InvalidArgument { amount: i64 },

    /// No non-negative combination of the denominations sums to the amount.
    #[error("amount {amount} cannot be formed from the given denominations")]
    Unreachable { amount: u64 },

    /// The greedy pass ended with a remainder no denomination fits into.
    /// The amount may still be reachable by another combination.
    #[error("greedy change for {amount} stopped with remainder {remainder}")]
    GreedyRemainder { amount: u64, remainder: u64 },

    /// A dynamic-programming table of this many entries cannot be allocated.
    #[error("table of {entries} entries is too large to allocate")]
    TableTooLarge { entries: u64 },

    /// The denomination set is empty, contains a zero, or repeats a value.
    #[error("invalid denominations: {0}")]
    InvalidDenominations(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Converts a caller-supplied amount into the unsigned form used internally.
pub(crate) fn check_amount(amount: i64) -> Result<u64> {
    u64::try_from(amount).map_err(|_| Error::InvalidArgument { amount })
}
