pub mod compare;
pub mod cs;
pub mod error;

pub use cs::{
    decompose_greedy, decompose_optimal, find_greedy_counterexample, is_canonical,
    min_coin_count, CoinCounts, Denominations,
};
pub use error::{Error, Result};
