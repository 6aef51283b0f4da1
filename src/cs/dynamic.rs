pub mod canonical_coins;
pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use canonical_coins::{find_greedy_counterexample, is_canonical, MAX_SEARCH_BOUND};
pub use coin_change::{decompose_optimal, min_coin_count};
