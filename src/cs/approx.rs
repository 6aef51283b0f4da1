pub mod greedy_change;

pub use greedy_change::decompose_greedy;
