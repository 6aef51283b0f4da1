pub mod approx;
pub mod change;
pub mod dynamic;

// Re-export all modules
pub use approx::*;
pub use change::{CoinCounts, Denominations};
pub use dynamic::*;
