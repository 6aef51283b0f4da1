//! Side-by-side timing of the greedy and optimal decomposers.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::cs::{decompose_greedy, decompose_optimal, Denominations};
use crate::error::{Error, Result};

/// Configuration for a comparison run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Amounts to compare, in report order
    pub amounts: Vec<i64>,
    /// Repeat count every reported time is normalized to
    pub baseline_runs: u32,
    /// Repeat count for the optimal decomposer on large amounts
    pub reduced_runs: u32,
    /// Amounts above this use `reduced_runs` for the optimal decomposer
    pub reduced_runs_threshold: i64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            amounts: vec![113, 1000, 5000, 10000],
            baseline_runs: 100,
            reduced_runs: 10,
            reduced_runs_threshold: 2000,
        }
    }
}

impl HarnessConfig {
    /// Repeat count used when timing the optimal decomposer on `amount`.
    pub fn optimal_runs(&self, amount: i64) -> u32 {
        if amount > self.reduced_runs_threshold {
            self.reduced_runs
        } else {
            self.baseline_runs
        }
    }
}

/// Coin totals produced by both decomposers for one amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agreement {
    /// `None` when greedy stopped with a remainder the optimal decomposer
    /// could still cover
    pub greedy_coins: Option<usize>,
    pub optimal_coins: usize,
}

impl Agreement {
    pub fn agrees(&self) -> bool {
        self.greedy_coins == Some(self.optimal_coins)
    }
}

/// One row of a comparison report.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub amount: i64,
    /// Total time for `baseline_runs` greedy calls
    pub greedy_time: Duration,
    /// Total time for the optimal calls, scaled to `baseline_runs`
    pub optimal_time: Duration,
    pub outcome: Result<Agreement>,
}

/// Calls `f` `runs` times and returns the total wall-clock time.
pub fn time_runs<T, F>(runs: u32, mut f: F) -> Duration
where
    F: FnMut() -> T,
{
    let start = Instant::now();
    for _ in 0..runs {
        black_box(f());
    }
    start.elapsed()
}

/// Times both decomposers on `amount` and checks whether their coin totals
/// match.
///
/// An amount the optimal decomposer rejects is recorded as an error. If only
/// greedy fails because it was left with a remainder, the amount is reported
/// as a disagreement.
pub fn compare_amount(
    amount: i64,
    denominations: &Denominations,
    config: &HarnessConfig,
) -> Comparison {
    let greedy_time = time_runs(config.baseline_runs, || {
        decompose_greedy(black_box(amount), denominations)
    });

    let runs = config.optimal_runs(amount);
    let mut optimal_time = time_runs(runs, || decompose_optimal(black_box(amount), denominations));
    if runs != config.baseline_runs && runs > 0 {
        optimal_time = optimal_time.mul_f64(f64::from(config.baseline_runs) / f64::from(runs));
    }

    let outcome = decompose_optimal(amount, denominations).and_then(|optimal| {
        let greedy_coins = match decompose_greedy(amount, denominations) {
            Ok(greedy) => Some(greedy.total_coins()),
            Err(Error::GreedyRemainder { remainder, .. }) => {
                log::warn!("amount {amount}: greedy stopped with remainder {remainder}");
                None
            }
            Err(err) => return Err(err),
        };
        Ok(Agreement {
            greedy_coins,
            optimal_coins: optimal.total_coins(),
        })
    });

    match &outcome {
        Ok(agreement) if !agreement.agrees() => log::warn!(
            "amount {amount}: greedy used {:?} coins, optimal {}",
            agreement.greedy_coins,
            agreement.optimal_coins
        ),
        Ok(_) => log::debug!("amount {amount}: decomposers agree"),
        Err(err) => log::warn!("amount {amount}: {err}"),
    }

    Comparison {
        amount,
        greedy_time,
        optimal_time,
        outcome,
    }
}

/// Compares both decomposers on every configured amount.
///
/// # Examples
///
/// ```
/// use coinchange::compare::{run, HarnessConfig};
/// use coinchange::Denominations;
///
/// let config = HarnessConfig {
///     amounts: vec![113, 250],
///     baseline_runs: 2,
///     reduced_runs: 1,
///     reduced_runs_threshold: 200,
/// };
/// let rows = run(&Denominations::canonical(), &config);
/// assert_eq!(rows.len(), 2);
/// assert!(rows.iter().all(|row| row.outcome.as_ref().unwrap().agrees()));
/// ```
pub fn run(denominations: &Denominations, config: &HarnessConfig) -> Vec<Comparison> {
    config
        .amounts
        .iter()
        .map(|&amount| compare_amount(amount, denominations, config))
        .collect()
}

/// Formats comparison rows as a plain-text table.
pub fn render_table(rows: &[Comparison]) -> String {
    let mut out = format!(
        "{:<10} | {:<15} | {:<18} | Results agree?\n",
        "Amount", "Greedy (sec)", "Dynamic Prog (sec)"
    );
    out.push_str(&"-".repeat(65));
    out.push('\n');

    for row in rows {
        let verdict = match &row.outcome {
            Ok(agreement) if agreement.greedy_coins.is_none() => {
                "false (greedy left a remainder)".to_string()
            }
            Ok(agreement) => agreement.agrees().to_string(),
            Err(err) => format!("error: {err}"),
        };
        out.push_str(&format!(
            "{:<10} | {:<15.6} | {:<18.6} | {}\n",
            row.amount,
            row.greedy_time.as_secs_f64(),
            row.optimal_time.as_secs_f64(),
            verdict
        ));
    }
    out
}
