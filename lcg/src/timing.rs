//! Timing harness comparing the ways of producing a sequence.

use lcgrandom::{materialize, stream_final, tail, Lcg, LcgError, SequenceLength, TAIL_LEN};
use log::debug;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Fill a buffer of exactly `n` elements
    Materialized,
    /// Fold over the recurrence keeping one value
    Streaming,
    /// Collect the generator iterator bounded with `take(n)`
    Iterator,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Materialized,
        Strategy::Streaming,
        Strategy::Iterator,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Materialized => "materialized",
            Strategy::Streaming => "streaming",
            Strategy::Iterator => "iterator",
        };
        f.pad(name)
    }
}

pub struct BenchResult {
    pub strategy: Strategy,
    /// Reported values: the tail for buffered strategies, the final element otherwise
    pub values: Vec<i32>,
    pub elapsed: Duration,
}

impl BenchResult {
    pub fn final_value(&self) -> Option<i32> {
        self.values.last().copied()
    }
}

pub fn run_strategy(
    strategy: Strategy,
    len: SequenceLength,
    seed: i32,
) -> Result<BenchResult, LcgError> {
    let start = Instant::now();
    let values = match strategy {
        Strategy::Materialized => {
            let data = materialize(len, seed)?;
            tail(&data, TAIL_LEN).to_vec()
        }
        Strategy::Streaming => vec![stream_final(len, seed)],
        Strategy::Iterator => {
            let data: Vec<i32> = Lcg::new(seed).take(len.get()).collect();
            tail(&data, TAIL_LEN).to_vec()
        }
    };
    let elapsed = start.elapsed();
    debug!("{} finished in {:?}", strategy, elapsed);

    Ok(BenchResult {
        strategy,
        values,
        elapsed,
    })
}

pub fn run_all(len: SequenceLength, seed: i32) -> Result<Vec<BenchResult>, LcgError> {
    Strategy::ALL
        .iter()
        .map(|&strategy| run_strategy(strategy, len, seed))
        .collect()
}

/// True when every strategy ended on the same element.
pub fn results_agree(results: &[BenchResult]) -> bool {
    results
        .windows(2)
        .all(|pair| pair[0].final_value() == pair[1].final_value())
}
