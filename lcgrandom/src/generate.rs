//! Sequence generation in the two output modes.
//!
//! Materialized mode keeps the whole sequence in a buffer and reports its
//! last [`TAIL_LEN`] elements. Streaming mode keeps only the running value
//! and reports the final element.

use crate::{lcg_step, Lcg, LcgError};
use log::{debug, trace};
use std::io::{self, Write};
use std::time::Instant;

/// Number of trailing elements reported in materialized mode.
pub const TAIL_LEN: usize = 10;

/// How the generated sequence is held and reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Store every element, report the last `TAIL_LEN`
    #[default]
    Materialized,
    /// Keep only the current element, report the final one
    Streaming,
}

/// A validated sequence length (always at least 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceLength(usize);

impl SequenceLength {
    pub fn new(n: i64) -> Result<Self, LcgError> {
        if n <= 0 {
            return Err(LcgError::NonPositiveLength(n));
        }
        usize::try_from(n)
            .map(SequenceLength)
            .map_err(|_| LcgError::LengthTooLarge(n))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Result of a [`generate`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generated {
    /// Last `min(n, TAIL_LEN)` elements, oldest first
    Tail(Vec<i32>),
    /// `element[n-1]`
    Final(i32),
}

impl Generated {
    pub fn values(&self) -> &[i32] {
        match self {
            Generated::Tail(values) => values,
            Generated::Final(value) => std::slice::from_ref(value),
        }
    }

    /// Write the values space-separated, followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", value)?;
        }
        writeln!(out)
    }
}

/// Generate the full sequence into an owned buffer of exactly `len` elements.
pub fn materialize(len: SequenceLength, seed: i32) -> Result<Vec<i32>, LcgError> {
    let n = len.get();
    let mut data = Vec::new();
    data.try_reserve_exact(n)
        .map_err(|_| LcgError::Allocation { requested: n })?;
    data.extend(Lcg::new(seed).take(n));
    Ok(data)
}

/// Run the recurrence `len - 1` times from `seed`, keeping only the running value.
pub fn stream_final(len: SequenceLength, seed: i32) -> i32 {
    (1..len.get()).fold(seed, |x, _| lcg_step(x))
}

/// The last `min(seq.len(), k)` elements of `seq`.
pub fn tail(seq: &[i32], k: usize) -> &[i32] {
    &seq[seq.len().saturating_sub(k)..]
}

/// Validate `n` and produce the sequence output for `seed` in the given mode.
pub fn generate(n: i64, seed: i32, mode: OutputMode) -> Result<Generated, LcgError> {
    let len = SequenceLength::new(n)?;
    debug!("Generating {} values from seed {} ({:?})", n, seed, mode);

    let start = Instant::now();
    let generated = match mode {
        OutputMode::Materialized => {
            let data = materialize(len, seed)?;
            Generated::Tail(tail(&data, TAIL_LEN).to_vec())
        }
        OutputMode::Streaming => Generated::Final(stream_final(len, seed)),
    };
    trace!("Generation took {:?}", start.elapsed());

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_length_validation() {
        assert_eq!(SequenceLength::new(0), Err(LcgError::NonPositiveLength(0)));
        assert_eq!(SequenceLength::new(-3), Err(LcgError::NonPositiveLength(-3)));
        assert_eq!(SequenceLength::new(1).map(SequenceLength::get), Ok(1));
    }

    #[test]
    fn test_materialize_exact_length() {
        let len = SequenceLength::new(15).unwrap();
        let data = materialize(len, 1).unwrap();
        assert_eq!(data.len(), 15);
        assert_eq!(data[0], 1);
        assert_eq!(data[14], 4960351);
    }

    #[test]
    fn test_stream_final_seed_42() {
        let len = SequenceLength::new(5).unwrap();
        assert_eq!(stream_final(len, 42), -1552882);
    }

    #[test]
    fn test_tail_shorter_than_k() {
        assert_eq!(tail(&[1, 2, 3], 10), &[1, 2, 3]);
        assert_eq!(tail(&[1, 2, 3], 2), &[2, 3]);
        assert!(tail(&[], 10).is_empty());
    }

    #[test]
    fn test_generate_materialized_seed_1() {
        let expected = vec![
            14212996, 790583, -11990498, 4094057, 13179272, 9990699, -3361726, -8844803, 570572,
            4960351,
        ];
        assert_eq!(
            generate(15, 1, OutputMode::Materialized),
            Ok(Generated::Tail(expected))
        );
    }

    #[test]
    fn test_generate_single_element() {
        assert_eq!(
            generate(1, -99, OutputMode::Materialized),
            Ok(Generated::Tail(vec![-99]))
        );
        assert_eq!(
            generate(1, -99, OutputMode::Streaming),
            Ok(Generated::Final(-99))
        );
    }

    #[test]
    fn test_generate_rejects_zero() {
        for mode in [OutputMode::Materialized, OutputMode::Streaming] {
            assert_eq!(generate(0, 1, mode), Err(LcgError::NonPositiveLength(0)));
        }
    }

    #[test]
    fn test_write_to_format() {
        let mut out = Vec::new();
        Generated::Tail(vec![42, 5293637, -10580249])
            .write_to(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "42 5293637 -10580249\n");

        let mut out = Vec::new();
        Generated::Final(-1552882).write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-1552882\n");
    }
}
