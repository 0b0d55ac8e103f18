//! Linear congruential generator over 32-bit signed integers.
//!
//! The recurrence is `x[i] = (A * x[i-1] + C) mod M` with `A = 1140671485`,
//! `C = 12820163` and `M = 2^24`. Multiplication and addition wrap at 32 bits
//! and the remainder keeps the sign of the dividend, so elements can be negative.

mod error;
mod generate;
mod lcg;

pub use error::LcgError;
pub use generate::{
    generate, materialize, stream_final, tail, Generated, OutputMode, SequenceLength, TAIL_LEN,
};
pub use lcg::{lcg_step, Lcg, LcgParams, INCREMENT, MODULUS, MULTIPLIER};
