use crate::LcgError;

/// Default multiplier `A`.
pub const MULTIPLIER: i32 = 1140671485;
/// Default increment `C`.
pub const INCREMENT: i32 = 12820163;
/// Default modulus `M` (2^24).
pub const MODULUS: i32 = 16777216;

/// Constants of the recurrence `x[i] = (A * x[i-1] + C) mod M`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcgParams {
    multiplier: i32,
    increment: i32,
    modulus: i32,
}

impl LcgParams {
    pub const DEFAULT: LcgParams = LcgParams {
        multiplier: MULTIPLIER,
        increment: INCREMENT,
        modulus: MODULUS,
    };

    pub fn new(multiplier: i32, increment: i32, modulus: i32) -> Result<Self, LcgError> {
        if modulus == 0 {
            return Err(LcgError::ZeroModulus);
        }
        Ok(Self {
            multiplier,
            increment,
            modulus,
        })
    }

    pub fn multiplier(&self) -> i32 {
        self.multiplier
    }

    pub fn increment(&self) -> i32 {
        self.increment
    }

    pub fn modulus(&self) -> i32 {
        self.modulus
    }

    /// Apply one step of the recurrence.
    ///
    /// Multiplication and addition wrap at 32 bits. The remainder is Rust's `%`,
    /// which truncates toward zero, so a negative intermediate gives a negative
    /// (or zero) result rather than a value in `[0, M)`.
    #[inline]
    pub fn step(&self, x: i32) -> i32 {
        // wrapping_rem: i32::MIN % -1 is the only overflowing case
        self.multiplier
            .wrapping_mul(x)
            .wrapping_add(self.increment)
            .wrapping_rem(self.modulus)
    }
}

impl Default for LcgParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One step of the recurrence with the default constants.
#[inline]
pub fn lcg_step(x: i32) -> i32 {
    LcgParams::DEFAULT.step(x)
}

/// Linear congruential generator.
///
/// Iterating yields the seed first, then each following element of the
/// sequence. The iterator never ends; bound it with `take(n)`.
#[derive(Clone, Debug)]
pub struct Lcg {
    x: i32,
    params: LcgParams,
}

impl Lcg {
    /// Create a generator with the default constants.
    pub fn new(seed: i32) -> Self {
        Self::with_params(seed, LcgParams::DEFAULT)
    }

    pub fn with_params(seed: i32, params: LcgParams) -> Self {
        Self { x: seed, params }
    }

    pub fn params(&self) -> LcgParams {
        self.params
    }

    /// The element the next call to `next()` will yield.
    pub fn current(&self) -> i32 {
        self.x
    }

    /// Skip `k` elements without yielding them.
    pub fn advance(&mut self, k: usize) {
        for _ in 0..k {
            self.x = self.params.step(self.x);
        }
    }
}

impl Iterator for Lcg {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        let ret = self.x;
        self.x = self.params.step(ret);
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
