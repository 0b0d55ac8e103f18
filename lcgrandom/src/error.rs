/// Errors reported by sequence generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LcgError {
    /// Requested sequence length was zero or negative
    NonPositiveLength(i64),
    /// Requested sequence length does not fit in the address space
    LengthTooLarge(i64),
    /// The sequence buffer could not be allocated
    Allocation { requested: usize },
    /// Generator parameters with a modulus of zero
    ZeroModulus,
}

impl std::fmt::Display for LcgError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LcgError::NonPositiveLength(n) => {
                write!(f, "Sequence length must be at least 1, got {}", n)
            }
            LcgError::LengthTooLarge(n) => write!(f, "Sequence length {} is too large", n),
            LcgError::Allocation { requested } => {
                write!(f, "Could not allocate a buffer for {} values", requested)
            }
            LcgError::ZeroModulus => write!(f, "Modulus must be non-zero"),
        }
    }
}

impl std::error::Error for LcgError {}
