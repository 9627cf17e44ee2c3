//! Error type definitions for provider operations
//!
//! Providers report failure through this one enum. The engine never
//! inspects variants to decide pass/fail (any `Err` fails the test in
//! progress); the structure exists so a failing adapter can be diagnosed
//! after the fact.

/// Primary error type for provider operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material was rejected during key construction or field loading
    InvalidKey {
        /// Operation that rejected the material
        context: &'static str,
    },

    /// A signature failed verification
    InvalidSignature {
        /// Operation that failed
        context: &'static str,
    },

    /// An input or output had the wrong length
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An output buffer was too small for the produced value
    BufferTooSmall {
        /// Operation that needed more space
        context: &'static str,
        /// Bytes the operation needed
        needed: usize,
        /// Bytes the caller supplied
        capacity: usize,
    },

    /// AEAD tag verification failed
    AuthenticationFailed {
        /// Algorithm that failed authentication
        context: &'static str,
    },

    /// The provider does not implement the requested algorithm
    UnsupportedAlgorithm {
        /// Algorithm that was requested
        context: &'static str,
    },

    /// A primitive operation failed for a reason with no dedicated variant
    Other {
        /// Operation that failed
        context: &'static str,
    },
}

/// Result type for provider operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidSignature { context } => {
                write!(f, "Invalid signature: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::BufferTooSmall {
                context,
                needed,
                capacity,
            } => {
                write!(
                    f,
                    "{}: output buffer too small (need {}, have {})",
                    context, needed, capacity
                )
            }
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::UnsupportedAlgorithm { context } => {
                write!(f, "Unsupported algorithm: {}", context)
            }
            Self::Other { context } => {
                write!(f, "Provider error: {}", context)
            }
        }
    }
}
