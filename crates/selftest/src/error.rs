//! Failure classification for known-answer test procedures
//!
//! Every variant records which algorithm failed. The dispatcher collapses
//! the whole taxonomy to a boolean before anything reaches a caller; the
//! variants exist so procedures can state precisely what went wrong and a
//! future entry point could surface the detail without touching them.

use core::fmt;

use fipsgate_api::types::AlgorithmId;

/// Why a known-answer test procedure failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfTestError {
    /// The provider rejected the fixture key material
    KeyRejected {
        /// Algorithm whose key failed to load
        algorithm: AlgorithmId,
    },

    /// A primitive operation reported an error
    PrimitiveFailure {
        /// Algorithm under test
        algorithm: AlgorithmId,
        /// Operation that failed
        operation: &'static str,
    },

    /// An output length differed from the fixture's expected length
    LengthMismatch {
        /// Algorithm under test
        algorithm: AlgorithmId,
        /// Expected length in bytes
        expected: usize,
        /// Produced length in bytes
        actual: usize,
    },

    /// Output bytes differed from the fixture's expected answer
    KnownAnswerMismatch {
        /// Algorithm under test
        algorithm: AlgorithmId,
    },

    /// The inverse direction rejected a result the forward direction
    /// produced
    RoundTripFailure {
        /// Algorithm under test
        algorithm: AlgorithmId,
    },
}

impl SelfTestError {
    /// Algorithm the failing procedure was testing.
    pub fn algorithm(&self) -> AlgorithmId {
        match *self {
            SelfTestError::KeyRejected { algorithm }
            | SelfTestError::PrimitiveFailure { algorithm, .. }
            | SelfTestError::LengthMismatch { algorithm, .. }
            | SelfTestError::KnownAnswerMismatch { algorithm }
            | SelfTestError::RoundTripFailure { algorithm } => algorithm,
        }
    }
}

impl fmt::Display for SelfTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfTestError::KeyRejected { algorithm } => {
                write!(f, "{} self-test: provider rejected fixture key", algorithm)
            }
            SelfTestError::PrimitiveFailure {
                algorithm,
                operation,
            } => {
                write!(f, "{} self-test: {} failed", algorithm, operation)
            }
            SelfTestError::LengthMismatch {
                algorithm,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} self-test: expected {} output bytes, got {}",
                    algorithm, expected, actual
                )
            }
            SelfTestError::KnownAnswerMismatch { algorithm } => {
                write!(
                    f,
                    "{} self-test: output differs from the known answer",
                    algorithm
                )
            }
            SelfTestError::RoundTripFailure { algorithm } => {
                write!(
                    f,
                    "{} self-test: inverse direction rejected the result",
                    algorithm
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SelfTestError {}
