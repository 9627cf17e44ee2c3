//! Error type for harness plumbing, distinct from engine verdicts

use thiserror::Error;

/// Failures inside the test harness itself.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A hex vector literal failed to decode
    #[error("invalid hex in vector '{name}': {source}")]
    Hex {
        /// Vector that failed to decode
        name: &'static str,
        /// Underlying decode error
        #[source]
        source: hex::FromHexError,
    },

    /// A compiled-in fixture disagrees with the published answer
    #[error("fixture '{name}' disagrees with the published answer")]
    FixtureMismatch {
        /// Fixture that disagreed
        name: &'static str,
    },
}
