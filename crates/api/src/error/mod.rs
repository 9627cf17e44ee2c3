//! Error handling for provider adapters

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Standard library error conversions
#[cfg(feature = "std")]
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
