//! Provider traits and shared types for the fipsgate self-test engine
//!
//! This crate defines the capability surface the engine consumes: per-family
//! provider traits for the primitives under test, the algorithm identifier
//! and set types the test-status state machine is built on, and the error
//! type adapters report failures through. The engine itself lives in
//! `fipsgate-selftest`; primitive implementations live outside the
//! workspace entirely.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{
    AeadProvider, CryptoProvider, EcdsaProvider, HashProvider, KdfProvider, MacProvider,
    RsaProvider,
};

// Re-export trait modules for direct access
pub use traits::{aead, digest, ecdsa, kdf, mac, rsa};
