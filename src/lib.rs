//! # fipsgate
//!
//! A FIPS-mode self-test engine for cryptographic libraries.
//!
//! Before a FIPS-validated build may use a cryptographic primitive, the
//! primitive must pass a Known-Answer Test (KAT): fixed inputs are fed
//! through it and the output is compared against a pre-recorded expected
//! result. `fipsgate` owns that decision. It tracks, for the lifetime of
//! the process, which algorithms have been tested and which passed, and it
//! refuses every further request once any test has failed.
//!
//! The primitives themselves live outside this crate. They are reached
//! through the provider traits in [`api`], so the engine works against any
//! backing implementation that can satisfy the narrow capability surface
//! (key loading, sign/verify, seal/open, digest, MAC, KDF).
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! fipsgate = "0.1"
//! ```
//!
//! ```ignore
//! use fipsgate::prelude::*;
//!
//! let mut ctx = SelfTestContext::new();
//! if !run_all_self_tests(&mut ctx, &provider) {
//!     // refuse to enter FIPS mode
//! }
//! assert!(ctx.all_passed());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`fipsgate-api`]: Provider traits, algorithm identifiers and sets
//! - [`fipsgate-internal`]: Constant-time comparison utilities
//! - [`fipsgate-params`]: Compiled-in known-answer fixtures
//! - [`fipsgate-selftest`]: The self-test context, dispatcher and KATs

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use fipsgate_api as api;
pub use fipsgate_internal as internal;
pub use fipsgate_params as params;
pub use fipsgate_selftest as selftest;

/// Common imports for fipsgate users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export identifier and set types
    pub use crate::api::{AlgorithmId, AlgorithmSet, DigestAlgorithm, RsaKeyField};

    // Re-export provider traits
    pub use crate::api::{
        AeadProvider, CryptoProvider, EcdsaProvider, HashProvider, KdfProvider, MacProvider,
        RsaProvider,
    };

    // Re-export the engine surface
    pub use crate::selftest::{
        run_all_self_tests, run_self_test, SelfTestContext, SelfTestError,
    };

    // Constant-time comparison
    pub use crate::internal::ct_eq;
}
