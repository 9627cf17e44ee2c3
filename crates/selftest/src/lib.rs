//! Known-answer self-test engine
//!
//! Before a FIPS-mode application may use a cryptographic algorithm it
//! must prove, once per context, that the algorithm still computes a
//! fixed known answer. This crate holds the engine: one test procedure
//! per algorithm family, the context that records outcomes, and the
//! dispatcher that reduces everything to a single boolean answer.
//!
//! The contract is fail-closed. A failed test does not only answer
//! `false` for its own algorithm, it poisons the context so every later
//! call answers `false` too. Passing answers are cached: asking about
//! the same algorithm twice does the work once.
//!
//! ```ignore
//! use fipsgate_selftest::{run_all_self_tests, SelfTestContext};
//!
//! let mut context = SelfTestContext::new();
//! if !run_all_self_tests(&mut context, &provider) {
//!     // refuse to serve cryptography
//! }
//! assert!(context.all_passed());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod context;
pub mod dispatch;
pub mod error;
mod kat;

pub use context::SelfTestContext;
pub use dispatch::{run_all_self_tests, run_self_test};
pub use error::SelfTestError;
