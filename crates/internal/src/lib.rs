//! Internal utilities for the fipsgate self-test engine
//!
//! Currently this is the constant-time comparison layer every known-answer
//! check goes through.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ConstantTimeEquals};
