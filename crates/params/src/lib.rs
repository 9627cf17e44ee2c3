//! Compiled-in known-answer fixtures for the fipsgate self-test engine
//!
//! Every fixture bundles `&'static [u8]` slices into a small struct, one
//! per algorithm family. Inputs and expected answers are fixed at compile
//! time so a self-test never depends on runtime state.

#![cfg_attr(not(test), no_std)]

pub mod aead;
pub mod ecdsa;
pub mod hash;
pub mod kdf;
pub mod mac;
pub mod rsa;
pub mod sizes;
