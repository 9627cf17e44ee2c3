//! Capability traits for the primitives under test
//!
//! The engine consumes primitives through these traits and nothing else.
//! Each family gets its own trait so a KAT procedure can be generic over
//! exactly the capability it exercises; [`CryptoProvider`] bundles them for
//! the dispatcher, which has to reach every family.

pub mod aead;
pub mod digest;
pub mod ecdsa;
pub mod kdf;
pub mod mac;
pub mod rsa;

pub use aead::AeadProvider;
pub use digest::HashProvider;
pub use ecdsa::EcdsaProvider;
pub use kdf::KdfProvider;
pub use mac::MacProvider;
pub use rsa::RsaProvider;

/// Everything the self-test dispatcher needs from a primitive library.
///
/// Blanket-implemented for any type that implements all six family traits,
/// so providers never name this trait directly.
pub trait CryptoProvider:
    RsaProvider + EcdsaProvider + AeadProvider + HashProvider + MacProvider + KdfProvider
{
}

impl<T> CryptoProvider for T where
    T: RsaProvider + EcdsaProvider + AeadProvider + HashProvider + MacProvider + KdfProvider
{
}
