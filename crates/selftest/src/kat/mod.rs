//! Known-answer test procedures, one module per algorithm family
//!
//! Every procedure follows the same outline: build the fixture key, run
//! the primitive into a caller-owned buffer, check the produced length,
//! compare against the expected answer in constant time, and where an
//! inverse direction exists, check that it accepts the result. Procedures
//! return a classified error; the dispatcher reduces it to the boolean
//! verdict.

mod aes_gcm;
mod ecdsa_p256;
mod hkdf_sha256;
mod hmac_sha256;
mod rsa_crypt;
mod rsa_ssa;
mod sha256;

use fipsgate_api::traits::CryptoProvider;
use fipsgate_api::types::AlgorithmId;

use crate::error::SelfTestError;

/// Run the procedure for `algorithm` against `provider`.
pub(crate) fn execute<P: CryptoProvider>(
    provider: &P,
    algorithm: AlgorithmId,
) -> Result<(), SelfTestError> {
    match algorithm {
        AlgorithmId::RsaSsa => rsa_ssa::run(provider),
        AlgorithmId::RsaCrypt => rsa_crypt::run(provider),
        AlgorithmId::EcdsaP256 => ecdsa_p256::run(provider),
        AlgorithmId::Aes256Gcm => aes_gcm::run(provider),
        AlgorithmId::Sha256 => sha256::run(provider),
        AlgorithmId::HmacSha256 => hmac_sha256::run(provider),
        AlgorithmId::HkdfSha256 => hkdf_sha256::run(provider),
    }
}
