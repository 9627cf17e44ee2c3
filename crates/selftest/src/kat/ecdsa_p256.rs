//! ECDSA P-256 known-answer test
//!
//! Requires deterministic nonce derivation from the provider: the
//! produced signature is compared byte-for-byte against the RFC 6979
//! vector, then handed back to the verifier.

use fipsgate_api::types::{AlgorithmId, DigestAlgorithm};
use fipsgate_api::EcdsaProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{ecdsa, sizes};
use zeroize::Zeroizing;

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::EcdsaP256;

pub(crate) fn run<P: EcdsaProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &ecdsa::ECDSA_P256_SHA256;

    let mut key = Zeroizing::new(provider.create_key().map_err(|_| {
        SelfTestError::KeyRejected {
            algorithm: ALGORITHM,
        }
    })?);
    provider
        .load_private_scalar(&mut key, fixture.private_scalar)
        .map_err(|_| SelfTestError::KeyRejected {
            algorithm: ALGORITHM,
        })?;
    provider
        .load_public_point(&mut key, fixture.public_x, fixture.public_y)
        .map_err(|_| SelfTestError::KeyRejected {
            algorithm: ALGORITHM,
        })?;

    let mut signature = [0u8; sizes::P256_SIGNATURE_SIZE];
    let written = provider
        .sign(
            &key,
            DigestAlgorithm::Sha256,
            fixture.message_hash,
            &mut signature,
        )
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "ecdsa sign",
        })?;
    if written != fixture.signature.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.signature.len(),
            actual: written,
        });
    }
    if !ct_eq(&signature[..written], fixture.signature) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }

    provider
        .verify(
            &key,
            DigestAlgorithm::Sha256,
            fixture.message_hash,
            &signature[..written],
        )
        .map_err(|_| SelfTestError::RoundTripFailure {
            algorithm: ALGORITHM,
        })
}
