//! AES-256-GCM known-answer test
//!
//! Seals the fixture plaintext and compares ciphertext and tag against
//! their own expected vectors, then opens the expected ciphertext and
//! checks the recovered plaintext. A tag rejection on the open path is a
//! round-trip failure, not a mismatch.

use fipsgate_api::types::AlgorithmId;
use fipsgate_api::AeadProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{aead, sizes};

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::Aes256Gcm;

const PLAINTEXT_SIZE: usize = aead::AES_256_GCM_PLAINTEXT.len();

pub(crate) fn run<P: AeadProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &aead::AES_256_GCM;

    let mut ciphertext = [0u8; PLAINTEXT_SIZE];
    let mut tag = [0u8; sizes::GCM_TAG_SIZE];
    let written = provider
        .seal(
            fixture.key,
            fixture.nonce,
            fixture.aad,
            fixture.plaintext,
            &mut ciphertext,
            &mut tag,
        )
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "aead seal",
        })?;
    if written != fixture.ciphertext.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.ciphertext.len(),
            actual: written,
        });
    }
    if !ct_eq(&ciphertext[..written], fixture.ciphertext) || !ct_eq(&tag, fixture.tag) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }

    let mut plaintext = [0u8; PLAINTEXT_SIZE];
    let written = provider
        .open(
            fixture.key,
            fixture.nonce,
            fixture.aad,
            fixture.ciphertext,
            fixture.tag,
            &mut plaintext,
        )
        .map_err(|_| SelfTestError::RoundTripFailure {
            algorithm: ALGORITHM,
        })?;
    if written != fixture.plaintext.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.plaintext.len(),
            actual: written,
        });
    }
    if !ct_eq(&plaintext[..written], fixture.plaintext) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }
    Ok(())
}
