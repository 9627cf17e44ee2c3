//! RSASSA-PKCS1-v1_5 known-answer test
//!
//! Signs the fixture digest with the fixture RSA-2048 key, compares the
//! signature byte-for-byte against the expected answer, then checks that
//! verification accepts it. PKCS#1 v1.5 padding is deterministic, so the
//! comparison is exact.

use fipsgate_api::types::{AlgorithmId, DigestAlgorithm, RsaKeyField};
use fipsgate_api::RsaProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{rsa, sizes};
use zeroize::Zeroizing;

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::RsaSsa;

pub(crate) fn run<P: RsaProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &rsa::RSA_2048_PKCS1_SHA256;

    let mut key = Zeroizing::new(provider.create_key().map_err(|_| {
        SelfTestError::KeyRejected {
            algorithm: ALGORITHM,
        }
    })?);
    load(provider, &mut key, RsaKeyField::Modulus, fixture.modulus)?;
    load(
        provider,
        &mut key,
        RsaKeyField::PublicExponent,
        fixture.public_exponent,
    )?;
    load(
        provider,
        &mut key,
        RsaKeyField::PrivateExponent,
        fixture.private_exponent,
    )?;

    let mut signature = [0u8; sizes::RSA_2048_BYTE_LENGTH];
    let written = provider
        .pkcs1v15_sign(
            &key,
            DigestAlgorithm::Sha256,
            fixture.message_hash,
            &mut signature,
        )
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "pkcs1v15 sign",
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
        .pkcs1v15_verify(
            &key,
            DigestAlgorithm::Sha256,
            fixture.message_hash,
            &signature[..written],
        )
        .map_err(|_| SelfTestError::RoundTripFailure {
            algorithm: ALGORITHM,
        })
}

fn load<P: RsaProvider>(
    provider: &P,
    key: &mut P::Key,
    field: RsaKeyField,
    value: &[u8],
) -> Result<(), SelfTestError> {
    provider
        .load_key_field(key, field, value)
        .map_err(|_| SelfTestError::KeyRejected {
            algorithm: ALGORITHM,
        })
}
