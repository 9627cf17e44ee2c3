//! Raw RSA encryption known-answer test
//!
//! Exercises the bare modular-exponentiation primitive in both
//! directions: the fixture plaintext must encrypt to the expected
//! ciphertext, and the expected ciphertext must decrypt back to the
//! plaintext. Without padding both directions are deterministic.

use fipsgate_api::types::{AlgorithmId, RsaKeyField};
use fipsgate_api::RsaProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{rsa, sizes};
use zeroize::Zeroizing;

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::RsaCrypt;

pub(crate) fn run<P: RsaProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &rsa::RSA_2048_RAW;

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

    let mut ciphertext = [0u8; sizes::RSA_2048_BYTE_LENGTH];
    let written = provider
        .raw_encrypt(&key, fixture.plaintext, &mut ciphertext)
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "raw encrypt",
        })?;
    if written != fixture.ciphertext.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.ciphertext.len(),
            actual: written,
        });
    }
    if !ct_eq(&ciphertext[..written], fixture.ciphertext) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }

    let mut plaintext = [0u8; sizes::RSA_2048_BYTE_LENGTH];
    let written = provider
        .raw_decrypt(&key, fixture.ciphertext, &mut plaintext)
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "raw decrypt",
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
