//! HMAC-SHA-256 known-answer test

use fipsgate_api::types::{AlgorithmId, DigestAlgorithm};
use fipsgate_api::MacProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{mac, sizes};

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::HmacSha256;

pub(crate) fn run<P: MacProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &mac::HMAC_SHA256;

    let mut output = [0u8; sizes::SHA256_OUTPUT_SIZE];
    let written = provider
        .hmac(
            DigestAlgorithm::Sha256,
            fixture.key,
            fixture.message,
            &mut output,
        )
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "hmac",
        })?;
    if written != fixture.mac.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.mac.len(),
            actual: written,
        });
    }
    if !ct_eq(&output[..written], fixture.mac) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }
    Ok(())
}
