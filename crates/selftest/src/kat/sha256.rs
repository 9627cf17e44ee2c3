//! SHA-256 known-answer test

use fipsgate_api::types::{AlgorithmId, DigestAlgorithm};
use fipsgate_api::HashProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{hash, sizes};

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::Sha256;

pub(crate) fn run<P: HashProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &hash::SHA256;

    let mut digest = [0u8; sizes::SHA256_OUTPUT_SIZE];
    let written = provider
        .digest(DigestAlgorithm::Sha256, fixture.message, &mut digest)
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "digest",
        })?;
    if written != fixture.digest.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.digest.len(),
            actual: written,
        });
    }
    if !ct_eq(&digest[..written], fixture.digest) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }
    Ok(())
}
