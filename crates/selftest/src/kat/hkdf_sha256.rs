//! HKDF-SHA-256 known-answer test
//!
//! Checks the extract and expand steps separately. Expand runs from the
//! fixture pseudorandom key rather than the freshly extracted one, so a
//! broken extract cannot mask a broken expand.

use fipsgate_api::types::{AlgorithmId, DigestAlgorithm};
use fipsgate_api::KdfProvider;
use fipsgate_internal::ct_eq;
use fipsgate_params::{kdf, sizes};

use crate::error::SelfTestError;

const ALGORITHM: AlgorithmId = AlgorithmId::HkdfSha256;

const OKM_SIZE: usize = kdf::HKDF_SHA256_OKM.len();

pub(crate) fn run<P: KdfProvider>(provider: &P) -> Result<(), SelfTestError> {
    let fixture = &kdf::HKDF_SHA256;

    let mut prk = [0u8; sizes::SHA256_OUTPUT_SIZE];
    let written = provider
        .hkdf_extract(DigestAlgorithm::Sha256, fixture.salt, fixture.ikm, &mut prk)
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "hkdf extract",
        })?;
    if written != fixture.prk.len() {
        return Err(SelfTestError::LengthMismatch {
            algorithm: ALGORITHM,
            expected: fixture.prk.len(),
            actual: written,
        });
    }
    if !ct_eq(&prk[..written], fixture.prk) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }

    let mut okm = [0u8; OKM_SIZE];
    provider
        .hkdf_expand(DigestAlgorithm::Sha256, fixture.prk, fixture.info, &mut okm)
        .map_err(|_| SelfTestError::PrimitiveFailure {
            algorithm: ALGORITHM,
            operation: "hkdf expand",
        })?;
    if !ct_eq(&okm, fixture.okm) {
        return Err(SelfTestError::KnownAnswerMismatch {
            algorithm: ALGORITHM,
        });
    }
    Ok(())
}
