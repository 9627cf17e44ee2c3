//! Gating and dispatch for the self-test procedures

use fipsgate_api::traits::CryptoProvider;
use fipsgate_api::types::AlgorithmId;

use crate::context::SelfTestContext;
use crate::kat;

/// Run the known-answer test for one algorithm.
///
/// Order of the gates:
///
/// 1. Poison gate. If any earlier run failed, `tested` and `passed` are
///    out of step and the answer is `false` without touching the
///    provider. Only a fresh context recovers.
/// 2. Run-once gate. An algorithm already marked tested is not re-run;
///    the poison gate has already guaranteed it passed, so the answer is
///    `true`.
/// 3. The procedure runs, the outcome is recorded, and the boolean
///    verdict is returned. The tested mark is unconditional; a failing
///    algorithm is never retried on this context.
pub fn run_self_test<P: CryptoProvider>(
    context: &mut SelfTestContext,
    provider: &P,
    algorithm: AlgorithmId,
) -> bool {
    if context.tested() != context.passed() {
        return false;
    }
    if context.tested().contains(algorithm) {
        return true;
    }
    let pass = kat::execute(provider, algorithm).is_ok();
    context.record(algorithm, pass);
    pass
}

/// Run every known-answer test in declaration order.
///
/// Returns `true` only when all algorithms pass. The first failure
/// poisons the context, so the remaining algorithms are reported failed
/// without running.
pub fn run_all_self_tests<P: CryptoProvider>(
    context: &mut SelfTestContext,
    provider: &P,
) -> bool {
    let mut all = true;
    for algorithm in AlgorithmId::ALL {
        all &= run_self_test(context, provider, algorithm);
    }
    all
}
