//! One failure must pin every later answer to false

use fipsgate_api::types::AlgorithmId;
use fipsgate_selftest::{run_self_test, SelfTestContext};
use fipsgate_tests::mock::MockProvider;

#[test]
fn failure_of_any_algorithm_fails_every_other() {
    for failing in AlgorithmId::ALL {
        for queried in AlgorithmId::ALL {
            if failing == queried {
                continue;
            }
            let provider = MockProvider::passing().failing(failing);
            let mut context = SelfTestContext::new();
            assert!(!run_self_test(&mut context, &provider, failing));
            assert!(
                !run_self_test(&mut context, &provider, queried),
                "{queried} passed after {failing} failed"
            );
            // The poisoned call must not reach the provider.
            assert_eq!(provider.calls.primary(queried), 0);
        }
    }
}

#[test]
fn previously_passed_algorithms_answer_false_after_a_failure() {
    let provider = MockProvider::passing().failing(AlgorithmId::EcdsaP256);
    let mut context = SelfTestContext::new();
    assert!(run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::EcdsaP256));
    // SHA-256 passed above; the poisoned context now denies it anyway.
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert_eq!(provider.calls.primary(AlgorithmId::Sha256), 1);
}

#[test]
fn only_a_fresh_context_recovers() {
    let provider = MockProvider::passing().failing(AlgorithmId::Sha256);
    let mut context = SelfTestContext::new();
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::HmacSha256));

    let healthy = MockProvider::passing();
    let mut fresh = SelfTestContext::new();
    assert!(run_self_test(&mut fresh, &healthy, AlgorithmId::Sha256));
    assert!(run_self_test(&mut fresh, &healthy, AlgorithmId::HmacSha256));
    assert!(fresh.passed().contains(AlgorithmId::Sha256));
}

#[test]
fn rejected_rsa_key_fails_the_test() {
    let provider = MockProvider::passing().rejecting_keys(AlgorithmId::RsaSsa);
    let mut context = SelfTestContext::new();
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::RsaSsa));
    assert!(context.tested().contains(AlgorithmId::RsaSsa));
    assert!(!context.passed().contains(AlgorithmId::RsaSsa));
}

#[test]
fn rejected_ec_key_does_not_affect_rsa() {
    let provider = MockProvider::passing().rejecting_keys(AlgorithmId::EcdsaP256);
    let mut context = SelfTestContext::new();
    assert!(run_self_test(&mut context, &provider, AlgorithmId::RsaSsa));
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::EcdsaP256));
}

#[test]
fn broken_inverse_direction_fails_its_family() {
    for algorithm in [
        AlgorithmId::RsaSsa,
        AlgorithmId::EcdsaP256,
        AlgorithmId::Aes256Gcm,
    ] {
        let provider = MockProvider::passing().breaking_round_trip(algorithm);
        let mut context = SelfTestContext::new();
        assert!(
            !run_self_test(&mut context, &provider, algorithm),
            "{algorithm} passed with a broken inverse direction"
        );
        assert!(context.tested().contains(algorithm));
        assert!(!context.passed().contains(algorithm));
    }
}

#[test]
fn families_without_an_inverse_ignore_the_round_trip_fault() {
    for algorithm in [
        AlgorithmId::Sha256,
        AlgorithmId::HmacSha256,
        AlgorithmId::HkdfSha256,
        AlgorithmId::RsaCrypt,
    ] {
        let provider = MockProvider::passing().breaking_round_trip(algorithm);
        let mut context = SelfTestContext::new();
        assert!(
            run_self_test(&mut context, &provider, algorithm),
            "{algorithm} has no verify step and should pass"
        );
    }
}
