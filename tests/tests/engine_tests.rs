//! Happy-path engine behavior against the fixture-replaying provider

use fipsgate_api::types::{AlgorithmId, AlgorithmSet};
use fipsgate_selftest::{run_all_self_tests, run_self_test, SelfTestContext};
use fipsgate_tests::mock::{corruption_width, MockProvider};
use fipsgate_tests::vectors;

#[test]
fn fixtures_agree_with_published_answers() {
    vectors::verify_against_params().unwrap();
}

#[test]
fn every_family_passes_against_the_passing_provider() {
    let provider = MockProvider::passing();
    let mut context = SelfTestContext::new();
    for algorithm in AlgorithmId::ALL {
        assert!(
            run_self_test(&mut context, &provider, algorithm),
            "{algorithm} failed"
        );
    }
    assert!(context.all_passed());
    assert_eq!(context.tested(), AlgorithmSet::ALL);
    assert_eq!(context.passed(), AlgorithmSet::ALL);
}

#[test]
fn run_all_reports_the_conjunction() {
    let provider = MockProvider::passing();
    let mut context = SelfTestContext::new();
    assert!(run_all_self_tests(&mut context, &provider));
    assert!(context.all_passed());

    let provider = MockProvider::passing().failing(AlgorithmId::HmacSha256);
    let mut context = SelfTestContext::new();
    assert!(!run_all_self_tests(&mut context, &provider));
    assert!(!context.all_passed());
}

#[test]
fn second_run_is_answered_from_the_context() {
    let provider = MockProvider::passing();
    let mut context = SelfTestContext::new();
    assert!(run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert!(run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert_eq!(provider.calls.primary(AlgorithmId::Sha256), 1);
}

#[test]
fn each_family_runs_its_primitive_once_across_repeats() {
    let provider = MockProvider::passing();
    let mut context = SelfTestContext::new();
    assert!(run_all_self_tests(&mut context, &provider));
    assert!(run_all_self_tests(&mut context, &provider));
    for algorithm in AlgorithmId::ALL {
        assert_eq!(provider.calls.primary(algorithm), 1, "{algorithm} re-ran");
    }
}

#[test]
fn failed_algorithm_is_not_retried() {
    let provider = MockProvider::passing().failing(AlgorithmId::Sha256);
    let mut context = SelfTestContext::new();
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert_eq!(provider.calls.primary(AlgorithmId::Sha256), 1);
}

#[test]
fn rsa_signature_scenario_end_to_end() {
    // Clean pass: answer true, both marks set.
    let provider = MockProvider::passing();
    let mut context = SelfTestContext::new();
    assert!(run_self_test(&mut context, &provider, AlgorithmId::RsaSsa));
    assert!(context.tested().contains(AlgorithmId::RsaSsa));
    assert!(context.passed().contains(AlgorithmId::RsaSsa));

    // Corrupt the last signature byte: answer false, the algorithm is
    // marked tested but not passed.
    let last = corruption_width(AlgorithmId::RsaSsa) - 1;
    let provider = MockProvider::passing().corrupting(AlgorithmId::RsaSsa, last);
    let mut context = SelfTestContext::new();
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::RsaSsa));
    assert!(context.tested().contains(AlgorithmId::RsaSsa));
    assert!(!context.passed().contains(AlgorithmId::RsaSsa));
}

#[test]
fn context_reports_partial_progress() {
    let provider = MockProvider::passing();
    let mut context = SelfTestContext::new();
    assert!(run_self_test(&mut context, &provider, AlgorithmId::Sha256));
    assert!(run_self_test(&mut context, &provider, AlgorithmId::HkdfSha256));

    let expected = AlgorithmSet::new()
        .with(AlgorithmId::Sha256)
        .with(AlgorithmId::HkdfSha256);
    assert_eq!(context.tested(), expected);
    assert_eq!(context.passed(), expected);
    assert!(!context.all_passed());
}
