//! A single flipped bit or missing byte anywhere must flip the verdict

use fipsgate_api::types::AlgorithmId;
use fipsgate_selftest::{run_self_test, SelfTestContext};
use fipsgate_tests::mock::{corruption_width, MockProvider};

#[test]
fn any_corrupted_output_byte_fails_its_family() {
    for algorithm in AlgorithmId::ALL {
        for index in 0..corruption_width(algorithm) {
            let provider = MockProvider::passing().corrupting(algorithm, index);
            let mut context = SelfTestContext::new();
            assert!(
                !run_self_test(&mut context, &provider, algorithm),
                "{algorithm} passed with output byte {index} corrupted"
            );
        }
    }
}

#[test]
fn corruption_is_recorded_as_tested_but_not_passed() {
    for algorithm in AlgorithmId::ALL {
        let provider = MockProvider::passing().corrupting(algorithm, 0);
        let mut context = SelfTestContext::new();
        assert!(!run_self_test(&mut context, &provider, algorithm));
        assert!(context.tested().contains(algorithm));
        assert!(!context.passed().contains(algorithm));
    }
}

#[test]
fn short_output_fails_every_family() {
    for algorithm in AlgorithmId::ALL {
        let provider = MockProvider::passing().truncating(algorithm);
        let mut context = SelfTestContext::new();
        assert!(
            !run_self_test(&mut context, &provider, algorithm),
            "{algorithm} passed with a short output"
        );
    }
}

#[test]
fn corruption_in_one_family_does_not_touch_another() {
    // SHA-256 replays corrupted; RSA asked first on the same context
    // still passes, then the corrupted family fails.
    let provider = MockProvider::passing().corrupting(AlgorithmId::Sha256, 0);
    let mut context = SelfTestContext::new();
    assert!(run_self_test(&mut context, &provider, AlgorithmId::RsaSsa));
    assert!(!run_self_test(&mut context, &provider, AlgorithmId::Sha256));
}
