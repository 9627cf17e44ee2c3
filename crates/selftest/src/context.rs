//! Mutable record of which algorithms were tested and which passed

use fipsgate_api::types::{AlgorithmId, AlgorithmSet};

/// Self-test progress for one scope of use.
///
/// Two sets move in lockstep: `tested` gains an algorithm whenever its
/// known-answer test finishes, `passed` only when the run succeeded. The
/// pair staying equal is what the dispatcher checks before doing anything
/// else, so one recorded failure pins every later answer to `false` until
/// the caller builds a fresh context.
///
/// The context is explicit state: callers own it, thread it through every
/// call, and decide its lifetime. Nothing here touches globals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfTestContext {
    tested: AlgorithmSet,
    passed: AlgorithmSet,
}

impl SelfTestContext {
    /// Fresh context with nothing tested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Algorithms whose known-answer test has finished at least once.
    pub fn tested(&self) -> AlgorithmSet {
        self.tested
    }

    /// Algorithms whose known-answer test finished and passed.
    pub fn passed(&self) -> AlgorithmSet {
        self.passed
    }

    /// True once every algorithm has been tested and passed.
    pub fn all_passed(&self) -> bool {
        self.passed == AlgorithmSet::ALL
    }

    /// Record one finished run. The algorithm is always marked tested;
    /// `passed` tracks the most recent verdict, so a failure clears the
    /// bit even though the run-once gate means it cannot be set yet.
    pub(crate) fn record(&mut self, algorithm: AlgorithmId, pass: bool) {
        self.tested.insert(algorithm);
        if pass {
            self.passed.insert(algorithm);
        } else {
            self.passed.remove(algorithm);
        }
    }
}
