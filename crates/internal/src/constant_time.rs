//! Constant-time comparison to prevent timing attacks
//!
//! Every known-answer check compares a computed, secret-derived value
//! against a reference vector. A short-circuiting scan would leak the
//! position of the first differing byte through timing, so comparison is an
//! XOR-and-OR reduction over the full length via `subtle`.

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. The byte
/// comparison runs in constant time regardless of the contents; only the
/// lengths, which are not secret, decide the early false return.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
///
/// For callers that fold the result into further constant-time selection
/// instead of branching on it.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Trait for types that can be compared in constant time
pub trait ConstantTimeEquals {
    /// Compare two values in constant time
    fn ct_equals(&self, other: &Self) -> bool;
}

/// Implement ConstantTimeEquals for all types that implement AsRef<[u8]>
impl<T: AsRef<[u8]>> ConstantTimeEquals for T {
    fn ct_equals(&self, other: &Self) -> bool {
        ct_eq(self.as_ref(), other.as_ref())
    }
}
