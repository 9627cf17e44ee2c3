//! The comparator must look at every byte and never trust length alone

use fipsgate_internal::{ct_eq, ct_eq_choice, ConstantTimeEquals};
use subtle::Choice;

#[test]
fn equal_inputs_compare_equal() {
    let answer = [0x42u8; 64];
    assert!(ct_eq(answer, answer));
    assert!(answer.ct_equals(&answer));
}

#[test]
fn every_byte_position_is_significant() {
    let base = [0xa5u8; 96];
    for index in 0..base.len() {
        let mut other = base;
        other[index] ^= 0x80;
        assert!(!ct_eq(base, other), "flip at {index} went unnoticed");
        other[index] = base[index] ^ 0x01;
        assert!(!ct_eq(base, other), "low-bit flip at {index} went unnoticed");
    }
}

#[test]
fn length_mismatch_is_rejected() {
    let long = [0u8; 32];
    assert!(!ct_eq(&long[..], &long[..31]));
    assert!(!ct_eq(&long[..31], &long[..]));

    let verdict: Choice = ct_eq_choice(&long[..], &long[..31]);
    assert!(!bool::from(verdict));
}

#[test]
fn empty_inputs_are_equal() {
    assert!(ct_eq([0u8; 0], [0u8; 0]));
}

#[test]
fn choice_and_bool_forms_agree() {
    let a = [1u8, 2, 3];
    let b = [1u8, 2, 4];
    assert_eq!(bool::from(ct_eq_choice(a, b)), ct_eq(a, b));
    assert_eq!(bool::from(ct_eq_choice(a, a)), ct_eq(a, a));
}
