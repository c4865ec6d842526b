// Test file for src/tensor/utils.rs

use super::*;

#[test]
fn test_range_len_exact_and_partial() {
    assert_eq!(range_len(0.0, 10.0, 2.0), 5.0);
    assert_eq!(range_len(0.0, 9.0, 2.0), 5.0);
    assert_eq!(range_len(0.0, 1.0, 0.3), 4.0);
}

#[test]
fn test_range_len_descending() {
    assert_eq!(range_len(10.0, 0.0, -3.0), 4.0);
}

#[test]
fn test_range_len_empty() {
    assert_eq!(range_len(5.0, 5.0, 1.0), 0.0);
}

#[test]
fn test_range_len_unbounded() {
    assert_eq!(range_len(0.0, 1e300, 1.0), 1e300);
}

#[test]
fn test_checked_numel_limits() {
    assert_eq!(checked_numel("arange", 0.0), Ok(0));
    assert_eq!(checked_numel("arange", MAX_NUMEL as f64), Ok(MAX_NUMEL));
    assert_eq!(
        checked_numel("linspace", MAX_NUMEL as f64 + 1.0),
        Err(SeqParityError::TooManyElements {
            operation: "linspace",
            requested: MAX_NUMEL as f64 + 1.0,
            max: MAX_NUMEL,
        })
    );
    assert!(checked_numel("arange", 1e300).is_err());
}
