use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_cast_to_i32_truncates() -> Result<(), SeqParityError> {
    let buf = cast_values(&[0.0, 2.5, 7.5, -1.9], DType::I32)?;
    assert_eq!(buf.dtype(), DType::I32);
    assert_eq!(buf.to_f64_vec(), vec![0.0, 2.0, 7.0, -1.0]);
    Ok(())
}

#[test]
fn test_cast_i8_out_of_range() {
    let result = cast_values(&[100.0, 200.0], DType::I8);
    assert_eq!(
        result.err(),
        Some(SeqParityError::ValueOutOfRange {
            value: 200.0,
            dtype: DType::I8
        })
    );
}

#[test]
fn test_cast_negative_to_unsigned_fails() {
    let result = cast_values(&[-1.0], DType::U16);
    assert!(matches!(
        result,
        Err(SeqParityError::ValueOutOfRange { dtype: DType::U16, .. })
    ));
}

#[test]
fn test_cast_f16_overflow() {
    let result = cast_values(&[70000.0], DType::F16);
    assert!(matches!(
        result,
        Err(SeqParityError::ValueOutOfRange { dtype: DType::F16, .. })
    ));
}

#[test]
fn test_cast_bf16_rounds() -> Result<(), SeqParityError> {
    let buf = cast_values(&[0.1], DType::BF16)?;
    let widened = buf.to_f64_vec()[0];
    assert_abs_diff_eq!(widened, 0.1, epsilon = 1e-3);
    assert_ne!(widened, 0.1);
    Ok(())
}

#[test]
fn test_cast_bool() -> Result<(), SeqParityError> {
    let buf = cast_values(&[0.0, 0.5, -3.0], DType::Bool)?;
    assert_eq!(buf.to_f64_vec(), vec![0.0, 1.0, 1.0]);
    Ok(())
}
