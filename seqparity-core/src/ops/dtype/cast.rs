use std::sync::Arc;

use half::{bf16, f16};
use log::trace;
use num_traits::NumCast;

use crate::buffer::CpuBuffer;
use crate::error::SeqParityError;
use crate::types::DType;

/// Converts `f64` values into a typed buffer of `new_dtype`.
///
/// Integer targets truncate toward zero. A value that does not fit the target
/// type is an error rather than a wrap-around:
/// - integers: checked through `num_traits::NumCast`,
/// - floats: a finite input that becomes infinite after narrowing.
///
/// `Bool` maps every nonzero value to `true`.
///
/// # Example
/// ```
/// use seqparity_core::DType;
/// use seqparity_core::ops::dtype::cast_values;
/// let buf = cast_values(&[0.0, 2.5, 7.9], DType::I32).unwrap();
/// assert_eq!(buf.to_f64_vec(), vec![0.0, 2.0, 7.0]);
/// ```
pub fn cast_values(values: &[f64], new_dtype: DType) -> Result<CpuBuffer, SeqParityError> {
    trace!("cast_values: {} values -> {}", values.len(), new_dtype);
    let buffer = match new_dtype {
        DType::I8 => CpuBuffer::I8(Arc::new(cast_integral(values, new_dtype)?)),
        DType::I16 => CpuBuffer::I16(Arc::new(cast_integral(values, new_dtype)?)),
        DType::I32 => CpuBuffer::I32(Arc::new(cast_integral(values, new_dtype)?)),
        DType::I64 => CpuBuffer::I64(Arc::new(cast_integral(values, new_dtype)?)),
        DType::U8 => CpuBuffer::U8(Arc::new(cast_integral(values, new_dtype)?)),
        DType::U16 => CpuBuffer::U16(Arc::new(cast_integral(values, new_dtype)?)),
        DType::U32 => CpuBuffer::U32(Arc::new(cast_integral(values, new_dtype)?)),
        DType::U64 => CpuBuffer::U64(Arc::new(cast_integral(values, new_dtype)?)),
        DType::F16 => CpuBuffer::F16(Arc::new(narrow_float(values, new_dtype, f16::from_f64, |x| {
            x.is_infinite()
        })?)),
        DType::BF16 => CpuBuffer::BF16(Arc::new(narrow_float(
            values,
            new_dtype,
            bf16::from_f64,
            |x| x.is_infinite(),
        )?)),
        DType::F32 => CpuBuffer::F32(Arc::new(narrow_float(values, new_dtype, |v| v as f32, |x| {
            x.is_infinite()
        })?)),
        DType::F64 => CpuBuffer::F64(Arc::new(values.to_vec())),
        DType::Bool => CpuBuffer::Bool(Arc::new(values.iter().map(|&v| v != 0.0).collect())),
    };
    Ok(buffer)
}

fn cast_integral<T: NumCast>(values: &[f64], dtype: DType) -> Result<Vec<T>, SeqParityError> {
    values
        .iter()
        .map(|&value| {
            let cast: Option<T> = NumCast::from(value);
            cast.ok_or(SeqParityError::ValueOutOfRange { value, dtype })
        })
        .collect()
}

fn narrow_float<T>(
    values: &[f64],
    dtype: DType,
    narrow: impl Fn(f64) -> T,
    overflowed: impl Fn(&T) -> bool,
) -> Result<Vec<T>, SeqParityError> {
    values
        .iter()
        .map(|&value| {
            let narrowed = narrow(value);
            if value.is_finite() && overflowed(&narrowed) {
                Err(SeqParityError::ValueOutOfRange { value, dtype })
            } else {
                Ok(narrowed)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "cast_test.rs"]
mod tests;
