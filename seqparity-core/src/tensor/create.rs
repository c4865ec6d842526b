// src/tensor/create.rs

use log::debug;

use crate::error::SeqParityError;
use crate::ops::dtype::cast_values;
use crate::scalar::Scalar;
use crate::tensor::utils::{checked_numel, range_len};
use crate::tensor::Tensor;
use crate::types::DType;

/// Reads a numeric creation argument, rejecting non-numbers and non-finite values.
fn numeric_arg(
    operation: &'static str,
    argument: &'static str,
    value: &Scalar,
) -> Result<f64, SeqParityError> {
    let number = value
        .as_f64()
        .ok_or_else(|| SeqParityError::InvalidArgumentType {
            operation,
            argument,
            found: value.type_name().to_string(),
        })?;
    if !number.is_finite() {
        return Err(SeqParityError::NonFiniteBound {
            operation,
            argument,
            value: number,
        });
    }
    Ok(number)
}

/// Creates a 1-D tensor with values from `start` to `end` (exclusive) spaced by `step`.
///
/// The output dtype is `dtype` if given; otherwise `I64` when all three
/// arguments are integers and `F32` otherwise. Values are computed in `f64` as
/// `start + i * step` and then converted to the output type.
///
/// # Errors
/// - `InvalidArgumentType` if an argument is not a number.
/// - `NonFiniteBound` if an argument is NaN or infinite.
/// - `ZeroStep` if `step == 0`.
/// - `InvalidRange` if `step` points away from `end`.
/// - `UnsupportedDType` for `Bool`.
/// - `TooManyElements` if the range holds more than `MAX_NUMEL` values.
/// - `ValueOutOfRange` if a value does not fit the output type.
pub fn arange(
    start: &Scalar,
    end: &Scalar,
    step: &Scalar,
    dtype: Option<DType>,
) -> Result<Tensor, SeqParityError> {
    let start_v = numeric_arg("arange", "start", start)?;
    let end_v = numeric_arg("arange", "end", end)?;
    let step_v = numeric_arg("arange", "step", step)?;

    if step_v == 0.0 {
        return Err(SeqParityError::ZeroStep);
    }
    if (end_v > start_v && step_v < 0.0) || (end_v < start_v && step_v > 0.0) {
        return Err(SeqParityError::InvalidRange {
            start: start_v,
            end: end_v,
            step: step_v,
        });
    }

    let all_int = start.is_int() && end.is_int() && step.is_int();
    let out_dtype = dtype.unwrap_or(if all_int { DType::I64 } else { DType::F32 });
    if out_dtype == DType::Bool {
        return Err(SeqParityError::UnsupportedDType {
            operation: "arange",
            dtype: out_dtype,
        });
    }

    let numel = checked_numel("arange", range_len(start_v, end_v, step_v))?;
    debug!(
        "arange(start={}, end={}, step={}, dtype={}) -> {} elements",
        start_v, end_v, step_v, out_dtype, numel
    );
    let data_vec: Vec<f64> = (0..numel).map(|i| start_v + i as f64 * step_v).collect();
    let buffer = cast_values(&data_vec, out_dtype)?;
    Tensor::from_buffer(buffer, vec![numel])
}

/// Creates a 1-D tensor of `steps` values evenly spaced from `start` to `end` (inclusive).
///
/// `steps == 0` yields an empty tensor and `steps == 1` yields `[start]`.
/// The output dtype defaults to `F32`; integer outputs truncate toward zero.
///
/// # Errors
/// - `InvalidArgumentType` / `NonFiniteBound` for bad `start` or `end`.
/// - `NonIntegerCount` if `steps` is not an integer.
/// - `NegativeCount` if `steps < 0`.
/// - `UnsupportedDType` for `Bool`.
/// - `TooManyElements` if `steps > MAX_NUMEL`.
/// - `ValueOutOfRange` if a value does not fit the output type.
pub fn linspace(
    start: &Scalar,
    end: &Scalar,
    steps: &Scalar,
    dtype: Option<DType>,
) -> Result<Tensor, SeqParityError> {
    let start_v = numeric_arg("linspace", "start", start)?;
    let end_v = numeric_arg("linspace", "end", end)?;
    let steps_v = match steps {
        Scalar::Int(n) => *n,
        other => {
            return Err(SeqParityError::NonIntegerCount {
                found: other.type_name().to_string(),
            })
        }
    };
    if steps_v < 0 {
        return Err(SeqParityError::NegativeCount(steps_v));
    }

    let out_dtype = dtype.unwrap_or(DType::F32);
    if out_dtype == DType::Bool {
        return Err(SeqParityError::UnsupportedDType {
            operation: "linspace",
            dtype: out_dtype,
        });
    }

    let steps = checked_numel("linspace", steps_v as f64)?;
    debug!(
        "linspace(start={}, end={}, steps={}, dtype={})",
        start_v, end_v, steps, out_dtype
    );
    let data_vec: Vec<f64> = match steps {
        0 => Vec::new(),
        1 => vec![start_v],
        _ => {
            let step_size = (end_v - start_v) / (steps - 1) as f64;
            (0..steps).map(|i| start_v + i as f64 * step_size).collect()
        }
    };
    let buffer = cast_values(&data_vec, out_dtype)?;
    Tensor::from_buffer(buffer, vec![steps])
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
