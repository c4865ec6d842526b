use crate::error::SeqParityError;

/// Largest number of elements a creation function will allocate.
pub const MAX_NUMEL: usize = 1 << 24;

/// Number of elements produced by a half-open range `[start, end)` walked with `step`.
///
/// Callers validate the arguments first: `step` is finite and nonzero and
/// points from `start` towards `end` (or `start == end`). The result is not
/// bounded; pass it through [`checked_numel`] before allocating.
pub fn range_len(start: f64, end: f64, step: f64) -> f64 {
    ((end - start) / step).ceil().max(0.0)
}

/// Converts a requested element count to `usize`, rejecting counts above [`MAX_NUMEL`].
pub fn checked_numel(operation: &'static str, requested: f64) -> Result<usize, SeqParityError> {
    if requested.is_nan() || requested > MAX_NUMEL as f64 {
        return Err(SeqParityError::TooManyElements {
            operation,
            requested,
            max: MAX_NUMEL,
        });
    }
    Ok(requested as usize)
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
