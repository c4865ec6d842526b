use crate::types::DType;
use thiserror::Error;

/// Custom error type for the seqparity-core tensor library.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum SeqParityError {
    #[error("{operation}(): argument '{argument}' must be a real number, not {found}")]
    InvalidArgumentType {
        operation: &'static str,
        argument: &'static str,
        found: String,
    },

    #[error("{operation}(): argument '{argument}' must be finite, got {value}")]
    NonFiniteBound {
        operation: &'static str,
        argument: &'static str,
        value: f64,
    },

    #[error("step must be nonzero")]
    ZeroStep,

    #[error("upper bound and larger bound inconsistent with step sign (start={start}, end={end}, step={step})")]
    InvalidRange { start: f64, end: f64, step: f64 },

    #[error("linspace(): argument 'steps' must be int, not {found}")]
    NonIntegerCount { found: String },

    #[error("number of steps must be non-negative, got {0}")]
    NegativeCount(i64),

    #[error("\"{operation}\" not implemented for '{dtype}'")]
    UnsupportedDType { operation: &'static str, dtype: DType },

    #[error("value {value} cannot be converted to type {dtype} without overflow")]
    ValueOutOfRange { value: f64, dtype: DType },

    #[error("{operation}(): {requested} elements requested, at most {max} are supported")]
    TooManyElements {
        operation: &'static str,
        requested: f64,
        max: usize,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Internal error: {0}")]
    InternalError(String),
}
