// src/tensor_data.rs
use std::sync::Arc;

use crate::buffer::CpuBuffer;
use crate::error::SeqParityError;
use crate::types::DType;

/// Internal storage and metadata for a Tensor.
///
/// Holds the typed data buffer, its element type and the shape.
/// Wrapped in an `Arc` by the `Tensor` struct so clones share it.
#[derive(Debug)]
pub struct TensorData {
    /// The underlying typed CPU buffer.
    pub(crate) buffer: Arc<CpuBuffer>,
    /// The data type of the elements in the buffer.
    pub(crate) dtype: DType,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,
}

impl TensorData {
    /// Creates a new `TensorData` over `buffer`.
    ///
    /// # Errors
    /// Returns `SeqParityError::TensorCreationError` if the buffer length does
    /// not match the number of elements specified by `shape`.
    pub fn new(buffer: CpuBuffer, shape: Vec<usize>) -> Result<Self, SeqParityError> {
        let numel: usize = shape.iter().product();
        let data_len = buffer.len();
        if data_len != numel {
            return Err(SeqParityError::TensorCreationError { data_len, shape });
        }
        Ok(TensorData {
            dtype: buffer.dtype(),
            buffer: Arc::new(buffer),
            shape,
        })
    }

    /// Number of elements described by the shape.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }
}
