// src/tensor/mod.rs

use crate::buffer::CpuBuffer;
use crate::error::SeqParityError;
use crate::tensor_data::TensorData;
use crate::types::DType;
use std::sync::Arc;

pub mod create; // Make the create module public
mod debug;

// --- Declare utility modules ---
pub mod utils;

// Re-export creation functions to make them public
pub use create::{arange, linspace};

/// Represents a multi-dimensional array (tensor).
///
/// `Tensor` holds its `TensorData` behind an `Arc`: clones are cheap and share
/// the same buffer. Tensors produced by the creation functions are immutable.
#[derive(Clone)]
pub struct Tensor {
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    /// Wraps an already typed buffer. The dtype is taken from the buffer variant.
    pub fn from_buffer(buffer: CpuBuffer, shape: Vec<usize>) -> Result<Self, SeqParityError> {
        let tensor_data = TensorData::new(buffer, shape)?;
        Ok(Tensor {
            data: Arc::new(tensor_data),
        })
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.data.dtype
    }

    /// Returns a clone of the tensor's shape (`Vec<usize>`).
    pub fn shape(&self) -> Vec<usize> {
        self.data.shape.clone()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.numel()
    }

    /// Copies the elements out as `f64`, in logical order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.buffer.to_f64_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_buffer_f32() {
        let buffer = CpuBuffer::F32(Arc::new(vec![1.0, 2.0, 3.0, 4.0]));
        let t = Tensor::from_buffer(buffer, vec![2, 2]).unwrap();
        assert_eq!(t.shape(), vec![2, 2]);
        assert_eq!(t.numel(), 4);
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.to_f64_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_tensor_creation_error() {
        let result = Tensor::from_buffer(CpuBuffer::I64(Arc::new(vec![1, 2, 3])), vec![2, 2]);
        match result {
            Err(SeqParityError::TensorCreationError { data_len, shape }) => {
                assert_eq!(data_len, 3);
                assert_eq!(shape, vec![2, 2]);
            }
            other => panic!("Expected TensorCreationError, got {:?}", other),
        }
    }

    #[test]
    fn test_clone_shares_buffer() {
        let t = Tensor::from_buffer(CpuBuffer::F64(Arc::new(vec![0.5, 1.5])), vec![2]).unwrap();
        let c = t.clone();
        assert!(Arc::ptr_eq(&t.data, &c.data));
        assert_eq!(c.to_f64_vec(), vec![0.5, 1.5]);
    }
}
