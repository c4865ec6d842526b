// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={:?}, dtype={:?})",
            self.data.shape, self.data.dtype
        )
    }
}

/// Renders the tensor the way users print it: `tensor([0, 2, 4], dtype=int32)`.
///
/// Floating values with no fractional part keep a trailing dot (`2.`) so the
/// element type is visible from the values alone.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dtype = self.dtype();
        write!(f, "tensor([")?;
        for (i, value) in self.to_f64_vec().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if dtype == crate::types::DType::Bool {
                write!(f, "{}", if *value != 0.0 { "True" } else { "False" })?;
            } else if dtype.is_floating_point() && value.is_finite() && value.fract() == 0.0 {
                write!(f, "{}.", value)?;
            } else {
                write!(f, "{}", value)?;
            }
        }
        write!(f, "], dtype={})", dtype)
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::CpuBuffer;
    use crate::tensor::Tensor;
    use std::sync::Arc;

    #[test]
    fn test_display_int() {
        let t = Tensor::from_buffer(CpuBuffer::I64(Arc::new(vec![0, 2, 4])), vec![3]).unwrap();
        assert_eq!(t.to_string(), "tensor([0, 2, 4], dtype=int64)");
    }

    #[test]
    fn test_display_float() {
        let t = Tensor::from_buffer(CpuBuffer::F32(Arc::new(vec![0.0, 2.5])), vec![2]).unwrap();
        assert_eq!(t.to_string(), "tensor([0., 2.5], dtype=float32)");
    }

    #[test]
    fn test_debug_mentions_dtype() {
        let t = Tensor::from_buffer(CpuBuffer::F32(Arc::new(vec![1.0])), vec![1]).unwrap();
        assert!(format!("{:?}", t).contains("dtype=F32"));
    }
}
