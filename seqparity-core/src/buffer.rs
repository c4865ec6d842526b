use std::fmt::Debug;
use std::sync::Arc;

use half::{bf16, f16};

use crate::types::DType;

/// Enum for CPU buffer types, one variant per `DType`.
///
/// Each variant wraps its vector in an `Arc` so tensors sharing a buffer
/// (clones, views) do not copy the data.
#[derive(Debug, Clone)]
pub enum CpuBuffer {
    I8(Arc<Vec<i8>>),
    I16(Arc<Vec<i16>>),
    I32(Arc<Vec<i32>>),
    I64(Arc<Vec<i64>>),
    U8(Arc<Vec<u8>>),
    U16(Arc<Vec<u16>>),
    U32(Arc<Vec<u32>>),
    U64(Arc<Vec<u64>>),
    F16(Arc<Vec<f16>>),
    F32(Arc<Vec<f32>>),
    F64(Arc<Vec<f64>>),
    BF16(Arc<Vec<bf16>>),
    Bool(Arc<Vec<bool>>),
}

impl CpuBuffer {
    /// The `DType` of the elements held by this buffer.
    pub fn dtype(&self) -> DType {
        match self {
            CpuBuffer::I8(_) => DType::I8,
            CpuBuffer::I16(_) => DType::I16,
            CpuBuffer::I32(_) => DType::I32,
            CpuBuffer::I64(_) => DType::I64,
            CpuBuffer::U8(_) => DType::U8,
            CpuBuffer::U16(_) => DType::U16,
            CpuBuffer::U32(_) => DType::U32,
            CpuBuffer::U64(_) => DType::U64,
            CpuBuffer::F16(_) => DType::F16,
            CpuBuffer::F32(_) => DType::F32,
            CpuBuffer::F64(_) => DType::F64,
            CpuBuffer::BF16(_) => DType::BF16,
            CpuBuffer::Bool(_) => DType::Bool,
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            CpuBuffer::I8(d) => d.len(),
            CpuBuffer::I16(d) => d.len(),
            CpuBuffer::I32(d) => d.len(),
            CpuBuffer::I64(d) => d.len(),
            CpuBuffer::U8(d) => d.len(),
            CpuBuffer::U16(d) => d.len(),
            CpuBuffer::U32(d) => d.len(),
            CpuBuffer::U64(d) => d.len(),
            CpuBuffer::F16(d) => d.len(),
            CpuBuffer::F32(d) => d.len(),
            CpuBuffer::F64(d) => d.len(),
            CpuBuffer::BF16(d) => d.len(),
            CpuBuffer::Bool(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widens the buffer to `f64`. Booleans map to `0.0` / `1.0`.
    ///
    /// Every supported element type converts to `f64` exactly, except
    /// `u64`/`i64` magnitudes above 2^53, which round.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            CpuBuffer::I8(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::I16(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::I32(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::I64(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::U8(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::U16(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::U32(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::U64(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::F16(d) => d.iter().map(|x| x.to_f64()).collect(),
            CpuBuffer::F32(d) => d.iter().map(|&x| x as f64).collect(),
            CpuBuffer::F64(d) => d.to_vec(),
            CpuBuffer::BF16(d) => d.iter().map(|x| x.to_f64()).collect(),
            CpuBuffer::Bool(d) => d.iter().map(|&x| if x { 1.0 } else { 0.0 }).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64_vec() {
        let buf = CpuBuffer::I16(Arc::new(vec![1, 2, 3, 4]));
        assert_eq!(buf.to_f64_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(buf.dtype(), DType::I16);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_half_widening() {
        let buf = CpuBuffer::BF16(Arc::new(vec![bf16::from_f64(2.5), bf16::from_f64(-1.0)]));
        assert_eq!(buf.to_f64_vec(), vec![2.5, -1.0]);
    }

    #[test]
    fn test_bool_widening() {
        let buf = CpuBuffer::Bool(Arc::new(vec![true, false]));
        assert_eq!(buf.to_f64_vec(), vec![1.0, 0.0]);
        assert!(!buf.is_empty());
    }
}
