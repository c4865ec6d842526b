//! Element types and quantization.

use half::{bf16, f16};

use crate::error::GraphError;
use crate::Result;

/// Element type of a [`GraphArray`](crate::GraphArray).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElemType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    BFloat16,
    Bool,
}

impl ElemType {
    pub fn is_float(self) -> bool {
        matches!(
            self,
            ElemType::Float16 | ElemType::Float32 | ElemType::Float64 | ElemType::BFloat16
        )
    }

    /// Half-open `[lo, hi)` bounds of an integer type, expressed in `f64`.
    ///
    /// The upper bound is `MAX + 1`, which is exactly representable for every
    /// width (it is a power of two).
    fn int_bounds(self) -> Option<(f64, f64)> {
        let bounds = match self {
            ElemType::Int8 => (i8::MIN as f64, i8::MAX as f64 + 1.0),
            ElemType::Int16 => (i16::MIN as f64, i16::MAX as f64 + 1.0),
            ElemType::Int32 => (i32::MIN as f64, i32::MAX as f64 + 1.0),
            ElemType::Int64 => (i64::MIN as f64, 9_223_372_036_854_775_808.0),
            ElemType::UInt8 => (0.0, u8::MAX as f64 + 1.0),
            ElemType::UInt16 => (0.0, u16::MAX as f64 + 1.0),
            ElemType::UInt32 => (0.0, u32::MAX as f64 + 1.0),
            ElemType::UInt64 => (0.0, 18_446_744_073_709_551_616.0),
            _ => return None,
        };
        Some(bounds)
    }

    /// Rounds `value` to the nearest value representable by this element type.
    ///
    /// Integers truncate toward zero, floats round to nearest, `Bool` maps
    /// nonzero to `1.0`. Out-of-range values are an `Overflow` error.
    pub fn quantize(self, value: f64) -> Result<f64> {
        let q = match self {
            ElemType::Float16 => f16::from_f64(value).to_f64(),
            ElemType::BFloat16 => bf16::from_f64(value).to_f64(),
            ElemType::Float32 => value as f32 as f64,
            ElemType::Float64 => value,
            ElemType::Bool => return Ok(if value != 0.0 { 1.0 } else { 0.0 }),
            _ => return self.quantize_int(value),
        };
        if value.is_finite() && q.is_infinite() {
            return Err(GraphError::Overflow { value, elem: self });
        }
        Ok(q)
    }

    fn quantize_int(self, value: f64) -> Result<f64> {
        let overflow = GraphError::Overflow { value, elem: self };
        let (lo, hi) = self.int_bounds().ok_or_else(|| overflow.clone())?;
        let t = value.trunc();
        // NaN fails both comparisons.
        if t >= lo && t < hi {
            Ok(t)
        } else {
            Err(overflow)
        }
    }
}

impl std::fmt::Display for ElemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElemType::Int8 => "Int8",
            ElemType::Int16 => "Int16",
            ElemType::Int32 => "Int32",
            ElemType::Int64 => "Int64",
            ElemType::UInt8 => "UInt8",
            ElemType::UInt16 => "UInt16",
            ElemType::UInt32 => "UInt32",
            ElemType::UInt64 => "UInt64",
            ElemType::Float16 => "Float16",
            ElemType::Float32 => "Float32",
            ElemType::Float64 => "Float64",
            ElemType::BFloat16 => "BFloat16",
            ElemType::Bool => "Bool",
        };
        f.write_str(name)
    }
}
