use std::fmt;

use crate::elem::ElemType;

/// Materialized result of a graph evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphArray {
    elem: ElemType,
    shape: Vec<usize>,
    values: Vec<f64>,
}

impl GraphArray {
    pub(crate) fn new(elem: ElemType, values: Vec<f64>) -> Self {
        Self {
            elem,
            shape: vec![values.len()],
            values,
        }
    }

    pub fn elem(&self) -> ElemType {
        self.elem
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Values widened to `f64`. They are already quantized to `elem`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl fmt::Display for GraphArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array(shape={:?}, dtype={}, value=[", self.shape, self.elem)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match self.elem {
                ElemType::Bool => write!(f, "{}", if *v != 0.0 { "True" } else { "False" })?,
                e if e.is_float() => write!(f, "{v:?}")?,
                _ => write!(f, "{v}")?,
            }
        }
        write!(f, "])")
    }
}
