use crate::elem::ElemType;
use crate::graph::NodeId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("For '{op}', the type of '{arg}' must be int or float, but got {found}.")]
    TypeError {
        op: &'static str,
        arg: &'static str,
        found: String,
    },

    #[error("For '{op}', '{arg}' must be a finite number, but got {value}.")]
    NotFinite {
        op: &'static str,
        arg: &'static str,
        value: f64,
    },

    #[error("For '{op}', 'step' cannot be equal to zero.")]
    ZeroStep { op: &'static str },

    #[error("For '{op}', upper bound and lower bound are inconsistent with step sign: start={start}, end={end}, step={step}.")]
    RangeDirection {
        op: &'static str,
        start: f64,
        end: f64,
        step: f64,
    },

    #[error("For 'linspace', 'steps' must be int, but got {found}.")]
    StepsNotInteger { found: String },

    #[error("For 'linspace', 'steps' must be non-negative, but got {steps}.")]
    StepsNegative { steps: i64 },

    #[error("For '{op}', data type {elem} is not supported.")]
    UnsupportedElemType { op: &'static str, elem: ElemType },

    #[error("For '{op}', the output would hold {len} elements, more than the limit of {max}.")]
    TooLarge { op: &'static str, len: f64, max: usize },

    #[error("Value {value} overflows data type {elem}.")]
    Overflow { value: f64, elem: ElemType },

    #[error("Graph compilation failed: {0}")]
    Compile(String),

    #[error("Node {0:?} has not been evaluated")]
    MissingValue(NodeId),
}
