use log::trace;
use seqparity_graph::{Context, ElemType, ExecMode, GraphArray, GraphError, Value};

use crate::backend::{CreationBackend, ExecutionMode};
use crate::case::{LinspaceCase, RangeCase, Scalar};
use crate::outcome::{FailureKind, Sequence};

/// Implementation B: graph-built arrays from `seqparity-graph`.
///
/// Every call gets a fresh [`Context`] in the requested mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphBackend;

fn to_value(value: &Scalar) -> Value {
    match value {
        Scalar::Int(v) => Value::Int(*v),
        Scalar::Float(v) => Value::Float(*v),
        Scalar::Bool(v) => Value::Bool(*v),
        Scalar::Str(v) => Value::Text(v.clone()),
    }
}

fn context(mode: ExecutionMode) -> Context {
    Context::new(match mode {
        ExecutionMode::Eager => ExecMode::Eager,
        ExecutionMode::Compiled => ExecMode::Compiled,
    })
}

fn materialize(array: GraphArray) -> Sequence {
    let repr = array.to_string();
    Sequence::new(array.elem().to_string(), array.into_values(), repr)
}

impl CreationBackend for GraphBackend {
    type Dtype = ElemType;
    type Error = GraphError;

    fn name(&self) -> &'static str {
        "seqparity-graph"
    }

    fn arange(
        &self,
        mode: ExecutionMode,
        case: &RangeCase,
        dtype: Option<ElemType>,
    ) -> Result<Sequence, GraphError> {
        trace!("{}: arange{} dtype={:?} mode={}", self.name(), case, dtype, mode);
        let array = context(mode).arange(
            &to_value(&case.start),
            &to_value(&case.end),
            &to_value(&case.step),
            dtype,
        )?;
        Ok(materialize(array))
    }

    fn linspace(
        &self,
        mode: ExecutionMode,
        case: &LinspaceCase,
        dtype: Option<ElemType>,
    ) -> Result<Sequence, GraphError> {
        trace!("{}: linspace{} dtype={:?} mode={}", self.name(), case, dtype, mode);
        let array = context(mode).linspace(
            &to_value(&case.start),
            &to_value(&case.end),
            &to_value(&case.steps),
            dtype,
        )?;
        Ok(materialize(array))
    }

    fn classify(&self, error: &GraphError) -> FailureKind {
        match error {
            GraphError::TypeError { .. } => FailureKind::InvalidType,
            GraphError::NotFinite { .. } => FailureKind::NonFinite,
            GraphError::ZeroStep { .. } => FailureKind::ZeroStep,
            GraphError::RangeDirection { .. } => FailureKind::ContradictoryBounds,
            GraphError::StepsNotInteger { .. } => FailureKind::NonIntegerCount,
            GraphError::StepsNegative { .. } => FailureKind::NegativeCount,
            GraphError::UnsupportedElemType { .. } => FailureKind::UnsupportedDtype,
            GraphError::Overflow { .. } => FailureKind::OutOfRange,
            GraphError::TooLarge { .. } => FailureKind::SizeTooLarge,
            GraphError::Compile(_) | GraphError::MissingValue(_) => FailureKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arange_int32_both_modes() {
        for mode in ExecutionMode::ALL {
            let seq = GraphBackend
                .arange(mode, &RangeCase::new(0, 10, 2), Some(ElemType::Int32))
                .unwrap();
            assert_eq!(seq.values, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
            assert_eq!(seq.dtype, "Int32");
            assert_eq!(seq.repr, "Array(shape=[5], dtype=Int32, value=[0 2 4 6 8])");
        }
    }

    #[test]
    fn test_classify() {
        let err = GraphBackend
            .arange(ExecutionMode::Compiled, &RangeCase::new(10, 5, 2), None)
            .unwrap_err();
        assert_eq!(GraphBackend.classify(&err), FailureKind::ContradictoryBounds);

        let err = GraphBackend
            .linspace(ExecutionMode::Eager, &LinspaceCase::new(0, 10, -5), None)
            .unwrap_err();
        assert_eq!(GraphBackend.classify(&err), FailureKind::NegativeCount);
    }
}
