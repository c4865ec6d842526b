use log::trace;
use seqparity_core::{DType, Scalar as CoreScalar, SeqParityError, Tensor};

use crate::backend::{CreationBackend, ExecutionMode};
use crate::case::{LinspaceCase, RangeCase, Scalar};
use crate::outcome::{FailureKind, Sequence};

/// Implementation A: eager tensors from `seqparity-core`.
///
/// The library has a single execution strategy, so the requested mode only
/// shows up in the trace log.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoreBackend;

fn to_core(value: &Scalar) -> CoreScalar {
    match value {
        Scalar::Int(v) => CoreScalar::Int(*v),
        Scalar::Float(v) => CoreScalar::Float(*v),
        Scalar::Bool(v) => CoreScalar::Bool(*v),
        Scalar::Str(v) => CoreScalar::Str(v.clone()),
    }
}

fn materialize(tensor: Tensor) -> Sequence {
    Sequence::new(tensor.dtype().name(), tensor.to_f64_vec(), tensor.to_string())
}

impl CreationBackend for CoreBackend {
    type Dtype = DType;
    type Error = SeqParityError;

    fn name(&self) -> &'static str {
        "seqparity-core"
    }

    fn arange(
        &self,
        mode: ExecutionMode,
        case: &RangeCase,
        dtype: Option<DType>,
    ) -> Result<Sequence, SeqParityError> {
        trace!("{}: arange{} dtype={:?} mode={}", self.name(), case, dtype, mode);
        let tensor = seqparity_core::arange(
            &to_core(&case.start),
            &to_core(&case.end),
            &to_core(&case.step),
            dtype,
        )?;
        Ok(materialize(tensor))
    }

    fn linspace(
        &self,
        mode: ExecutionMode,
        case: &LinspaceCase,
        dtype: Option<DType>,
    ) -> Result<Sequence, SeqParityError> {
        trace!("{}: linspace{} dtype={:?} mode={}", self.name(), case, dtype, mode);
        let tensor = seqparity_core::linspace(
            &to_core(&case.start),
            &to_core(&case.end),
            &to_core(&case.steps),
            dtype,
        )?;
        Ok(materialize(tensor))
    }

    fn classify(&self, error: &SeqParityError) -> FailureKind {
        match error {
            SeqParityError::InvalidArgumentType { .. } => FailureKind::InvalidType,
            SeqParityError::NonFiniteBound { .. } => FailureKind::NonFinite,
            SeqParityError::ZeroStep => FailureKind::ZeroStep,
            SeqParityError::InvalidRange { .. } => FailureKind::ContradictoryBounds,
            SeqParityError::NonIntegerCount { .. } => FailureKind::NonIntegerCount,
            SeqParityError::NegativeCount(_) => FailureKind::NegativeCount,
            SeqParityError::UnsupportedDType { .. } => FailureKind::UnsupportedDtype,
            SeqParityError::ValueOutOfRange { .. } => FailureKind::OutOfRange,
            SeqParityError::TooManyElements { .. } => FailureKind::SizeTooLarge,
            SeqParityError::TensorCreationError { .. } | SeqParityError::InternalError(_) => {
                FailureKind::Other
            }
        }
    }
}
