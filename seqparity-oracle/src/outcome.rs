use std::fmt;

use crate::backend::CreationBackend;

/// A successfully produced sequence, materialized for comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    /// Name of the element type as the producing backend spells it.
    pub dtype: String,
    pub values: Vec<f64>,
    /// The backend's own rendering of the result.
    pub repr: String,
}

impl Sequence {
    pub fn new(dtype: impl Into<String>, values: Vec<f64>, repr: impl Into<String>) -> Self {
        Self {
            dtype: dtype.into(),
            values,
            repr: repr.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Why a construction call was rejected, independent of message wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A non-numeric argument where a number is required.
    InvalidType,
    ZeroStep,
    /// Range bounds whose direction disagrees with the step sign.
    ContradictoryBounds,
    NonIntegerCount,
    NegativeCount,
    UnsupportedDtype,
    /// A produced value does not fit the requested element type.
    OutOfRange,
    /// The output would hold more elements than the implementation allows.
    SizeTooLarge,
    NonFinite,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What one backend did with one case.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success(Sequence),
    Failure { kind: FailureKind, message: String },
}

impl Outcome {
    /// Captures a backend call result, classifying the error if there is one.
    pub fn capture<B: CreationBackend>(backend: &B, result: Result<Sequence, B::Error>) -> Self {
        match result {
            Ok(seq) => Outcome::Success(seq),
            Err(err) => Outcome::Failure {
                kind: backend.classify(&err),
                message: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Renders the sequence repr on success and the error message on failure.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(seq) => f.write_str(&seq.repr),
            Outcome::Failure { message, .. } => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_repr_or_message() {
        let ok = Outcome::Success(Sequence::new("int32", vec![0.0, 2.0], "tensor([0, 2])"));
        assert_eq!(ok.to_string(), "tensor([0, 2])");
        assert!(ok.is_success());
        assert_eq!(ok.failure_kind(), None);

        let err = Outcome::Failure {
            kind: FailureKind::ZeroStep,
            message: "step must be nonzero".to_string(),
        };
        assert_eq!(err.to_string(), "step must be nonzero");
        assert_eq!(err.failure_kind(), Some(FailureKind::ZeroStep));
    }

    #[test]
    fn test_sequence_len() {
        let seq = Sequence::new("f", vec![], "[]");
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }
}
