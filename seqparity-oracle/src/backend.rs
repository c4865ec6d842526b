//! The seam between the oracle and a tensor-construction implementation.

use std::fmt;
use std::str::FromStr;

use crate::case::{LinspaceCase, RangeCase};
use crate::error::OracleError;
use crate::outcome::{FailureKind, Sequence};

/// Execution strategy requested for one call.
///
/// Passed to every backend call; backends without a notion of execution
/// strategy ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    Eager,
    Compiled,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 2] = [ExecutionMode::Compiled, ExecutionMode::Eager];
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Eager => write!(f, "eager"),
            ExecutionMode::Compiled => write!(f, "compiled"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(ExecutionMode::Eager),
            "compiled" | "graph" => Ok(ExecutionMode::Compiled),
            other => Err(OracleError::InvalidConfig {
                key: "mode".to_string(),
                value: other.to_string(),
                reason: "expected 'eager' or 'compiled'".to_string(),
            }),
        }
    }
}

/// A tensor-construction implementation under differential test.
pub trait CreationBackend {
    /// The implementation's own element-type identifier.
    type Dtype: Copy + fmt::Debug + fmt::Display + PartialEq;
    type Error: std::error::Error;

    fn name(&self) -> &'static str;

    /// `arange` on the case arguments. `None` lets the backend pick its default dtype.
    fn arange(
        &self,
        mode: ExecutionMode,
        case: &RangeCase,
        dtype: Option<Self::Dtype>,
    ) -> Result<Sequence, Self::Error>;

    /// `linspace` on the case arguments. `None` lets the backend pick its default dtype.
    fn linspace(
        &self,
        mode: ExecutionMode,
        case: &LinspaceCase,
        dtype: Option<Self::Dtype>,
    ) -> Result<Sequence, Self::Error>;

    /// Maps one of the backend's errors onto the shared failure taxonomy.
    fn classify(&self, error: &Self::Error) -> FailureKind;
}
