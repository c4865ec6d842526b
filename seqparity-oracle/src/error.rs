use crate::backend::ExecutionMode;
use crate::dtype::{DtypeTag, Side};

/// Errors reported by the differential oracle.
///
/// `ValueMismatch` and `OutcomeMismatch` are the expected test failures: the
/// two implementations disagree. The remaining variants are harness bugs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("Results do not match for {subject} ({op}, mode={mode}): {detail}\n  A: {a}\n  B: {b}")]
    ValueMismatch {
        op: &'static str,
        mode: ExecutionMode,
        subject: String,
        detail: String,
        a: String,
        b: String,
    },

    #[error("Mismatch in outcomes for {subject} ({op}, mode={mode}): {detail}\n  A: {a}\n  B: {b}")]
    OutcomeMismatch {
        op: &'static str,
        mode: ExecutionMode,
        subject: String,
        detail: String,
        a: String,
        b: String,
    },

    #[error("No dtype registered for tag {tag} on {side}")]
    MissingCorrespondence { tag: DtypeTag, side: Side },

    #[error("Dtype tag {tag} is registered more than once on {side}")]
    DuplicateCorrespondence { tag: DtypeTag, side: Side },

    #[error("Invalid configuration value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}
