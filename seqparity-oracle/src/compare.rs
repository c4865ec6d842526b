//! Outcome comparison.

use approx::AbsDiffEq;

use crate::config::{ErrorOracle, OracleConfig};
use crate::outcome::{FailureKind, Outcome};

/// Why two outcomes were judged different.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Divergence {
    #[error("lengths differ: {a} vs {b}")]
    Length { a: usize, b: usize },

    #[error("element {index} differs: {a} vs {b} (|diff| = {diff} > atol = {atol})")]
    Value {
        index: usize,
        a: f64,
        b: f64,
        diff: f64,
        atol: f64,
    },

    #[error("failure kinds differ: {}", describe_kinds(.a, .b))]
    Kind {
        a: Option<FailureKind>,
        b: Option<FailureKind>,
    },

    #[error("outcome texts differ")]
    Text,
}

fn describe_kinds(a: &Option<FailureKind>, b: &Option<FailureKind>) -> String {
    let show = |k: &Option<FailureKind>| k.map_or_else(|| "success".to_string(), |k| k.to_string());
    format!("{} vs {}", show(a), show(b))
}

impl Divergence {
    /// True when both sides produced a sequence and only the data differs.
    pub fn is_value_mismatch(&self) -> bool {
        matches!(self, Divergence::Length { .. } | Divergence::Value { .. })
    }
}

/// Element-wise `|a - b| <= atol`. NaN matches NaN and infinities match themselves.
pub fn allclose(a: &[f64], b: &[f64], atol: f64) -> Result<(), Divergence> {
    if a.len() != b.len() {
        return Err(Divergence::Length {
            a: a.len(),
            b: b.len(),
        });
    }
    for (index, (x, y)) in a.iter().zip(b).enumerate() {
        if x == y || (x.is_nan() && y.is_nan()) {
            continue;
        }
        if !x.abs_diff_eq(y, atol) {
            return Err(Divergence::Value {
                index,
                a: *x,
                b: *y,
                diff: (x - y).abs(),
                atol,
            });
        }
    }
    Ok(())
}

/// Decides whether two captured outcomes are equivalent.
///
/// Two successes are compared element-wise with `config.atol`. Anything else
/// goes through the configured error oracle.
pub fn compare_outcomes(a: &Outcome, b: &Outcome, config: &OracleConfig) -> Result<(), Divergence> {
    if let (Outcome::Success(sa), Outcome::Success(sb)) = (a, b) {
        return allclose(&sa.values, &sb.values, config.atol);
    }
    match config.error_oracle {
        ErrorOracle::Taxonomy => match (a.failure_kind(), b.failure_kind()) {
            (Some(ka), Some(kb)) if ka == kb => Ok(()),
            (ka, kb) => Err(Divergence::Kind { a: ka, b: kb }),
        },
        ErrorOracle::ExactText => {
            if a.to_string() == b.to_string() {
                Ok(())
            } else {
                Err(Divergence::Text)
            }
        }
    }
}
