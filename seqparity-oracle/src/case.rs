//! Case parameters and the fixed input matrices.

use std::fmt;

use rand::Rng;

/// A case argument. `Str` stands for a non-numeric placeholder argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Str(v) => write!(f, "'{v}'"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangeCase {
    pub start: Scalar,
    pub end: Scalar,
    pub step: Scalar,
}

impl RangeCase {
    pub fn new(start: impl Into<Scalar>, end: impl Into<Scalar>, step: impl Into<Scalar>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            step: step.into(),
        }
    }
}

impl fmt::Display for RangeCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(start={}, end={}, step={})",
            self.start, self.end, self.step
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinspaceCase {
    pub start: Scalar,
    pub end: Scalar,
    pub steps: Scalar,
}

impl LinspaceCase {
    pub fn new(start: impl Into<Scalar>, end: impl Into<Scalar>, steps: impl Into<Scalar>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            steps: steps.into(),
        }
    }
}

impl fmt::Display for LinspaceCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(start={}, end={}, steps={})",
            self.start, self.end, self.steps
        )
    }
}

/// Case run against every dtype pair by the arange suite.
pub fn arange_dtype_case() -> RangeCase {
    RangeCase::new(0, 10, 2)
}

/// Case run against every dtype pair by the linspace suite.
pub fn linspace_dtype_case() -> LinspaceCase {
    LinspaceCase::new(0, 10, 5)
}

/// Invalid arange arguments: non-numeric, zero step, and both contradictory directions.
pub fn arange_invalid_inputs() -> Vec<RangeCase> {
    vec![
        RangeCase::new("start", "end", "step"),
        RangeCase::new(0, 10, 0),
        RangeCase::new(10, 5, 2),
        RangeCase::new(5, 10, -1),
    ]
}

/// Invalid linspace arguments: non-numeric start, negative count, non-numeric count.
pub fn linspace_invalid_inputs() -> Vec<LinspaceCase> {
    vec![
        LinspaceCase::new("start", 10, 5),
        LinspaceCase::new(0, 10, -5),
        LinspaceCase::new(0, 10, "five"),
    ]
}

/// Random arange cases every implementation should accept.
///
/// Values stay within a few hundred of zero and every case has at most 64
/// elements. About half the cases use integer arguments only.
pub fn random_range_cases<R: Rng>(rng: &mut R, n: usize) -> Vec<RangeCase> {
    (0..n)
        .map(|_| {
            let descending = rng.gen_bool(0.5);
            let count = rng.gen_range(0..=64) as i64;
            if rng.gen_bool(0.5) {
                let start = rng.gen_range(-100..=100i64);
                let magnitude = rng.gen_range(1..=4i64);
                let step = if descending { -magnitude } else { magnitude };
                RangeCase::new(start, start + count * step, step)
            } else {
                // Quarter steps keep every value exact in binary floating point.
                let start = rng.gen_range(-400..=400i64) as f64 / 4.0;
                let magnitude = rng.gen_range(1..=16i64) as f64 / 4.0;
                let step = if descending { -magnitude } else { magnitude };
                RangeCase::new(start, start + count as f64 * step, step)
            }
        })
        .collect()
}

/// Random linspace cases every implementation should accept.
pub fn random_linspace_cases<R: Rng>(rng: &mut R, n: usize) -> Vec<LinspaceCase> {
    (0..n)
        .map(|_| {
            let steps = rng.gen_range(0..=32i64);
            if rng.gen_bool(0.5) {
                LinspaceCase::new(
                    rng.gen_range(-100..=100i64),
                    rng.gen_range(-100..=100i64),
                    steps,
                )
            } else {
                LinspaceCase::new(
                    rng.gen_range(-100.0..100.0f64),
                    rng.gen_range(-100.0..100.0f64),
                    steps,
                )
            }
        })
        .collect()
}
