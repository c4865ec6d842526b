//! The differential oracle runner.

use log::{debug, info, warn};

use crate::backend::{CreationBackend, ExecutionMode};
use crate::case::{
    arange_dtype_case, arange_invalid_inputs, linspace_dtype_case, linspace_invalid_inputs,
    LinspaceCase, RangeCase,
};
use crate::compare::{compare_outcomes, Divergence};
use crate::config::OracleConfig;
use crate::correspondence::DtypeCorrespondence;
use crate::error::OracleError;
use crate::outcome::Outcome;

/// Both outcomes of one wrong-input case.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseRecord {
    pub op: &'static str,
    pub mode: ExecutionMode,
    /// Rendered case arguments, e.g. `(start=0, end=10, step=0)`.
    pub case: String,
    pub a: Outcome,
    pub b: Outcome,
    /// Set when the configured error oracle judged the outcomes different.
    pub divergence: Option<Divergence>,
}

impl CaseRecord {
    pub fn agreed(&self) -> bool {
        self.divergence.is_none()
    }
}

/// Result of [`DifferentialRunner::run_all`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuiteReport {
    /// Names of the dtype suites that passed, e.g. `arange dtypes [eager]`.
    pub suites_passed: Vec<String>,
    pub wrong_input: Vec<CaseRecord>,
}

impl SuiteReport {
    /// Wrong-input cases where the two implementations disagreed.
    pub fn divergent_wrong_input(&self) -> impl Iterator<Item = &CaseRecord> {
        self.wrong_input.iter().filter(|r| !r.agreed())
    }
}

/// Runs the same construction calls on two backends and checks they agree.
pub struct DifferentialRunner<'c, A: CreationBackend, B: CreationBackend> {
    a: A,
    b: B,
    correspondence: &'c DtypeCorrespondence<A::Dtype, B::Dtype>,
    config: OracleConfig,
}

fn split<X, Y>(dtypes: Option<(X, Y)>) -> (Option<X>, Option<Y>) {
    match dtypes {
        Some((x, y)) => (Some(x), Some(y)),
        None => (None, None),
    }
}

fn mismatch(
    op: &'static str,
    mode: ExecutionMode,
    subject: String,
    divergence: &Divergence,
    a: &Outcome,
    b: &Outcome,
) -> OracleError {
    let (detail, a, b) = (divergence.to_string(), a.to_string(), b.to_string());
    if divergence.is_value_mismatch() {
        OracleError::ValueMismatch {
            op,
            mode,
            subject,
            detail,
            a,
            b,
        }
    } else {
        OracleError::OutcomeMismatch {
            op,
            mode,
            subject,
            detail,
            a,
            b,
        }
    }
}

impl<'c, A: CreationBackend, B: CreationBackend> DifferentialRunner<'c, A, B> {
    pub fn new(
        a: A,
        b: B,
        correspondence: &'c DtypeCorrespondence<A::Dtype, B::Dtype>,
        config: OracleConfig,
    ) -> Result<Self, OracleError> {
        config.validate()?;
        Ok(Self {
            a,
            b,
            correspondence,
            config,
        })
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn correspondence(&self) -> &DtypeCorrespondence<A::Dtype, B::Dtype> {
        self.correspondence
    }

    /// Runs one arange case on both sides. `None` uses each side's default dtype.
    pub fn run_arange_case(
        &self,
        mode: ExecutionMode,
        case: &RangeCase,
        dtypes: Option<(A::Dtype, B::Dtype)>,
    ) -> (Outcome, Outcome) {
        let (da, db) = split(dtypes);
        (
            Outcome::capture(&self.a, self.a.arange(mode, case, da)),
            Outcome::capture(&self.b, self.b.arange(mode, case, db)),
        )
    }

    /// Runs one linspace case on both sides. `None` uses each side's default dtype.
    pub fn run_linspace_case(
        &self,
        mode: ExecutionMode,
        case: &LinspaceCase,
        dtypes: Option<(A::Dtype, B::Dtype)>,
    ) -> (Outcome, Outcome) {
        let (da, db) = split(dtypes);
        (
            Outcome::capture(&self.a, self.a.linspace(mode, case, da)),
            Outcome::capture(&self.b, self.b.linspace(mode, case, db)),
        )
    }

    /// `arange(0, 10, 2)` on every dtype pair; stops at the first mismatch.
    pub fn run_arange_dtypes(&self, mode: ExecutionMode) -> Result<(), OracleError> {
        let case = arange_dtype_case();
        self.run_dtype_matrix("arange", mode, |da, db| {
            self.run_arange_case(mode, &case, Some((da, db)))
        })
    }

    /// `linspace(0, 10, 5)` on every dtype pair; stops at the first mismatch.
    pub fn run_linspace_dtypes(&self, mode: ExecutionMode) -> Result<(), OracleError> {
        let case = linspace_dtype_case();
        self.run_dtype_matrix("linspace", mode, |da, db| {
            self.run_linspace_case(mode, &case, Some((da, db)))
        })
    }

    fn run_dtype_matrix<F>(
        &self,
        op: &'static str,
        mode: ExecutionMode,
        run: F,
    ) -> Result<(), OracleError>
    where
        F: Fn(A::Dtype, B::Dtype) -> (Outcome, Outcome),
    {
        for (tag, da, db) in self.correspondence.pairs() {
            let (a, b) = run(da, db);
            debug!("{op} [{mode}] {tag}: A={a} | B={b}");
            if let Err(divergence) = compare_outcomes(&a, &b, &self.config) {
                let subject = format!("dtype_a: {da} and dtype_b: {db}");
                return Err(mismatch(op, mode, subject, &divergence, &a, &b));
            }
        }
        info!(
            "{op} dtype suite passed in {mode} mode ({} pairs, {} vs {})",
            self.correspondence.len(),
            self.a.name(),
            self.b.name()
        );
        Ok(())
    }

    /// Default-dtype arange on the invalid inputs.
    ///
    /// Outcomes are logged and returned. Divergences only fail the call when
    /// `strict_wrong_input` is set.
    pub fn run_arange_wrong_input(
        &self,
        mode: ExecutionMode,
    ) -> Result<Vec<CaseRecord>, OracleError> {
        arange_invalid_inputs()
            .iter()
            .map(|case| {
                let (a, b) = self.run_arange_case(mode, case, None);
                self.record_wrong_input("arange", mode, case.to_string(), a, b)
            })
            .collect()
    }

    /// Default-dtype linspace on the invalid inputs; see [`Self::run_arange_wrong_input`].
    pub fn run_linspace_wrong_input(
        &self,
        mode: ExecutionMode,
    ) -> Result<Vec<CaseRecord>, OracleError> {
        linspace_invalid_inputs()
            .iter()
            .map(|case| {
                let (a, b) = self.run_linspace_case(mode, case, None);
                self.record_wrong_input("linspace", mode, case.to_string(), a, b)
            })
            .collect()
    }

    fn record_wrong_input(
        &self,
        op: &'static str,
        mode: ExecutionMode,
        case: String,
        a: Outcome,
        b: Outcome,
    ) -> Result<CaseRecord, OracleError> {
        info!("{op}{case} [{mode}] {}: {a}", self.a.name());
        info!("{op}{case} [{mode}] {}: {b}", self.b.name());
        let divergence = compare_outcomes(&a, &b, &self.config).err();
        if let Some(d) = &divergence {
            if self.config.strict_wrong_input {
                return Err(mismatch(op, mode, format!("case {case}"), d, &a, &b));
            }
            warn!("{op}{case} [{mode}] outcomes diverge: {d}");
        }
        Ok(CaseRecord {
            op,
            mode,
            case,
            a,
            b,
            divergence,
        })
    }

    /// Every suite in every configured mode.
    pub fn run_all(&self) -> Result<SuiteReport, OracleError> {
        let mut report = SuiteReport::default();
        for &mode in &self.config.modes {
            self.run_arange_dtypes(mode)?;
            report.suites_passed.push(format!("arange dtypes [{mode}]"));
            self.run_linspace_dtypes(mode)?;
            report.suites_passed.push(format!("linspace dtypes [{mode}]"));
            report.wrong_input.extend(self.run_arange_wrong_input(mode)?);
            report.wrong_input.extend(self.run_linspace_wrong_input(mode)?);
        }
        info!(
            "{} dtype suites passed, {} of {} wrong-input cases diverged",
            report.suites_passed.len(),
            report.divergent_wrong_input().count(),
            report.wrong_input.len()
        );
        Ok(report)
    }
}
