use seqparity_oracle::{
    ErrorOracle, ExecutionMode, FailureKind, OracleConfig, OracleError, Outcome,
};

mod common;
use common::runner;

#[test]
fn wrong_input_suites_only_log_by_default() -> Result<(), OracleError> {
    let runner = runner(OracleConfig::default().with_error_oracle(ErrorOracle::ExactText));
    for mode in ExecutionMode::ALL {
        let arange = runner.run_arange_wrong_input(mode)?;
        assert_eq!(arange.len(), 4);
        let linspace = runner.run_linspace_wrong_input(mode)?;
        assert_eq!(linspace.len(), 3);
        // Every invalid input fails on both sides, with different wording.
        for record in arange.iter().chain(&linspace) {
            assert!(!record.a.is_success() && !record.b.is_success(), "{}", record.case);
            assert!(!record.agreed());
            assert_eq!(record.mode, mode);
        }
    }
    Ok(())
}

#[test]
fn non_numeric_arange_arguments_are_invalid_type() -> Result<(), OracleError> {
    let runner = runner(OracleConfig::default());
    let records = runner.run_arange_wrong_input(ExecutionMode::Eager)?;
    let first = &records[0];
    assert_eq!(first.case, "(start='start', end='end', step='step')");
    assert_eq!(first.a.failure_kind(), Some(FailureKind::InvalidType));
    assert_eq!(first.b.failure_kind(), Some(FailureKind::InvalidType));
    assert!(first.agreed());
    Ok(())
}

#[test]
fn linspace_wrong_input_kinds() -> Result<(), OracleError> {
    let runner = runner(OracleConfig::default());
    let records = runner.run_linspace_wrong_input(ExecutionMode::Compiled)?;
    let kinds: Vec<_> = records.iter().map(|r| r.a.failure_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            Some(FailureKind::InvalidType),
            Some(FailureKind::NegativeCount),
            Some(FailureKind::NonIntegerCount),
        ]
    );
    assert!(records.iter().all(|r| r.agreed()));
    Ok(())
}

#[test]
fn strict_taxonomy_mode_passes() -> Result<(), OracleError> {
    let runner = runner(OracleConfig::default().with_strict_wrong_input(true));
    for mode in ExecutionMode::ALL {
        runner.run_arange_wrong_input(mode)?;
        runner.run_linspace_wrong_input(mode)?;
    }
    Ok(())
}

#[test]
fn strict_text_mode_stops_at_first_wording_difference() {
    let runner = runner(
        OracleConfig::default()
            .with_error_oracle(ErrorOracle::ExactText)
            .with_strict_wrong_input(true),
    );
    match runner.run_arange_wrong_input(ExecutionMode::Eager) {
        Err(OracleError::OutcomeMismatch { subject, a, b, .. }) => {
            assert_eq!(subject, "case (start='start', end='end', step='step')");
            assert_ne!(a, b);
        }
        other => panic!("expected an outcome mismatch, got {other:?}"),
    }
}

#[test]
fn run_all_reports_every_suite() -> Result<(), OracleError> {
    let runner = runner(OracleConfig::default());
    let report = runner.run_all()?;
    assert_eq!(
        report.suites_passed,
        vec![
            "arange dtypes [compiled]",
            "linspace dtypes [compiled]",
            "arange dtypes [eager]",
            "linspace dtypes [eager]",
        ]
    );
    assert_eq!(report.wrong_input.len(), 14);
    assert_eq!(report.divergent_wrong_input().count(), 0);
    assert!(report
        .wrong_input
        .iter()
        .all(|r| matches!(r.a, Outcome::Failure { .. })));
    Ok(())
}
