use seqparity_oracle::{
    compare_outcomes, DtypeTag, ErrorOracle, ExecutionMode, FailureKind, OracleConfig,
    OracleError, Outcome, RangeCase,
};

mod common;
use common::{configured_runner, runner};

#[test]
fn arange_dtypes_agree_in_every_mode() -> Result<(), OracleError> {
    let runner = configured_runner();
    for &mode in &runner.config().modes {
        runner.run_arange_dtypes(mode)?;
    }
    Ok(())
}

#[test]
fn arange_int32_eager_values() {
    let runner = runner(OracleConfig::default());
    let pair = runner.correspondence().get(DtypeTag::Int32);
    let (a, b) = runner.run_arange_case(ExecutionMode::Eager, &RangeCase::new(0, 10, 2), pair);
    for outcome in [&a, &b] {
        match outcome {
            Outcome::Success(seq) => assert_eq!(seq.values, vec![0.0, 2.0, 4.0, 6.0, 8.0]),
            other => panic!("expected a sequence, got {other}"),
        }
    }
}

#[test]
fn arange_bool_fails_on_both_sides() {
    let runner = runner(OracleConfig::default());
    let pair = runner.correspondence().get(DtypeTag::Bool);
    for mode in ExecutionMode::ALL {
        let (a, b) = runner.run_arange_case(mode, &RangeCase::new(0, 10, 2), pair);
        assert_eq!(a.failure_kind(), Some(FailureKind::UnsupportedDtype));
        assert_eq!(b.failure_kind(), Some(FailureKind::UnsupportedDtype));
    }
}

#[test]
fn arange_boundary_cases_rejected_by_both() {
    let runner = runner(OracleConfig::default());
    let cases = [
        (RangeCase::new(0, 10, 0), FailureKind::ZeroStep),
        (RangeCase::new(10, 5, 2), FailureKind::ContradictoryBounds),
        (RangeCase::new(5, 10, -1), FailureKind::ContradictoryBounds),
    ];
    for mode in ExecutionMode::ALL {
        for (case, kind) in &cases {
            let (a, b) = runner.run_arange_case(mode, case, None);
            assert_eq!(a.failure_kind(), Some(*kind), "A on {case}");
            assert_eq!(b.failure_kind(), Some(*kind), "B on {case}");
        }
    }
}

#[test]
fn arange_overflow_classified_alike() {
    let runner = runner(OracleConfig::default());
    let pair = runner.correspondence().get(DtypeTag::UInt8);
    let case = RangeCase::new(0, 400, 100);
    let (a, b) = runner.run_arange_case(ExecutionMode::Compiled, &case, pair);
    assert_eq!(a.failure_kind(), Some(FailureKind::OutOfRange));
    assert_eq!(b.failure_kind(), Some(FailureKind::OutOfRange));
}

#[test]
fn exact_text_oracle_flags_differently_worded_errors() {
    let runner = runner(OracleConfig::default().with_error_oracle(ErrorOracle::ExactText));
    match runner.run_arange_dtypes(ExecutionMode::Eager) {
        Err(OracleError::OutcomeMismatch { op, subject, .. }) => {
            assert_eq!(op, "arange");
            assert_eq!(subject, "dtype_a: bool and dtype_b: Bool");
        }
        other => panic!("expected an outcome mismatch on the bool pair, got {other:?}"),
    }
}

#[test]
fn oversized_arange_is_an_agreeing_failure() {
    let runner = runner(OracleConfig::default());
    let cases = [
        RangeCase::new(0.0, 1e300, 1.0),
        RangeCase::new(i64::MIN, i64::MAX, 1),
    ];
    for mode in ExecutionMode::ALL {
        for case in &cases {
            let (a, b) = runner.run_arange_case(mode, case, None);
            assert_eq!(a.failure_kind(), Some(FailureKind::SizeTooLarge), "A on {case}");
            assert_eq!(b.failure_kind(), Some(FailureKind::SizeTooLarge), "B on {case}");
            assert_eq!(compare_outcomes(&a, &b, runner.config()), Ok(()));
        }
    }
}
