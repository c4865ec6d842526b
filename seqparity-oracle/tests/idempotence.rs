use rand::rngs::StdRng;
use rand::SeedableRng;
use seqparity_oracle::case::{random_linspace_cases, random_range_cases};
use seqparity_oracle::{compare_outcomes, ExecutionMode, OracleConfig};

mod common;
use common::runner;

const SEED: u64 = 0x5eed;

#[test]
fn repeated_cases_give_equal_outcomes() {
    let runner = runner(OracleConfig::default());
    let mut rng = StdRng::seed_from_u64(SEED);
    let ranges = random_range_cases(&mut rng, 40);
    let spaces = random_linspace_cases(&mut rng, 40);

    for mode in ExecutionMode::ALL {
        for (_, da, db) in runner.correspondence().pairs() {
            for case in &ranges {
                let first = runner.run_arange_case(mode, case, Some((da, db)));
                let second = runner.run_arange_case(mode, case, Some((da, db)));
                assert_eq!(first, second, "arange{case} {da}/{db} [{mode}]");
            }
            for case in &spaces {
                let first = runner.run_linspace_case(mode, case, Some((da, db)));
                let second = runner.run_linspace_case(mode, case, Some((da, db)));
                assert_eq!(first, second, "linspace{case} {da}/{db} [{mode}]");
            }
        }
    }
}

#[test]
fn random_arange_cases_agree_across_backends() {
    let runner = runner(OracleConfig::default());
    let cases = random_range_cases(&mut StdRng::seed_from_u64(SEED), 100);
    for mode in ExecutionMode::ALL {
        for (tag, da, db) in runner.correspondence().pairs() {
            for case in &cases {
                let (a, b) = runner.run_arange_case(mode, case, Some((da, db)));
                if let Err(d) = compare_outcomes(&a, &b, runner.config()) {
                    panic!("arange{case} {tag} [{mode}] diverged: {d}\n  A: {a}\n  B: {b}");
                }
            }
        }
    }
}

#[test]
fn modes_do_not_change_results() {
    let runner = runner(OracleConfig::default());
    let cases = random_linspace_cases(&mut StdRng::seed_from_u64(SEED + 1), 50);
    for case in &cases {
        let eager = runner.run_linspace_case(ExecutionMode::Eager, case, None);
        let compiled = runner.run_linspace_case(ExecutionMode::Compiled, case, None);
        assert_eq!(eager, compiled, "linspace{case}");
    }
}
