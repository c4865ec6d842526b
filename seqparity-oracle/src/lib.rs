//! # seqparity-oracle
//!
//! Differential testing of two independent tensor-construction libraries.
//!
//! For every execution mode and every case of an input matrix, the
//! [`DifferentialRunner`] calls the same nominal operation (`arange` or
//! `linspace`) on both implementations, captures each result as an
//! [`Outcome`] (a materialized sequence or a classified failure) and checks
//! that the two outcomes are equivalent:
//!
//! - both succeed and agree element-wise within `atol`, or
//! - both fail for the same [`FailureKind`] (or, with
//!   [`ErrorOracle::ExactText`], with identical text).
//!
//! Element types are paired through an explicit [`DtypeCorrespondence`]
//! validated when it is built; execution modes are passed to every call.
//!
//! ```no_run
//! use seqparity_oracle::{standard_runner, ExecutionMode, OracleConfig};
//!
//! let runner = standard_runner(OracleConfig::default()).unwrap();
//! runner.run_arange_dtypes(ExecutionMode::Eager).unwrap();
//! ```

pub mod backend;
pub mod backends;
pub mod case;
pub mod compare;
pub mod config;
pub mod correspondence;
pub mod dtype;
pub mod error;
pub mod outcome;
pub mod runner;

pub use backend::{CreationBackend, ExecutionMode};
pub use backends::{standard_correspondence, standard_runner, CoreBackend, GraphBackend};
pub use case::{LinspaceCase, RangeCase, Scalar};
pub use compare::{compare_outcomes, Divergence};
pub use config::{ErrorOracle, OracleConfig};
pub use correspondence::DtypeCorrespondence;
pub use dtype::{DtypeTag, Side};
pub use error::OracleError;
pub use outcome::{FailureKind, Outcome, Sequence};
pub use runner::{CaseRecord, DifferentialRunner, SuiteReport};
