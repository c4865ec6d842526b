use seqparity_oracle::{
    standard_runner, CoreBackend, DifferentialRunner, GraphBackend, OracleConfig,
};
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Runner over the two shipped backends with logging initialised.
#[allow(dead_code)]
pub fn runner(config: OracleConfig) -> DifferentialRunner<'static, CoreBackend, GraphBackend> {
    setup_logger();
    standard_runner(config).expect("standard runner should build")
}

/// Runner configured from the `SEQPARITY_*` environment variables.
#[allow(dead_code)]
pub fn configured_runner() -> DifferentialRunner<'static, CoreBackend, GraphBackend> {
    let config = OracleConfig::from_env().expect("SEQPARITY_* variables should be well formed");
    runner(config)
}
