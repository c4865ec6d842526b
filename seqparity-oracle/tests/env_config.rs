//! Reads configuration from the real process environment.
//!
//! Kept as the only test in this binary so no other test observes the
//! variables it sets.

use seqparity_oracle::config::{ENV_ATOL, ENV_ERROR_ORACLE, ENV_MODES, ENV_STRICT};
use seqparity_oracle::{ErrorOracle, ExecutionMode, OracleConfig, OracleError};

#[test]
fn from_env_reads_process_environment() {
    let keys = [ENV_ATOL, ENV_ERROR_ORACLE, ENV_MODES, ENV_STRICT];
    let saved: Vec<Option<String>> = keys.iter().map(|k| std::env::var(k).ok()).collect();

    for key in keys {
        std::env::remove_var(key);
    }
    assert_eq!(OracleConfig::from_env(), Ok(OracleConfig::default()));

    std::env::set_var(ENV_ATOL, "0.25");
    std::env::set_var(ENV_ERROR_ORACLE, "text");
    std::env::set_var(ENV_MODES, "compiled");
    std::env::set_var(ENV_STRICT, "1");
    let config = OracleConfig::from_env();

    std::env::set_var(ENV_STRICT, "sometimes");
    let malformed = OracleConfig::from_env();

    for (key, value) in keys.iter().zip(saved) {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    let config = config.expect("well-formed variables");
    assert_eq!(config.atol, 0.25);
    assert_eq!(config.error_oracle, ErrorOracle::ExactText);
    assert_eq!(config.modes, vec![ExecutionMode::Compiled]);
    assert!(config.strict_wrong_input);
    assert!(matches!(malformed, Err(OracleError::InvalidConfig { key, .. }) if key == ENV_STRICT));
}
