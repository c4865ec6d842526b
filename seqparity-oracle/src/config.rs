//! Oracle configuration.

use log::debug;

use crate::backend::ExecutionMode;
use crate::error::OracleError;

/// How two failing outcomes are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ErrorOracle {
    /// Same [`FailureKind`](crate::FailureKind) on both sides.
    #[default]
    Taxonomy,
    /// Identical rendered text on both sides.
    ExactText,
}

/// Settings shared by every suite of a [`DifferentialRunner`](crate::DifferentialRunner).
#[derive(Clone, Debug, PartialEq)]
pub struct OracleConfig {
    /// Absolute tolerance for element-wise comparison.
    pub atol: f64,
    /// Modes exercised by `run_all`, in order.
    pub modes: Vec<ExecutionMode>,
    pub error_oracle: ErrorOracle,
    /// Make wrong-input suites fail on divergence instead of only logging.
    pub strict_wrong_input: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            atol: 1e-3,
            modes: ExecutionMode::ALL.to_vec(),
            error_oracle: ErrorOracle::Taxonomy,
            strict_wrong_input: false,
        }
    }
}

pub const ENV_ATOL: &str = "SEQPARITY_ATOL";
pub const ENV_ERROR_ORACLE: &str = "SEQPARITY_ERROR_ORACLE";
pub const ENV_STRICT: &str = "SEQPARITY_STRICT";
pub const ENV_MODES: &str = "SEQPARITY_MODES";

fn invalid(key: &str, value: &str, reason: &str) -> OracleError {
    OracleError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl OracleConfig {
    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = ExecutionMode>) -> Self {
        self.modes = modes.into_iter().collect();
        self
    }

    pub fn with_error_oracle(mut self, error_oracle: ErrorOracle) -> Self {
        self.error_oracle = error_oracle;
        self
    }

    pub fn with_strict_wrong_input(mut self, strict: bool) -> Self {
        self.strict_wrong_input = strict;
        self
    }

    pub fn validate(&self) -> Result<(), OracleError> {
        if !(self.atol.is_finite() && self.atol >= 0.0) {
            return Err(invalid(
                "atol",
                &self.atol.to_string(),
                "must be a finite non-negative number",
            ));
        }
        if self.modes.is_empty() {
            return Err(invalid("modes", "", "at least one execution mode is required"));
        }
        Ok(())
    }

    /// Defaults overlaid with the `SEQPARITY_*` environment variables.
    pub fn from_env() -> Result<Self, OracleError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with the values `lookup` returns for the `SEQPARITY_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OracleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ATOL) {
            config.atol = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| invalid(ENV_ATOL, &raw, &e.to_string()))?;
        }
        if let Some(raw) = lookup(ENV_ERROR_ORACLE) {
            config.error_oracle = match raw.trim().to_ascii_lowercase().as_str() {
                "taxonomy" | "kind" => ErrorOracle::Taxonomy,
                "text" | "exact" => ErrorOracle::ExactText,
                _ => {
                    return Err(invalid(
                        ENV_ERROR_ORACLE,
                        &raw,
                        "expected 'taxonomy' or 'text'",
                    ))
                }
            };
        }
        if let Some(raw) = lookup(ENV_STRICT) {
            config.strict_wrong_input = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => return Err(invalid(ENV_STRICT, &raw, "expected a boolean")),
            };
        }
        if let Some(raw) = lookup(ENV_MODES) {
            config.modes = raw
                .split(',')
                .filter(|m| !m.trim().is_empty())
                .map(str::parse)
                .collect::<Result<Vec<ExecutionMode>, _>>()
                .map_err(|_| {
                    invalid(
                        ENV_MODES,
                        &raw,
                        "expected a comma-separated list of 'eager' and 'compiled'",
                    )
                })?;
        }

        config.validate()?;
        debug!("oracle config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = OracleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, OracleConfig::default());
        assert_eq!(config.atol, 1e-3);
        assert_eq!(config.modes, vec![ExecutionMode::Compiled, ExecutionMode::Eager]);
        assert!(!config.strict_wrong_input);
    }

    #[test]
    fn test_overrides() {
        let config = OracleConfig::from_lookup(lookup(&[
            (ENV_ATOL, "0.5"),
            (ENV_ERROR_ORACLE, "text"),
            (ENV_STRICT, "true"),
            (ENV_MODES, "eager"),
        ]))
        .unwrap();
        assert_eq!(config.atol, 0.5);
        assert_eq!(config.error_oracle, ErrorOracle::ExactText);
        assert!(config.strict_wrong_input);
        assert_eq!(config.modes, vec![ExecutionMode::Eager]);
    }

    #[test]
    fn test_malformed_values() {
        for pairs in [
            [(ENV_ATOL, "tight")],
            [(ENV_ATOL, "-1")],
            [(ENV_ERROR_ORACLE, "fuzzy")],
            [(ENV_STRICT, "maybe")],
            [(ENV_MODES, "eager,lazy")],
            [(ENV_MODES, ",")],
        ] {
            assert!(
                matches!(
                    OracleConfig::from_lookup(lookup(&pairs)),
                    Err(OracleError::InvalidConfig { .. })
                ),
                "{pairs:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_builders() {
        let config = OracleConfig::default()
            .with_atol(0.0)
            .with_modes([ExecutionMode::Eager])
            .with_strict_wrong_input(true);
        assert!(config.validate().is_ok());
        assert_eq!(config.modes.len(), 1);
        assert!(OracleConfig::default().with_modes([]).validate().is_err());
    }
}
