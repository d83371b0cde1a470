//! Configuration management for the credential validator
//!
//! Settings come from an optional `config.toml` with environment overrides
//! (`CREDENTIAL_VALIDATOR_MIN_PASSWORD_LENGTH=8`). Anything left unset falls
//! back to the built-in defaults.

use config::{Config, Environment, File, Map};
use log::debug;
use serde::Deserialize;

use crate::validation::{
    MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, PasswordValidator, Requirement, RequirementKind,
};

pub const DEFAULT_CONFIG_PATH: &str = "config";
pub const ENV_PREFIX: &str = "CREDENTIAL_VALIDATOR";

/// Validator settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Minimum username length in characters
    #[serde(default = "default_min_username_length")]
    pub min_username_length: usize,

    /// Minimum password length in characters
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Password requirements, checked in this order
    #[serde(default)]
    pub requirements: Vec<RequirementKind>,
}

fn default_min_username_length() -> usize {
    MIN_USERNAME_LENGTH
}

fn default_min_password_length() -> usize {
    MIN_PASSWORD_LENGTH
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_username_length: MIN_USERNAME_LENGTH,
            min_password_length: MIN_PASSWORD_LENGTH,
            requirements: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from ./config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH, ENV_PREFIX)
    }

    /// Load from the given file (extension optional, file optional) and
    /// environment prefix
    pub fn load_from(path: &str, env_prefix: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_vars(path, env_prefix, None)
    }

    /// Like `load_from`, but reads overrides from `vars` instead of the
    /// process environment when given
    pub fn load_with_vars(
        path: &str,
        env_prefix: &str,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let config: ValidatorConfig = settings.try_deserialize()?;
        config.validate()?;
        debug!("Loaded validator configuration: {:?}", config);
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_username_length == 0 {
            return Err(config::ConfigError::Message(
                "min_username_length must be greater than 0".into(),
            ));
        }

        if self.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Build the validator these settings describe
    pub fn build_validator(&self) -> PasswordValidator {
        let requirements = self
            .requirements
            .iter()
            .copied()
            .map(Requirement::from)
            .collect();

        PasswordValidator::new(requirements)
            .with_min_username_length(self.min_username_length)
            .with_min_password_length(self.min_password_length)
    }
}
