use crate::utils::error::{ConvertError, Result};
use std::env;

const DEFAULT_ALLOW_ORIGIN: &str = "*";
const DEFAULT_MAX_AGE_SECONDS: u32 = 3600;

/// Response header settings for the HTTP handler, read from the function's
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub allow_origin: String,
    pub cors_max_age: u32,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
            cors_max_age: DEFAULT_MAX_AGE_SECONDS,
        }
    }
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let allow_origin =
            env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.to_string());

        let cors_max_age = match env::var("CORS_MAX_AGE") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConvertError::InvalidConfigValueError {
                    field: "CORS_MAX_AGE".to_string(),
                    value: value.clone(),
                    reason: "Expected a number of seconds".to_string(),
                })?,
            Err(_) => DEFAULT_MAX_AGE_SECONDS,
        };

        Ok(Self {
            allow_origin,
            cors_max_age,
        })
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string(
            "CORS_ALLOW_ORIGIN",
            &self.allow_origin,
        )?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_default_is_permissive() {
        let config = LambdaConfig::default();
        assert_eq!(config.allow_origin, "*");
        assert_eq!(config.cors_max_age, 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_origin_fails_validation() {
        let config = LambdaConfig {
            allow_origin: "  ".to_string(),
            cors_max_age: 60,
        };
        assert!(config.validate().is_err());
    }
}
