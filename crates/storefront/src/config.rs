//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `NC_RECOMMENDATION_DELAY_MS` - Delay before recommendations appear (default: 1000)
//! - `NC_RECOMMENDATION_THRESHOLD` - AI-score a product must exceed to be recommended (default: 90)
//! - `NC_RECOMMENDATION_LIMIT` - Maximum number of recommendations (default: 3)
//! - `NC_HEADLESS` - `true` to log renders instead of drawing them (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production, staging)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::recommend::RecommendationPolicy;

const DEFAULT_RECOMMENDATION_DELAY_MS: u64 = 1000;
const MAX_AI_SCORE: u8 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// How long the simulated inference call takes before recommendations show.
    pub recommendation_delay: Duration,
    /// Threshold and size of the recommendation list.
    pub recommendation_policy: RecommendationPolicy,
    /// Log each render through tracing instead of writing it to stdout.
    pub headless: bool,
    /// Sentry DSN for error tracking (contains the project key)
    pub sentry_dsn: Option<SecretString>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            recommendation_delay: Duration::from_millis(DEFAULT_RECOMMENDATION_DELAY_MS),
            recommendation_policy: RecommendationPolicy::default(),
            headless: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed or is
    /// out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed or is out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RecommendationPolicy::default();

        let delay_ms = parse_or_default(
            &lookup,
            "NC_RECOMMENDATION_DELAY_MS",
            DEFAULT_RECOMMENDATION_DELAY_MS,
        )?;
        let threshold = parse_or_default(&lookup, "NC_RECOMMENDATION_THRESHOLD", defaults.threshold)?;
        if threshold > MAX_AI_SCORE {
            return Err(ConfigError::InvalidEnvVar(
                "NC_RECOMMENDATION_THRESHOLD".to_string(),
                format!("must be at most {MAX_AI_SCORE} (got {threshold})"),
            ));
        }
        let limit = parse_or_default(&lookup, "NC_RECOMMENDATION_LIMIT", defaults.limit)?;
        if limit == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "NC_RECOMMENDATION_LIMIT".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let headless = parse_or_default(&lookup, "NC_HEADLESS", false)?;

        Ok(Self {
            recommendation_delay: Duration::from_millis(delay_ms),
            recommendation_policy: RecommendationPolicy { threshold, limit },
            headless,
            sentry_dsn: lookup("SENTRY_DSN")
                .filter(|dsn| !dsn.is_empty())
                .map(SecretString::from),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.recommendation_delay, Duration::from_millis(1000));
        assert_eq!(config.recommendation_policy.threshold, 90);
        assert_eq!(config.recommendation_policy.limit, 3);
        assert!(!config.headless);
        assert!(config.sentry_dsn.is_none());
        assert!(config.sentry_environment.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("NC_RECOMMENDATION_DELAY_MS", "250"),
            ("NC_RECOMMENDATION_THRESHOLD", "95"),
            ("NC_RECOMMENDATION_LIMIT", " 5 "),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ]))
        .unwrap();

        assert_eq!(config.recommendation_delay, Duration::from_millis(250));
        assert_eq!(config.recommendation_policy.threshold, 95);
        assert_eq!(config.recommendation_policy.limit, 5);
        assert_eq!(
            config.sentry_dsn.unwrap().expose_secret(),
            "https://key@sentry.example/1"
        );
        assert_eq!(config.sentry_environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_headless() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[("NC_HEADLESS", "true")])).unwrap();
        assert!(config.headless);

        let result = StorefrontConfig::from_lookup(lookup_from(&[("NC_HEADLESS", "yes")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "NC_HEADLESS"
        ));
    }

    #[test]
    fn test_empty_sentry_dsn_is_ignored() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_delay() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("NC_RECOMMENDATION_DELAY_MS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "NC_RECOMMENDATION_DELAY_MS"
        ));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("NC_RECOMMENDATION_THRESHOLD", "101")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "NC_RECOMMENDATION_THRESHOLD"
        ));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("NC_RECOMMENDATION_LIMIT", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "NC_RECOMMENDATION_LIMIT"
        ));
    }

    #[test]
    fn test_debug_redacts_sentry_dsn() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[(
            "SENTRY_DSN",
            "https://super_secret_key@sentry.example/1",
        )]))
        .unwrap();

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super_secret_key"));
    }
}
