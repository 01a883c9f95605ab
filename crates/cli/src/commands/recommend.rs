//! Recommendation command.

use neural_commerce_storefront::catalog::seed_products;
use neural_commerce_storefront::{Catalog, RecommendationPolicy, StorefrontConfig, recommend};

use super::catalog::product_line;
use super::{OutputFormat, out, out_json};

/// Print recommendations for the seed catalog without the display delay.
///
/// Threshold and limit fall back to the environment configuration when not
/// given on the command line.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the limit is zero, or
/// output cannot be written.
pub fn show(
    threshold: Option<u8>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let policy = resolve_policy(config.recommendation_policy, threshold, limit)?;
    let catalog = Catalog::new(seed_products())?;
    let picks = recommend(catalog.products(), policy);

    tracing::debug!(
        threshold = policy.threshold,
        limit = policy.limit,
        picks = picks.len(),
        "Computed recommendations"
    );

    match format {
        OutputFormat::Json => out_json(&picks),
        OutputFormat::Text => {
            if picks.is_empty() {
                out(&format!("No products score above {}.", policy.threshold))?;
            }
            for product in picks {
                out(&product_line(product))?;
            }
            Ok(())
        }
    }
}

/// Apply command-line overrides to the configured policy.
fn resolve_policy(
    base: RecommendationPolicy,
    threshold: Option<u8>,
    limit: Option<usize>,
) -> Result<RecommendationPolicy, String> {
    let policy = RecommendationPolicy {
        threshold: threshold.unwrap_or(base.threshold),
        limit: limit.unwrap_or(base.limit),
    };
    if policy.limit == 0 {
        return Err("--limit must be at least 1".to_string());
    }
    if policy.threshold > 100 {
        return Err("--threshold must be between 0 and 100".to_string());
    }
    Ok(policy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_policy_defaults() {
        let policy = resolve_policy(RecommendationPolicy::default(), None, None).unwrap();
        assert_eq!(policy, RecommendationPolicy::default());
    }

    #[test]
    fn test_resolve_policy_overrides() {
        let policy = resolve_policy(RecommendationPolicy::default(), Some(80), Some(5)).unwrap();
        assert_eq!(policy.threshold, 80);
        assert_eq!(policy.limit, 5);
    }

    #[test]
    fn test_resolve_policy_rejects_bad_values() {
        assert!(resolve_policy(RecommendationPolicy::default(), None, Some(0)).is_err());
        assert!(resolve_policy(RecommendationPolicy::default(), Some(101), None).is_err());
    }
}
