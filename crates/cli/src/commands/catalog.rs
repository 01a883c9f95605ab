//! Catalog listing commands.

use neural_commerce_core::{Category, Product};
use neural_commerce_storefront::Catalog;
use neural_commerce_storefront::catalog::seed_products;
use serde_json::json;

use super::{OutputFormat, out, out_json};

/// List the products matching a category and search query.
///
/// # Errors
///
/// Returns an error if the category is unknown or output cannot be written.
pub fn list(category: &str, query: &str, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let category = Category::parse(category)?;
    let catalog = Catalog::new(seed_products())?;
    let products = catalog.filter(category, query);

    tracing::debug!(%category, query, matches = products.len(), "Filtered catalog");

    match format {
        OutputFormat::Json => out_json(&products),
        OutputFormat::Text => {
            if products.is_empty() {
                out("No products found. Try adjusting your search or category filter.")?;
                return Ok(());
            }
            for product in products {
                out(&product_line(product))?;
            }
            Ok(())
        }
    }
}

/// List the category tabs in display order.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn categories(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            let tabs: Vec<_> = Category::ALL
                .iter()
                .map(|c| json!({ "id": c.id(), "name": c.display_name(), "icon": c.icon() }))
                .collect();
            out_json(&tabs)
        }
        OutputFormat::Text => {
            for category in Category::ALL {
                out(&format!(
                    "{:<12} {} {}",
                    category.id(),
                    category.icon(),
                    category.display_name()
                ))?;
            }
            Ok(())
        }
    }
}

/// One-line text summary of a product.
pub(super) fn product_line(product: &Product) -> String {
    let discount = if product.is_discounted() {
        format!(" (was ${})", product.original_price.amount)
    } else {
        String::new()
    };
    let trending = if product.trending { " [trending]" } else { "" };
    format!(
        "{:>3}  {:<28} ${}{}  AI {}%  {}/5 ({} reviews){}",
        product.id,
        product.name,
        product.price.amount,
        discount,
        product.ai_score,
        product.rating,
        product.reviews,
        trending,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use neural_commerce_core::ProductId;

    #[test]
    fn test_product_line_shows_discount() {
        let catalog = Catalog::seed();
        let product = catalog.get(ProductId::new(1)).unwrap();
        let line = product_line(product);
        assert!(line.contains(&product.name));
        assert!(line.contains("(was $"));
        assert!(line.contains(&format!("AI {}%", product.ai_score)));
    }

    #[test]
    fn test_list_rejects_unknown_category() {
        let err = list("garden", "", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("garden"));
    }
}
