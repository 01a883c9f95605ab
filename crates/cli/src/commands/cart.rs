//! Cart replay command.

use neural_commerce_core::ProductId;
use neural_commerce_storefront::catalog::seed_products;
use neural_commerce_storefront::{Catalog, StoreEvent, StoreState, reduce};
use serde_json::json;

use super::{OutputFormat, out, out_json};

/// Replay add-to-cart events against an empty cart and print the result.
///
/// # Errors
///
/// Returns an error if any id is not in the catalog or output cannot be
/// written. Nothing is printed for a failed replay.
pub fn replay(product_ids: &[i32], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(seed_products())?;
    let state = replay_events(&catalog, product_ids)?;
    let cart = &state.cart;

    match format {
        OutputFormat::Json => out_json(&json!({
            "lines": cart,
            "total_item_count": cart.total_item_count(),
        })),
        OutputFormat::Text => {
            for line in cart.lines() {
                out(&format!(
                    "{:>3}  {:<28} x{}",
                    line.product_id(),
                    line.product.name,
                    line.quantity
                ))?;
            }
            out(&format!("Total items: {}", cart.total_item_count()))?;
            Ok(())
        }
    }
}

/// Fold one `AddToCart` event per id through the reducer.
fn replay_events(
    catalog: &Catalog,
    product_ids: &[i32],
) -> Result<StoreState, neural_commerce_storefront::StoreError> {
    product_ids
        .iter()
        .map(|&id| StoreEvent::AddToCart(ProductId::new(id)))
        .try_fold(StoreState::initial(), |state, event| {
            reduce(&state, catalog, event)
        })
}
