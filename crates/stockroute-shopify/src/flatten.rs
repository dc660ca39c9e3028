//! Flattening from the nested GraphQL product shape to
//! [`stockroute_core::InventoryRecord`]s.

use stockroute_core::InventoryRecord;

use crate::query::AVAILABLE_QUANTITY_NAME;
use crate::types::{InventoryQuantity, ProductInventory};

/// One record per (variant, inventory level), in response order.
///
/// Records for the same location across variants are kept separate.
#[must_use]
pub fn flatten_inventory(product: &ProductInventory) -> Vec<InventoryRecord> {
    product
        .variants
        .edges
        .iter()
        .filter_map(|variant| variant.node.inventory_item.as_ref())
        .flat_map(|item| item.inventory_levels.edges.iter())
        .map(|level| {
            InventoryRecord::new(
                level.node.location.name.clone(),
                available_quantity(&level.node.quantities),
            )
        })
        .collect()
}

/// Quantity of the `available` bucket. A missing bucket, a null quantity and
/// zero are all 0; other buckets are never substituted.
fn available_quantity(quantities: &[InventoryQuantity]) -> i64 {
    quantities
        .iter()
        .find(|q| q.name.as_deref() == Some(AVAILABLE_QUANTITY_NAME))
        .and_then(|q| q.quantity)
        .unwrap_or(0)
}
