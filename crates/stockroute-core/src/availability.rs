//! Two-tier fulfillment policy: stock at the nearest warehouse first, stock
//! anywhere second.

use serde::{Deserialize, Serialize};

use crate::warehouses::WarehouseRegistry;

/// One (variant, stock location) quantity observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub location_name: String,
    /// Always `>= 0`.
    pub quantity: i64,
}

impl InventoryRecord {
    #[must_use]
    pub fn new(location_name: impl Into<String>, quantity: i64) -> Self {
        Self {
            location_name: location_name.into(),
            quantity: quantity.max(0),
        }
    }

    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionTier {
    Nearest,
    Fallback,
}

impl std::fmt::Display for SelectionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionTier::Nearest => write!(f, "nearest"),
            SelectionTier::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    Available {
        warehouse: String,
        quantity: i64,
        tier: SelectionTier,
    },
    OutOfStock,
}

impl SelectionResult {
    /// Customer-facing sentence for an available result.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            SelectionResult::Available {
                warehouse,
                tier: SelectionTier::Nearest,
                ..
            } => Some(format!("Product is available at {warehouse}.")),
            SelectionResult::Available {
                warehouse,
                tier: SelectionTier::Fallback,
                ..
            } => Some(format!(
                "Product is not available near your pincode but is available at {warehouse}."
            )),
            SelectionResult::OutOfStock => None,
        }
    }
}

/// Applies the fulfillment policy to `records`, in their original order.
///
/// 1. First in-stock record whose location maps to `nearest_postal_code`.
/// 2. Otherwise the first in-stock record at any location.
/// 3. Otherwise out of stock.
#[must_use]
pub fn resolve_availability(
    records: &[InventoryRecord],
    nearest_postal_code: &str,
    registry: &WarehouseRegistry,
) -> SelectionResult {
    let nearest = records.iter().find(|record| {
        record.in_stock()
            && registry.postal_code_for_location(&record.location_name)
                == Some(nearest_postal_code)
    });

    if let Some(record) = nearest {
        return SelectionResult::Available {
            warehouse: record.location_name.clone(),
            quantity: record.quantity,
            tier: SelectionTier::Nearest,
        };
    }

    match records.iter().find(|record| record.in_stock()) {
        Some(record) => SelectionResult::Available {
            warehouse: record.location_name.clone(),
            quantity: record.quantity,
            tier: SelectionTier::Fallback,
        },
        None => SelectionResult::OutOfStock,
    }
}
