//! Shopify Admin GraphQL request and response types for the product
//! inventory query.
//!
//! ## Observed shape
//!
//! ### Envelope
//! Every response is `{ "data": ..., "errors": [...] }`. Either key may be
//! absent. A malformed product GID produces `errors` with no `data`; an
//! unknown but well-formed GID produces `{ "data": { "product": null } }`.
//!
//! ### Connections
//! Relay-style `{ "edges": [{ "node": ... }] }`. Empty connections come back
//! as `"edges": []`.
//!
//! ### `quantities`
//! A list of `{ "name", "quantity" }` buckets filtered by the `names`
//! argument. The list may be empty for locations that never stocked the item.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariables<'a> {
    pub product_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ProductQueryData {
    #[serde(default)]
    pub product: Option<ProductInventory>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// A product with its variants' inventory levels.
#[derive(Debug, Deserialize)]
pub struct ProductInventory {
    /// Global ID, e.g. `"gid://shopify/Product/8123456789"`.
    pub id: String,
    pub title: String,
    pub variants: Connection<ProductVariant>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    /// Absent when the token lacks inventory scopes.
    #[serde(default)]
    pub inventory_item: Option<InventoryItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub inventory_levels: Connection<InventoryLevel>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryLevel {
    pub location: StockLocation,
    #[serde(default)]
    pub quantities: Vec<InventoryQuantity>,
}

#[derive(Debug, Deserialize)]
pub struct StockLocation {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// One named quantity bucket (`available`, `on_hand`, `committed`, ...).
#[derive(Debug, Deserialize)]
pub struct InventoryQuantity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}
