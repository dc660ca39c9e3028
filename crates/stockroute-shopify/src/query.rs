//! GraphQL documents sent to the Shopify Admin API.

/// Product → variants → inventory levels with the `available` quantity per
/// location. Both connections are capped at 10 nodes; products with more
/// variants or locations are truncated.
pub const PRODUCT_INVENTORY_QUERY: &str = r#"
query getProductById($productId: ID!) {
  product(id: $productId) {
    id
    title
    variants(first: 10) {
      edges {
        node {
          id
          title
          inventoryItem {
            inventoryLevels(first: 10) {
              edges {
                node {
                  location {
                    id
                    name
                  }
                  quantities(names: ["available"]) {
                    name
                    quantity
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Name of the quantity bucket that counts sellable stock.
pub const AVAILABLE_QUANTITY_NAME: &str = "available";
