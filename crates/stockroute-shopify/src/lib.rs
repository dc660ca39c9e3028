pub mod client;
pub mod error;
pub mod flatten;
pub mod query;
pub mod types;

pub use client::AdminClient;
pub use error::ShopifyError;
pub use flatten::flatten_inventory;
pub use types::{ProductInventory, ProductVariant};
