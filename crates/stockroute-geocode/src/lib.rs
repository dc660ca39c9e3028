pub mod client;
pub mod error;
pub mod types;

pub use client::NominatimClient;
pub use error::GeocodeError;
pub use types::NominatimPlace;
