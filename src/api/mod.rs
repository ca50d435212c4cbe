pub mod client;
pub mod traits;
pub mod types;

pub use client::MarketplaceClient;
pub use traits::MarketplaceApi;
