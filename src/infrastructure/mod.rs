pub mod models;
pub mod shopify;

pub use shopify::ShopifyOrderSource;
