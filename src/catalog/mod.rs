//! Catalog domain: product records and the collection endpoints serving them.

pub mod endpoint;
pub mod product;

pub use endpoint::ProductsEndpoint;
pub use product::{decode_products, Product, ProductId};
