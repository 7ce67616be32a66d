//! Catalog models and in-memory queries.
//!
//! Each type mirrors one of the shop's flat JSON documents. The engine
//! never touches the files itself; the caller hands collections in as
//! slices and persists whatever comes back.

mod coupon;
mod event;
mod order;
mod product;
mod query;

pub use coupon::{Coupon, DiscountKind};
pub use event::Event;
pub use order::{CustomerDetails, Order, OrderStatus};
pub use product::Product;
pub use query::{EventQuery, ProductQuery, ProductSortKey, find_coupon, find_order, find_product, query_events, query_products};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a caller-supplied products document.
pub fn products_from_json(json: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn coupons_from_json(json: &str) -> Result<Vec<Coupon>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn events_from_json(json: &str) -> Result<Vec<Event>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn orders_from_json(json: &str) -> Result<Vec<Order>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
