use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::{Coupon, Event, Order, Product};

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    Name,
    Price,
    Id,
}

/// Search criteria for the storefront and back-office product listings.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    /// Case-insensitive regex matched against id, name and keyword.
    /// Blank text matches everything; an unparsable user regex matches
    /// nothing.
    pub text: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<ProductSortKey>,
    pub ascending: bool,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            text: None,
            category: None,
            sort_by: None,
            ascending: true,
        }
    }
}

/// Filters and sorts a product collection.
pub fn query_products<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let mut matched: Vec<&Product> = match query.text.as_deref() {
        Some(text) => match user_regex(text) {
            Some(pattern) => products
                .iter()
                .filter(|p| {
                    pattern.is_match(&p.id)
                        || pattern.is_match(&p.name)
                        || pattern.is_match(&p.keyword)
                })
                .collect(),
            None => Vec::new(),
        },
        None => products.iter().collect(),
    };

    if let Some(category) = query.category.as_deref() {
        matched.retain(|p| p.categories.iter().any(|c| c == category));
    }

    if let Some(key) = query.sort_by {
        match key {
            ProductSortKey::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
            ProductSortKey::Price => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
            ProductSortKey::Id => matched.sort_by(|a, b| a.id.cmp(&b.id)),
        }
        if !query.ascending {
            matched.reverse();
        }
    }

    debug!(matches = matched.len(), "products queried");
    matched
}

/// Search criteria for the event calendar.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Case-insensitive regex matched against name and description.
    pub text: Option<String>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

pub fn query_events<'a>(events: &'a [Event], query: &EventQuery) -> Vec<&'a Event> {
    let mut matched: Vec<&Event> = match query.text.as_deref() {
        Some(text) => match user_regex(text) {
            Some(pattern) => events
                .iter()
                .filter(|e| pattern.is_match(&e.name) || pattern.is_match(&e.description))
                .collect(),
            None => Vec::new(),
        },
        None => events.iter().collect(),
    };

    if let Some(day) = query.day {
        matched.retain(|e| e.day == day);
    }
    if let Some(month) = query.month {
        matched.retain(|e| e.month == month);
    }
    if let Some(year) = query.year {
        matched.retain(|e| e.year == year);
    }

    debug!(matches = matched.len(), "events queried");
    matched
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

pub fn find_coupon<'a>(coupons: &'a [Coupon], code: &str) -> Option<&'a Coupon> {
    coupons.iter().find(|c| c.id == code)
}

pub fn find_order<'a>(orders: &'a [Order], id: &str) -> Option<&'a Order> {
    orders.iter().find(|o| o.id == id)
}

fn user_regex(text: &str) -> Option<Regex> {
    let text = if text.trim().is_empty() { ".*" } else { text };
    RegexBuilder::new(text).case_insensitive(true).build().ok()
}
