use serde::{Deserialize, Serialize};
use tracing::info;

use super::Cart;
use crate::catalog::{Coupon, DiscountKind, Product, find_product};

/// One priced cart row as it appears on the order and the invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// Tax share as a fraction, e.g. 0.2 for 20% included tax.
    pub tax_rate: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    pub total: f64,
    pub old_total: f64,
    pub tax: f64,
    pub discount: f64,
}

/// Prices every cart entry against the product catalog.
///
/// Ids with no matching product are skipped; the cart may reference a
/// product the back office deleted in the meantime.
pub fn price_cart(cart: &Cart, products: &[Product]) -> Vec<LineItem> {
    cart.iter()
        .filter_map(|entry| {
            find_product(products, &entry.product_id).map(|product| {
                let unit_price = product.effective_price();
                LineItem {
                    name: product.name.clone(),
                    quantity: entry.quantity,
                    unit_price,
                    tax_rate: product.tax_rate(),
                    total: unit_price * entry.quantity as f64,
                }
            })
        })
        .collect()
}

/// Sums line items and applies an optional discount.
///
/// Prices are tax-inclusive, so each line's tax share is extracted as
/// `total / (1 + rate) * rate`. An absolute coupon subtracts its value
/// from total and tax, clamped at zero; a percent coupon scales both.
pub fn totals(items: &[LineItem], discount: Option<&Coupon>) -> CartTotals {
    let old_total: f64 = items.iter().map(|item| item.total).sum();
    let mut total = old_total;
    let mut tax: f64 = items
        .iter()
        .map(|item| item.total / (1.0 + item.tax_rate) * item.tax_rate)
        .sum();

    if let Some(coupon) = discount {
        match coupon.kind {
            DiscountKind::Absolute => {
                total = (total - coupon.value).max(0.0);
                tax = (tax - coupon.value).max(0.0);
            }
            DiscountKind::Percent => {
                let factor = (100.0 - coupon.value) / 100.0;
                total *= factor;
                tax *= factor;
            }
        }
    }

    let totals = CartTotals {
        total,
        old_total,
        tax,
        discount: old_total - total,
    };
    info!(
        total = totals.total,
        tax = totals.tax,
        discount = totals.discount,
        "cart totals calculated"
    );
    totals
}
