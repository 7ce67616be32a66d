use chrono::NaiveDate;
use tracing::info;

use super::{CartTotals, LineItem};
use crate::catalog::{CustomerDetails, Order, OrderStatus};

/// Order ids continue the shop's epoch-offset sequence.
const ORDER_ID_BASE: u64 = 1_700_000_000;

/// Builds a new order from checkout state.
///
/// `existing_orders` is the current size of the order collection and
/// drives the sequential id. The order starts `open` with an empty note.
pub fn build_order(
    customer: CustomerDetails,
    items: Vec<LineItem>,
    totals: CartTotals,
    existing_orders: usize,
    today: NaiveDate,
) -> Order {
    let id = (ORDER_ID_BASE + existing_orders as u64 + 1).to_string();
    info!(order_id = %id, total = totals.total, "order created");
    Order {
        id,
        customer,
        items,
        total_price: totals.total,
        old_total: totals.old_total,
        total_tax: totals.tax,
        discount: totals.discount,
        date: today,
        status: OrderStatus::Open,
        note: String::new(),
    }
}
