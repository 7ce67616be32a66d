use serde::{Deserialize, Serialize};
use tracing::info;

/// The server-side shopping cart: product ids mapped to quantities,
/// iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: i64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a quantity delta for a product.
    ///
    /// An existing entry is removed when the delta is zero or would drop
    /// the quantity to zero or below; otherwise the delta is added on.
    /// A non-positive delta for a product not in the cart is ignored.
    pub fn apply(&mut self, product_id: &str, delta: i64) {
        match self.entries.iter().position(|e| e.product_id == product_id) {
            Some(pos) => {
                let old = self.entries[pos].quantity;
                if old + delta <= 0 || delta == 0 {
                    info!(product_id, "removing product from cart");
                    self.entries.remove(pos);
                } else {
                    info!(product_id, old, new = old + delta, "updating cart quantity");
                    self.entries[pos].quantity = old + delta;
                }
            }
            None if delta > 0 => {
                info!(product_id, quantity = delta, "adding product to cart");
                self.entries.push(CartEntry {
                    product_id: product_id.to_string(),
                    quantity: delta,
                });
            }
            None => {}
        }
    }

    pub fn quantity(&self, product_id: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map(|e| e.quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the cart, e.g. after a completed checkout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
