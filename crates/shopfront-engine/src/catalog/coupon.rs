use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a coupon's value is applied to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Subtracts `value` from the total, clamped at zero.
    Absolute,
    /// Scales the total by `(100 - value) / 100`.
    Percent,
}

/// A discount code. The id doubles as the code customers type in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: f64,
    /// `None` means unlimited redemptions.
    #[serde(default)]
    pub uses_remaining: Option<i64>,
    /// Last valid day, `None` means no expiry.
    #[serde(default)]
    pub valid_till: Option<NaiveDate>,
}

impl Coupon {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_till.is_some_and(|till| till < today)
    }

    pub fn is_exhausted(&self) -> bool {
        self.uses_remaining.is_some_and(|left| left <= 0)
    }
}
