use serde::{Deserialize, Serialize};

use crate::markdown;

/// One entry of the products document.
///
/// `raw_description` holds the markdown-dialect source the admin editor
/// works on; `description` is the rendered HTML served on product pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Sale price; zero or absent means no sale is running.
    #[serde(default)]
    pub new_price: f64,
    /// Tax percentage included in the price.
    #[serde(default = "default_tax")]
    pub tax: f64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub raw_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub keyword: String,
}

fn default_tax() -> f64 {
    20.0
}

impl Product {
    /// The price a customer actually pays: the sale price when one is
    /// set, the regular price otherwise.
    pub fn effective_price(&self) -> f64 {
        if self.new_price > 0.0 {
            self.new_price
        } else {
            self.price
        }
    }

    /// Tax share as a fraction, e.g. 20 -> 0.2.
    pub fn tax_rate(&self) -> f64 {
        self.tax / 100.0
    }

    /// Renders `raw_description` to the HTML shown on the product page.
    pub fn render_description(&self) -> String {
        markdown::to_html(&self.raw_description)
    }
}
