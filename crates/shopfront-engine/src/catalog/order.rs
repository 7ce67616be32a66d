use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::checkout::LineItem;

/// Customer details captured by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Private or business customer.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub email: String,
    pub tel: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Shipped,
    Done,
    Cancelled,
}

/// One entry of the orders document, written once at checkout and then
/// only touched by the back office (status and note edits).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    #[serde(flatten)]
    pub customer: CustomerDetails,
    pub items: Vec<LineItem>,
    pub total_price: f64,
    pub old_total: f64,
    pub total_tax: f64,
    pub discount: f64,
    #[serde(with = "order_date")]
    pub date: NaiveDate,
    pub status: OrderStatus,
    #[serde(default)]
    pub note: String,
}

/// Order dates travel through JSON as `dd.mm.yyyy`, unlike coupon expiry
/// dates which use ISO `yyyy-mm-dd`.
mod order_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d.%m.%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_order() -> Order {
        Order {
            id: "1700000003".to_string(),
            customer: CustomerDetails {
                kind: "private".to_string(),
                name: "Erika Musterfrau".to_string(),
                email: "erika@example.com".to_string(),
                tel: "+43 660 1234567".to_string(),
                address: "Hauptstraße 1".to_string(),
                country: "AT".to_string(),
                city: "Wien".to_string(),
                zip_code: "1010".to_string(),
            },
            items: vec![],
            total_price: 18.0,
            old_total: 20.0,
            total_tax: 3.0,
            discount: 2.0,
            date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            status: OrderStatus::Open,
            note: String::new(),
        }
    }

    #[test]
    fn customer_fields_are_flattened_and_date_is_german() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["type"], "private");
        assert_eq!(json["name"], "Erika Musterfrau");
        assert_eq!(json["date"], "04.08.2026");
        assert_eq!(json["status"], "open");
        assert!(json.get("customer").is_none());
    }

    #[test]
    fn order_round_trips_through_json() {
        let order = sample_order();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn malformed_order_date_is_a_deserialization_error() {
        let mut json = serde_json::to_value(sample_order()).unwrap();
        json["date"] = "2026-08-04".into();
        assert!(serde_json::from_value::<Order>(json).is_err());
    }
}
