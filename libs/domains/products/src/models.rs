use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// What a stock reduction does when it asks for more than is available.
///
/// Parsed from `STOCK_POLICY` (`reject` or `allow-negative`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StockPolicy {
    /// Fail with 409 and leave the stock unchanged
    #[default]
    Reject,
    /// Let the counter go negative (backorder)
    AllowNegative,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// May be negative when the service runs with `allow-negative`
    pub available_stock: i32,
    /// Set on creation and on every stock change
    pub last_update_date: DateTime<Utc>,
    pub supplier_id: Uuid,
    pub image_id: Option<Uuid>,
}

/// DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub available_stock: i32,
    /// Also accepted as `suppler_id`
    #[serde(alias = "suppler_id")]
    pub supplier_id: Uuid,
}

/// Query for `PATCH /product/{id}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReduceStockParams {
    /// Units to take from stock
    #[validate(range(min = 0))]
    pub count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_stock_policy_parsing() {
        assert_eq!(StockPolicy::from_str("reject").unwrap(), StockPolicy::Reject);
        assert_eq!(
            StockPolicy::from_str("allow-negative").unwrap(),
            StockPolicy::AllowNegative
        );
        assert!(StockPolicy::from_str("maybe").is_err());
        assert_eq!(StockPolicy::default(), StockPolicy::Reject);
        assert_eq!(StockPolicy::AllowNegative.to_string(), "allow-negative");
    }

    #[test]
    fn test_legacy_supplier_alias_is_accepted() {
        let supplier_id = Uuid::now_v7();
        let input: CreateProduct = serde_json::from_value(json!({
            "name": "Widget",
            "category": "tools",
            "price": 9.5,
            "available_stock": 3,
            "suppler_id": supplier_id,
        }))
        .unwrap();

        assert_eq!(input.supplier_id, supplier_id);
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let input = CreateProduct {
            name: "Widget".to_string(),
            category: "tools".to_string(),
            price: -1.0,
            available_stock: -3,
            supplier_id: Uuid::now_v7(),
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("available_stock"));
    }
}
