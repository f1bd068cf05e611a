//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog item stored in the `products` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Surrogate key, assigned by the database on insert.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unit price, `NUMERIC(10,2)` in storage.
    pub price: Decimal,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input fields for creating or replacing a product.
///
/// `update` replaces all three fields together; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_serializes_as_number() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(999, 2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], serde_json::json!(9.99));
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_draft_accepts_numeric_price() {
        let draft: ProductDraft =
            serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, Decimal::new(999, 2));
        assert!(draft.description.is_none());
    }
}
