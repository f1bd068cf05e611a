//! Request DTOs with presence validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::error::AppError;
use catalog_entity::product::ProductDraft;

/// Create/replace payload for a product.
///
/// All fields are optional at the wire level so that missing-field errors
/// are reported as a 400 with a stable message instead of a deserialization
/// failure. A present price of `0` is valid; only absence is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Product name.
    pub name: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<Decimal>,
}

impl ProductPayload {
    /// Enforce the presence contract and produce the domain draft.
    ///
    /// `name` must be present and non-empty; `price` must be present.
    pub fn into_draft(self) -> Result<ProductDraft, AppError> {
        let name = self.name.filter(|n| !n.trim().is_empty());

        match (name, self.price) {
            (Some(name), Some(price)) => Ok(ProductDraft {
                name,
                description: self.description,
                price,
            }),
            _ => Err(AppError::validation("Name and price are required")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_and_price_rejected() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"description":"no name or price"}"#).unwrap();
        let err = payload.into_draft().unwrap_err();
        assert_eq!(err.message, "Name and price are required");
    }

    #[test]
    fn test_empty_name_rejected() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"   ","price":1.5}"#).unwrap();
        assert!(payload.into_draft().is_err());
    }

    #[test]
    fn test_zero_price_is_valid() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"Freebie","price":0}"#).unwrap();
        let draft = payload.into_draft().unwrap();
        assert_eq!(draft.price, Decimal::ZERO);
    }

    #[test]
    fn test_full_payload_maps_to_draft() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{"name":"Widget","description":"A widget","price":9.99}"#,
        )
        .unwrap();
        let draft = payload.into_draft().unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.description.as_deref(), Some("A widget"));
    }
}
