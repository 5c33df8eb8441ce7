use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Lookup / search responses
// ============================================================================

/// Full variant data returned by the barcode-lookup endpoint.
///
/// Refetched on every scan or picker selection; the client never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantLookup {
    pub variant_id: i64,
    pub barcode: String,
    pub sale_price: i64,
    pub product_id: i64,
    pub product_name: String,
    pub color_hex: Option<String>,
    pub stock: i64,
    #[serde(default)]
    pub size: Option<String>,
}

/// One row of the per-product variant listing shown in the picker modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRow {
    pub variant_id: i64,
    pub barcode: String,
    pub sale_price: i64,
    #[serde(default)]
    pub color_hex: Option<String>,
    pub stock: i64,
    #[serde(default)]
    pub size: Option<String>,
}

/// Slim product record used by the name-search autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLite {
    pub id: i64,
    pub product_name: String,
}

// ============================================================================
// Sale creation
// ============================================================================

/// One cart line as sent to the backend: the barcode identifies the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub barcode: String,
    pub quantity: u32,
}

/// Payload for `POST /api/ventas`, built at submit time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    pub user_id: i64,
    pub payment_amount: i64,
    pub discount: i64,
    pub lines: Vec<SaleLine>,
}

/// Completed sale as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResult {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub status: String,
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
    pub payment_amount: i64,
    pub change: i64,
    #[serde(default)]
    pub ticket_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_lookup_deserializes_camel_case() {
        let json = r##"{
            "variantId": 7,
            "barcode": "750100000001",
            "salePrice": 350,
            "productId": 3,
            "productName": "Blusa manga larga",
            "colorHex": "#aa3355",
            "stock": 12,
            "size": "M"
        }"##;
        let v: VariantLookup = serde_json::from_str(json).unwrap();
        assert_eq!(v.variant_id, 7);
        assert_eq!(v.barcode, "750100000001");
        assert_eq!(v.sale_price, 350);
        assert_eq!(v.size.as_deref(), Some("M"));
    }

    #[test]
    fn variant_row_size_and_color_are_optional() {
        let json = r#"{"variantId": 1, "barcode": "x", "salePrice": 100, "stock": 0}"#;
        let v: VariantRow = serde_json::from_str(json).unwrap();
        assert!(v.color_hex.is_none());
        assert!(v.size.is_none());
    }

    #[test]
    fn sale_request_serializes_camel_case() {
        let req = SaleRequest {
            user_id: 1,
            payment_amount: 200,
            discount: 50,
            lines: vec![SaleLine {
                barcode: "750100000001".into(),
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["paymentAmount"], 200);
        assert_eq!(json["lines"][0]["barcode"], "750100000001");
        assert_eq!(json["lines"][0]["quantity"], 2);
    }
}
