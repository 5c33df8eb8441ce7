//! Typed endpoint functions for the sale workflow.

use contracts::domain::sale::{ProductLite, SaleRequest, SaleResult, VariantLookup, VariantRow};

use crate::shared::api_utils::api_base;
use crate::shared::http;

/// Resolve a scanned or typed barcode to its full variant data.
pub async fn fetch_variant_by_barcode(code: &str) -> Result<VariantLookup, String> {
    let path = format!("/api/variantes/codigo/{}", urlencoding::encode(code));
    http::get_json(&path).await
}

/// Autocomplete search by product name. Blank queries resolve to an empty
/// list without touching the network.
pub async fn search_products_by_name(query: &str, limit: usize) -> Result<Vec<ProductLite>, String> {
    let q = query.trim();
    if q.is_empty() {
        return Ok(Vec::new());
    }
    let path = format!(
        "/api/productos/buscar?nombre={}&limit={}",
        urlencoding::encode(q),
        limit
    );
    http::get_json(&path).await
}

/// List the sellable variants of one product (for the picker modal).
pub async fn fetch_variants_for_product(product_id: i64) -> Result<Vec<VariantRow>, String> {
    http::get_json(&format!("/api/productos/{}/variantes", product_id)).await
}

/// Submit the sale. The backend validates stock and computes the receipt.
pub async fn create_sale(request: &SaleRequest) -> Result<SaleResult, String> {
    http::post_json("/api/ventas", request).await
}

/// URL of the PDF ticket for a completed sale.
pub fn ticket_pdf_url(sale_id: i64) -> String {
    format!("{}/api/ventas/{}/ticket.pdf", api_base(), sale_id)
}
