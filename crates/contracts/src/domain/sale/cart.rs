use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::api::{SaleLine, VariantLookup};

/// One accumulated line of the checkout cart.
///
/// The id is client-local (line identity for edits/removal); the barcode is
/// what identifies the variant to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub barcode: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: i64,
    pub color_hex: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }
}

/// In-memory cart. Lines keep insertion order; adding a barcode that is
/// already present merges into the existing line instead of duplicating it.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add a resolved variant with the given quantity.
    ///
    /// Merges by barcode (summing quantities) or appends a new line. The
    /// display name falls back to `fallback_name` when the lookup carried an
    /// empty product name.
    pub fn add_variant(&mut self, variant: &VariantLookup, quantity: u32, fallback_name: &str) {
        let quantity = quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|l| l.barcode == variant.barcode) {
            line.quantity += quantity;
            if line.name.is_empty() {
                line.name = safe_name(variant, fallback_name);
            }
            return;
        }

        self.lines.push(CartLine {
            id: Uuid::new_v4(),
            barcode: variant.barcode.clone(),
            name: safe_name(variant, fallback_name),
            quantity,
            unit_price: variant.sale_price.max(0),
            color_hex: variant.color_hex.clone(),
        });
    }

    /// Remove a line by its client-local id. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) {
        self.lines.retain(|l| l.id != id);
    }

    /// Set the quantity of a line, clamped to at least 1.
    pub fn set_quantity(&mut self, id: Uuid, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity.max(1);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines as the backend expects them in a `SaleRequest`.
    pub fn to_sale_lines(&self) -> Vec<SaleLine> {
        self.lines
            .iter()
            .map(|l| SaleLine {
                barcode: l.barcode.clone(),
                quantity: l.quantity,
            })
            .collect()
    }
}

fn safe_name(variant: &VariantLookup, fallback: &str) -> String {
    if variant.product_name.is_empty() {
        if fallback.is_empty() {
            "Producto".to_string()
        } else {
            fallback.to_string()
        }
    } else {
        variant.product_name.clone()
    }
}

/// Derived checkout amounts. All inputs are non-negative whole currency
/// units; total and change never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: i64,
    pub total: i64,
    pub change: i64,
}

impl Totals {
    pub fn compute(subtotal: i64, discount: i64, payment: i64) -> Self {
        let total = (subtotal - discount.max(0)).max(0);
        let change = (payment.max(0) - total).max(0);
        Self {
            subtotal,
            total,
            change,
        }
    }

    /// Amount still missing when the tendered payment does not cover the
    /// total; `None` when the payment is sufficient.
    pub fn shortfall(&self, payment: i64) -> Option<i64> {
        if payment < self.total {
            Some(self.total - payment)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(barcode: &str, name: &str, price: i64) -> VariantLookup {
        VariantLookup {
            variant_id: 1,
            barcode: barcode.to_string(),
            sale_price: price,
            product_id: 1,
            product_name: name.to_string(),
            color_hex: Some("#ffffff".to_string()),
            stock: 10,
            size: None,
        }
    }

    #[test]
    fn subtotal_is_sum_of_line_totals_regardless_of_order() {
        let mut a = Cart::new();
        a.add_variant(&variant("111", "Falda", 100), 2, "");
        a.add_variant(&variant("222", "Blusa", 75), 3, "");

        let mut b = Cart::new();
        b.add_variant(&variant("222", "Blusa", 75), 3, "");
        b.add_variant(&variant("111", "Falda", 100), 2, "");

        assert_eq!(a.subtotal(), 425);
        assert_eq!(a.subtotal(), b.subtotal());
    }

    #[test]
    fn adding_existing_barcode_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 2, "");
        cart.add_variant(&variant("111", "Falda", 100), 3, "");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.subtotal(), 500);
    }

    #[test]
    fn merge_fills_in_missing_name() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "", 0), 1, "");
        assert_eq!(cart.lines()[0].name, "Producto");

        cart.add_variant(&variant("111", "Falda", 100), 1, "");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].name, "Producto");
    }

    #[test]
    fn zero_quantity_add_counts_as_one() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 0, "");
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn negative_price_is_clamped_on_add() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", -50), 1, "");
        assert_eq!(cart.lines()[0].unit_price, 0);
    }

    #[test]
    fn remove_deletes_only_the_matching_line() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 1, "");
        cart.add_variant(&variant("222", "Blusa", 75), 1, "");

        let id = cart.lines()[0].id;
        cart.remove(id);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].barcode, "222");

        // removing an unknown id is a no-op
        cart.remove(Uuid::new_v4());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 3, "");
        let id = cart.lines()[0].id;

        cart.set_quantity(id, 0);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.set_quantity(id, 7);
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 1, "");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0);
    }

    #[test]
    fn to_sale_lines_carries_barcode_and_quantity() {
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 2, "");
        cart.add_variant(&variant("222", "Blusa", 75), 1, "");

        let lines = cart.to_sale_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].barcode, "111");
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn total_never_goes_negative() {
        let t = Totals::compute(100, 250, 0);
        assert_eq!(t.total, 0);
        assert_eq!(t.change, 0);
    }

    #[test]
    fn change_is_zero_unless_payment_exceeds_total() {
        let t = Totals::compute(200, 0, 200);
        assert_eq!(t.change, 0);

        let t = Totals::compute(200, 0, 150);
        assert_eq!(t.change, 0);
        assert_eq!(t.shortfall(150), Some(50));

        let t = Totals::compute(200, 0, 260);
        assert_eq!(t.change, 60);
        assert_eq!(t.shortfall(260), None);
    }

    #[test]
    fn negative_inputs_are_treated_as_zero() {
        let t = Totals::compute(200, -10, -5);
        assert_eq!(t.total, 200);
        assert_eq!(t.change, 0);
    }

    #[test]
    fn worked_example_from_the_counter() {
        // cart: 2 × $100, discount $50, payment $200
        let mut cart = Cart::new();
        cart.add_variant(&variant("111", "Falda", 100), 2, "");

        let t = Totals::compute(cart.subtotal(), 50, 200);
        assert_eq!(t.subtotal, 200);
        assert_eq!(t.total, 150);
        assert_eq!(t.change, 50);
    }
}
