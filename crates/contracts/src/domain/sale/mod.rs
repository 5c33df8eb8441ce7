//! Sale (checkout) domain: wire DTOs and the pure cart/payment arithmetic.

pub mod api;
pub mod cart;

pub use api::{ProductLite, SaleLine, SaleRequest, SaleResult, VariantLookup, VariantRow};
pub use cart::{Cart, CartLine, Totals};
