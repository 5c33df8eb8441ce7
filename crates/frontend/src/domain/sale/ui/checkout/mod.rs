//! Checkout (point-of-sale) screen.
//!
//! Simplified MVVM split:
//! - view_model.rs: all screen state as signals plus the commands that
//!   drive lookups, cart mutation and payment
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CheckoutPage;
pub use view_model::{CheckoutViewModel, CompletedSale};
