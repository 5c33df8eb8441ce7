pub mod checkout;
pub mod success_modal;
pub mod variant_modal;
