use std::collections::HashMap;

use contracts::domain::sale::{Cart, ProductLite, SaleRequest, Totals, VariantLookup, VariantRow};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::sale::api;
use crate::shared::input_utils::{only_digits, parse_int_safe, parse_quantity};
use crate::shared::money::format_money;
use crate::shared::toast::{Toast, TOAST_DURATION_MS};

/// Hardcoded operator; there is no authentication at this terminal.
const OPERATOR_USER_ID: i64 = 1;

/// Name search fires only from this many characters on.
const MIN_QUERY_CHARS: usize = 2;
const SEARCH_DEBOUNCE_MS: u32 = 250;
const SEARCH_LIMIT: usize = 15;

const DEFAULT_COLOR: &str = "#ffffff";

/// Summary shown in the confirmation dialog after a sale went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSale {
    pub id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub total: i64,
    pub change: i64,
}

/// All state of the checkout screen, as signals, plus the commands that
/// drive it. The struct is `Copy`, so commands can be used directly in
/// event handlers without cloning.
///
/// In-flight exclusivity is by UI disabling (`lookup_loading`, `paying`),
/// not mutual exclusion; requests are never cancelled mid-flight.
#[derive(Clone, Copy)]
pub struct CheckoutViewModel {
    // --- pending item (barcode capture) ---
    pub by_name_mode: RwSignal<bool>,
    pub barcode_input: RwSignal<String>,
    pub pending_name: RwSignal<String>,
    pub pending_price: RwSignal<i64>,
    pub pending_color: RwSignal<String>,
    pub quantity_input: RwSignal<String>,
    pub resolved: RwSignal<Option<VariantLookup>>,
    pub lookup_loading: RwSignal<bool>,
    pub lookup_error: RwSignal<Option<String>>,

    // --- cart ---
    pub cart: RwSignal<Cart>,
    pub qty_drafts: RwSignal<HashMap<Uuid, String>>,

    // --- payment ---
    pub discount_input: RwSignal<String>,
    pub payment_input: RwSignal<String>,
    pub paying: RwSignal<bool>,

    // --- name search (autocomplete) ---
    pub name_query: RwSignal<String>,
    pub name_options: RwSignal<Vec<ProductLite>>,
    pub name_open: RwSignal<bool>,
    pub name_loading: RwSignal<bool>,
    pub name_error: RwSignal<Option<String>>,
    pub picked_product: RwSignal<Option<ProductLite>>,
    search_generation: StoredValue<u64>,

    // --- variant picker modal ---
    pub variant_modal_open: RwSignal<bool>,
    pub variant_modal_loading: RwSignal<bool>,
    pub variant_modal_error: RwSignal<Option<String>>,
    pub variant_modal_items: RwSignal<Vec<VariantRow>>,

    // --- success modal ---
    pub success_open: RwSignal<bool>,
    pub completed: RwSignal<Option<CompletedSale>>,
    pub ticket_url: RwSignal<String>,

    // --- toast ---
    pub toast: RwSignal<Option<Toast>>,
    toast_generation: StoredValue<u64>,
}

impl CheckoutViewModel {
    pub fn new() -> Self {
        Self {
            by_name_mode: RwSignal::new(false),
            barcode_input: RwSignal::new(String::new()),
            pending_name: RwSignal::new(String::new()),
            pending_price: RwSignal::new(0),
            pending_color: RwSignal::new(DEFAULT_COLOR.to_string()),
            quantity_input: RwSignal::new("1".to_string()),
            resolved: RwSignal::new(None),
            lookup_loading: RwSignal::new(false),
            lookup_error: RwSignal::new(None),
            cart: RwSignal::new(Cart::new()),
            qty_drafts: RwSignal::new(HashMap::new()),
            discount_input: RwSignal::new("0".to_string()),
            payment_input: RwSignal::new("0".to_string()),
            paying: RwSignal::new(false),
            name_query: RwSignal::new(String::new()),
            name_options: RwSignal::new(Vec::new()),
            name_open: RwSignal::new(false),
            name_loading: RwSignal::new(false),
            name_error: RwSignal::new(None),
            picked_product: RwSignal::new(None),
            search_generation: StoredValue::new(0),
            variant_modal_open: RwSignal::new(false),
            variant_modal_loading: RwSignal::new(false),
            variant_modal_error: RwSignal::new(None),
            variant_modal_items: RwSignal::new(Vec::new()),
            success_open: RwSignal::new(false),
            completed: RwSignal::new(None),
            ticket_url: RwSignal::new(String::new()),
            toast: RwSignal::new(None),
            toast_generation: StoredValue::new(0),
        }
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    /// Quantity about to be added, never below 1.
    pub fn pending_quantity(&self) -> u32 {
        parse_quantity(&self.quantity_input.get(), 1)
    }

    pub fn discount(&self) -> i64 {
        parse_int_safe(&self.discount_input.get(), 0).max(0)
    }

    pub fn payment(&self) -> i64 {
        parse_int_safe(&self.payment_input.get(), 0).max(0)
    }

    pub fn totals(&self) -> Totals {
        let subtotal = self.cart.with(|c| c.subtotal());
        Totals::compute(subtotal, self.discount(), self.payment())
    }

    // ------------------------------------------------------------------
    // Toast
    // ------------------------------------------------------------------

    pub fn show_toast(&self, toast: Toast) {
        let generation = self.toast_generation.get_value() + 1;
        self.toast_generation.set_value(generation);
        self.toast.set(Some(toast));

        let vm = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            // only the newest toast may clear itself
            if vm.toast_generation.get_value() == generation {
                vm.toast.set(None);
            }
        });
    }

    // ------------------------------------------------------------------
    // Pending-item / search resets
    // ------------------------------------------------------------------

    fn reset_pending(&self) {
        self.barcode_input.set(String::new());
        self.pending_name.set(String::new());
        self.pending_price.set(0);
        self.pending_color.set(DEFAULT_COLOR.to_string());
        self.quantity_input.set("1".to_string());
        self.resolved.set(None);
        self.lookup_error.set(None);
    }

    fn reset_search(&self) {
        self.picked_product.set(None);
        self.name_query.set(String::new());
        self.name_options.set(Vec::new());
        self.name_open.set(false);
        self.name_error.set(None);
    }

    fn apply_lookup(&self, variant: &VariantLookup) {
        self.pending_name.set(variant.product_name.clone());
        self.pending_price.set(variant.sale_price);
        self.pending_color.set(
            variant
                .color_hex
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        );
        self.resolved.set(Some(variant.clone()));
    }

    /// Switch between barcode capture and name search; either way the
    /// pending item and search state start over.
    pub fn set_by_name_mode(&self, enabled: bool) {
        self.by_name_mode.set(enabled);
        self.reset_pending();
        self.reset_search();
    }

    // ------------------------------------------------------------------
    // Barcode lookup
    // ------------------------------------------------------------------

    pub fn lookup_barcode_command(&self) {
        let code = self.barcode_input.get().trim().to_string();
        if code.is_empty() {
            return;
        }

        self.lookup_loading.set(true);
        self.lookup_error.set(None);

        let vm = *self;
        spawn_local(async move {
            match api::fetch_variant_by_barcode(&code).await {
                Ok(variant) => {
                    vm.apply_lookup(&variant);
                    vm.name_query.set(variant.product_name.clone());
                    vm.picked_product.set(None);
                }
                Err(message) => {
                    log::error!("barcode lookup failed for {}: {}", code, message);
                    vm.resolved.set(None);
                    vm.pending_name.set(String::new());
                    vm.pending_price.set(0);
                    vm.pending_color.set(DEFAULT_COLOR.to_string());
                    vm.lookup_error.set(Some(message.clone()));
                    vm.show_toast(Toast::error(message));
                }
            }
            vm.lookup_loading.set(false);
        });
    }

    // ------------------------------------------------------------------
    // Name search
    // ------------------------------------------------------------------

    /// Debounced autocomplete. Each keystroke supersedes the previous
    /// pending search; a response that is already in flight is not
    /// cancelled and may land late.
    pub fn name_query_changed(&self, value: String) {
        self.name_query.set(value.clone());
        self.name_error.set(None);
        self.picked_product.set(None);

        let query = value.trim().to_string();
        if query.chars().count() < MIN_QUERY_CHARS {
            self.name_options.set(Vec::new());
            self.name_open.set(false);
            self.name_loading.set(false);
            return;
        }

        self.name_loading.set(true);
        let generation = self.search_generation.get_value() + 1;
        self.search_generation.set_value(generation);

        let vm = *self;
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if vm.search_generation.get_value() != generation {
                // a newer keystroke took over
                return;
            }

            match api::search_products_by_name(&query, SEARCH_LIMIT).await {
                Ok(items) => {
                    vm.name_options.set(items);
                    vm.name_open.set(true);
                }
                Err(message) => {
                    log::error!("name search failed for '{}': {}", query, message);
                    vm.name_options.set(Vec::new());
                    vm.name_open.set(false);
                    vm.name_error.set(Some(message));
                }
            }
            vm.name_loading.set(false);
        });
    }

    /// Close the dropdown a moment later, so an option click still lands.
    pub fn close_dropdown_soon(&self) {
        let vm = *self;
        spawn_local(async move {
            TimeoutFuture::new(120).await;
            vm.name_open.set(false);
        });
    }

    /// Enter in the name field: a single match (or an already picked
    /// product) goes straight to the variant picker.
    pub fn enter_name_command(&self) {
        let options = self.name_options.get();
        if options.len() == 1 {
            self.open_variants_command(options[0].clone());
            return;
        }

        if let Some(picked) = self.picked_product.get() {
            self.open_variants_command(picked);
            return;
        }

        self.name_open.set(true);
        if options.is_empty() {
            self.show_toast(Toast::error("No hay coincidencias para ese nombre."));
        }
    }

    // ------------------------------------------------------------------
    // Variant picker
    // ------------------------------------------------------------------

    pub fn open_variants_command(&self, product: ProductLite) {
        self.name_query.set(product.product_name.clone());
        self.name_open.set(false);

        self.variant_modal_open.set(true);
        self.variant_modal_loading.set(true);
        self.variant_modal_error.set(None);
        self.variant_modal_items.set(Vec::new());

        let product_id = product.id;
        self.picked_product.set(Some(product));

        let vm = *self;
        spawn_local(async move {
            match api::fetch_variants_for_product(product_id).await {
                Ok(items) => {
                    if items.is_empty() {
                        vm.variant_modal_error
                            .set(Some("Este producto no tiene variantes.".to_string()));
                    }
                    vm.variant_modal_items.set(items);
                }
                Err(message) => {
                    log::error!("variant list failed for product {}: {}", product_id, message);
                    vm.variant_modal_error.set(Some(message));
                }
            }
            vm.variant_modal_loading.set(false);
        });
    }

    /// A picked row only carries the listing fields; re-resolve through the
    /// barcode endpoint to get full pricing and stock.
    pub fn pick_variant_command(&self, row: VariantRow) {
        self.variant_modal_open.set(false);

        self.lookup_loading.set(true);
        self.lookup_error.set(None);

        let vm = *self;
        spawn_local(async move {
            match api::fetch_variant_by_barcode(&row.barcode).await {
                Ok(variant) => {
                    vm.apply_lookup(&variant);
                    vm.barcode_input.set(variant.barcode.clone());
                    if !variant.product_name.is_empty() {
                        vm.name_query.set(variant.product_name.clone());
                    }
                    vm.show_toast(Toast::ok("Variante cargada"));
                }
                Err(message) => {
                    log::error!("variant resolve failed for {}: {}", row.barcode, message);
                    vm.lookup_error.set(Some(message.clone()));
                    vm.show_toast(Toast::error(message));
                }
            }
            vm.lookup_loading.set(false);
        });
    }

    // ------------------------------------------------------------------
    // Cart mutation
    // ------------------------------------------------------------------

    pub fn add_item_command(&self) {
        let Some(variant) = self.resolved.get() else {
            let message = if self.by_name_mode.get() {
                "Primero elige una variante (Enter en nombre / seleccionar opción)."
            } else {
                "Primero busca un código válido (Enter) para cargar el producto."
            };
            self.show_toast(Toast::error(message));
            return;
        };

        let quantity = self.pending_quantity();
        let fallback = self.name_query.get();
        self.cart
            .update(|cart| cart.add_variant(&variant, quantity, &fallback));

        self.reset_pending();
        self.reset_search();
        self.show_toast(Toast::ok("Producto agregado"));
    }

    pub fn remove_line(&self, id: Uuid) {
        self.cart.update(|cart| cart.remove(id));
        self.qty_drafts.update(|drafts| {
            drafts.remove(&id);
        });
    }

    /// Per-row quantity edits keep a digits-only draft until blur commits.
    pub fn set_qty_draft(&self, id: Uuid, raw: String) {
        let cleaned = only_digits(&raw);
        self.qty_drafts.update(|drafts| {
            drafts.insert(id, cleaned);
        });
    }

    pub fn commit_qty_draft(&self, id: Uuid) {
        let draft = self.qty_drafts.with(|d| d.get(&id).cloned());
        if let Some(raw) = draft {
            let current = self
                .cart
                .with(|c| c.lines().iter().find(|l| l.id == id).map(|l| l.quantity))
                .unwrap_or(1);
            let next = parse_quantity(&raw, current);
            self.cart.update(|cart| cart.set_quantity(id, next));
        }
        self.qty_drafts.update(|drafts| {
            drafts.remove(&id);
        });
    }

    pub fn clear_command(&self) {
        self.cart.update(|cart| cart.clear());
        self.qty_drafts.set(HashMap::new());
        self.discount_input.set("0".to_string());
        self.payment_input.set("0".to_string());
        self.reset_pending();
        self.reset_search();
    }

    // ------------------------------------------------------------------
    // Payment
    // ------------------------------------------------------------------

    pub fn pay_command(&self) {
        if self.cart.with(|c| c.is_empty()) {
            return;
        }

        let totals = self.totals();
        let payment = self.payment();
        if let Some(missing) = totals.shortfall(payment) {
            // rejected client-side, no request leaves the terminal
            self.show_toast(Toast::error(format!(
                "Pago insuficiente. Falta: {}",
                format_money(missing)
            )));
            return;
        }

        let request = SaleRequest {
            user_id: OPERATOR_USER_ID,
            payment_amount: payment,
            discount: self.discount(),
            lines: self.cart.with(|c| c.to_sale_lines()),
        };

        self.paying.set(true);
        let vm = *self;
        spawn_local(async move {
            match api::create_sale(&request).await {
                Ok(result) => {
                    let url = result
                        .ticket_url
                        .clone()
                        .unwrap_or_else(|| api::ticket_pdf_url(result.id));

                    open_in_new_tab(&url);

                    vm.completed.set(Some(CompletedSale {
                        id: result.id,
                        date: result.date,
                        total: result.total,
                        change: result.change,
                    }));
                    vm.ticket_url.set(url);
                    vm.success_open.set(true);
                }
                Err(message) => {
                    log::error!("sale submission failed: {}", message);
                    // cart stays intact for retry
                    vm.show_toast(Toast::error(format!("Error al pagar: {}", message)));
                }
            }
            vm.paying.set(false);
        });
    }

    pub fn open_ticket_command(&self) {
        let url = self.ticket_url.get();
        if !url.is_empty() {
            open_in_new_tab(&url);
        }
    }

    pub fn new_sale_command(&self) {
        self.success_open.set(false);
        self.completed.set(None);
        self.ticket_url.set(String::new());
        self.clear_command();
    }
}

impl Default for CheckoutViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}
