use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::view_model::CheckoutViewModel;
use crate::domain::sale::ui::success_modal::SuccessModal;
use crate::domain::sale::ui::variant_modal::VariantPickerModal;
use crate::shared::money::format_money;
use crate::shared::toast::ToastHost;

const FIELD_LABEL: &str = "display: block; font-size: 0.8rem; color: #4a5568; margin-bottom: 4px;";
const FIELD_INPUT: &str = "width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid #cbd5e0; border-radius: 8px; font-size: 0.95rem;";
const BTN_PRIMARY: &str = "padding: 9px 18px; border: none; border-radius: 8px; background: #2b6cb0; color: white; cursor: pointer;";
const BTN_OUTLINE: &str = "padding: 9px 18px; border: 1px solid #cbd5e0; border-radius: 8px; background: white; cursor: pointer;";
const BTN_DANGER: &str = "padding: 9px 18px; border: none; border-radius: 8px; background: #b03235; color: white; cursor: pointer;";
const CARD: &str = "background: white; border-radius: 12px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);";
const MUTED: &str = "color: #718096; font-size: 0.85rem; margin-top: 6px;";
const ERROR_TEXT: &str = "color: #b03235; font-size: 0.85rem; margin-top: 6px;";

fn select_all(ev: &web_sys::FocusEvent) {
    if let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.select();
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let vm = CheckoutViewModel::new();

    let capture_disabled =
        move || vm.by_name_mode.get() || vm.lookup_loading.get() || vm.paying.get();

    view! {
        <div class="checkout" style="display: flex; flex-direction: column; gap: 16px; max-width: 1200px;">
            <header>
                <h1 style="margin: 0;">"Punto de Venta"</h1>
                <p style=MUTED>"Registra productos, aplica descuento y cobra en segundos."</p>
            </header>

            // ---- capture form --------------------------------------------
            <section style=CARD>
                <div style="display: grid; grid-template-columns: 1.2fr 1.5fr 0.8fr 90px 150px auto; gap: 14px; align-items: start;">
                    // barcode
                    <div>
                        <label style=FIELD_LABEL>"Código"</label>
                        <input
                            style=FIELD_INPUT
                            placeholder="Escanea / escribe y presiona Enter"
                            prop:value=move || vm.barcode_input.get()
                            prop:disabled=capture_disabled
                            on:input=move |ev| vm.barcode_input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    vm.lookup_barcode_command();
                                }
                            }
                        />
                        {move || (!vm.by_name_mode.get()).then(|| view! {
                            <div style=MUTED>"Tip: escribe/escanea y presiona " <b>"Enter"</b> " para buscar."</div>
                        })}
                        {move || {
                            (!vm.by_name_mode.get())
                                .then(|| vm.lookup_error.get())
                                .flatten()
                                .map(|message| view! { <div style=ERROR_TEXT>{message}</div> })
                        }}
                        {move || (vm.lookup_loading.get() && !vm.by_name_mode.get()).then(|| view! {
                            <div style=MUTED>"Buscando…"</div>
                        })}
                    </div>

                    // name / autocomplete
                    <div style="position: relative;">
                        <div style="display: flex; align-items: center; justify-content: space-between;">
                            <label style=FIELD_LABEL>"Nombre"</label>
                            <label style="display: flex; align-items: center; gap: 4px; font-size: 0.75rem; color: #4a5568; cursor: pointer;">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.by_name_mode.get()
                                    on:change=move |ev| vm.set_by_name_mode(event_target_checked(&ev))
                                />
                                "Habilitar"
                            </label>
                        </div>
                        <input
                            style=FIELD_INPUT
                            placeholder=move || {
                                if vm.by_name_mode.get() {
                                    "Escribe nombre y presiona Enter"
                                } else {
                                    "Buscar por nombre (habilita toggle)"
                                }
                            }
                            prop:value=move || {
                                if vm.by_name_mode.get() {
                                    vm.name_query.get()
                                } else {
                                    vm.pending_name.get()
                                }
                            }
                            prop:disabled=move || !vm.by_name_mode.get() || vm.paying.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                if vm.by_name_mode.get() {
                                    vm.name_query_changed(value);
                                } else {
                                    vm.pending_name.set(value);
                                }
                            }
                            on:focus=move |_| {
                                if vm.by_name_mode.get() && !vm.name_options.with(|o| o.is_empty()) {
                                    vm.name_open.set(true);
                                }
                            }
                            on:blur=move |_| {
                                if vm.by_name_mode.get() {
                                    vm.close_dropdown_soon();
                                }
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if !vm.by_name_mode.get() {
                                    return;
                                }
                                match ev.key().as_str() {
                                    "Enter" => vm.enter_name_command(),
                                    "Escape" => vm.name_open.set(false),
                                    _ => {}
                                }
                            }
                        />
                        {move || {
                            vm.by_name_mode
                                .get()
                                .then(|| vm.name_error.get())
                                .flatten()
                                .map(|message| view! { <div style=ERROR_TEXT>{message}</div> })
                        }}
                        {move || (vm.by_name_mode.get() && vm.name_loading.get()).then(|| view! {
                            <div style=MUTED>"Buscando…"</div>
                        })}
                        {move || {
                            let show = vm.by_name_mode.get()
                                && vm.name_open.get()
                                && !vm.name_options.with(|o| o.is_empty());
                            show.then(|| view! {
                                <div style="position: absolute; z-index: 30; left: 0; right: 0; top: 100%; margin-top: 8px; padding: 6px; max-height: 260px; overflow: auto; background: white; border: 1px solid #e2e8f0; border-radius: 10px; box-shadow: 0 8px 24px rgba(0,0,0,0.12);">
                                    {vm.name_options.get().into_iter().map(|product| {
                                        let label = product.product_name.clone();
                                        view! {
                                            <button
                                                type="button"
                                                style="display: block; width: 100%; text-align: left; padding: 10px 12px; border: none; border-radius: 8px; background: none; cursor: pointer;"
                                                on:mousedown=move |ev: web_sys::MouseEvent| ev.prevent_default()
                                                on:click=move |_| vm.open_variants_command(product.clone())
                                            >
                                                {label}
                                            </button>
                                        }
                                    }).collect::<Vec<_>>()}
                                </div>
                            })
                        }}
                    </div>

                    // price (read-only, comes from the resolved variant)
                    <div>
                        <label style=FIELD_LABEL>"Precio"</label>
                        <input
                            style=FIELD_INPUT
                            readonly=true
                            prop:value=move || format_money(vm.pending_price.get())
                        />
                    </div>

                    // color swatch
                    <div>
                        <label style=FIELD_LABEL>"Color"</label>
                        <div style=move || format!(
                            "height: 36px; border-radius: 8px; border: 1px solid #cbd5e0; background: {};",
                            vm.pending_color.get()
                        )></div>
                    </div>

                    // quantity stepper
                    <div>
                        <label style=FIELD_LABEL>"Cantidad"</label>
                        <div style="display: flex; gap: 4px;">
                            <button
                                type="button"
                                style=BTN_OUTLINE
                                prop:disabled=move || vm.paying.get()
                                on:click=move |_| {
                                    let current = vm.pending_quantity();
                                    vm.quantity_input.set(current.saturating_sub(1).max(1).to_string());
                                }
                            >
                                "−"
                            </button>
                            <input
                                style="width: 56px; text-align: center; padding: 8px 4px; border: 1px solid #cbd5e0; border-radius: 8px;"
                                inputmode="numeric"
                                prop:value=move || vm.quantity_input.get()
                                prop:disabled=move || vm.paying.get()
                                on:focus=move |ev| select_all(&ev)
                                on:input=move |ev| {
                                    let raw = event_target_value(&ev);
                                    vm.quantity_input.set(
                                        crate::shared::input_utils::only_digits(&raw),
                                    );
                                }
                                on:blur=move |_| {
                                    vm.quantity_input.set(vm.pending_quantity().to_string());
                                }
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        vm.quantity_input.set(vm.pending_quantity().to_string());
                                    }
                                }
                            />
                            <button
                                type="button"
                                style=BTN_OUTLINE
                                prop:disabled=move || vm.paying.get()
                                on:click=move |_| {
                                    let current = vm.pending_quantity();
                                    vm.quantity_input.set((current + 1).to_string());
                                }
                            >
                                "+"
                            </button>
                        </div>
                    </div>

                    // add to cart
                    <div>
                        <label style=FIELD_LABEL>" "</label>
                        <button
                            type="button"
                            style=BTN_PRIMARY
                            prop:disabled=move || vm.paying.get() || vm.resolved.with(|r| r.is_none())
                            on:click=move |_| vm.add_item_command()
                        >
                            "Agregar"
                        </button>
                    </div>
                </div>
            </section>

            // ---- cart + payment ------------------------------------------
            <section style="display: grid; grid-template-columns: 1fr 320px; gap: 16px; align-items: start;">
                <div style=CARD>
                    <div style="display: flex; justify-content: space-between; align-items: baseline;">
                        <h2 style="margin: 0 0 12px 0;">"Productos"</h2>
                        <div style=MUTED>
                            "Subtotal: " <b>{move || format_money(vm.cart.with(|c| c.subtotal()))}</b>
                        </div>
                    </div>

                    <table style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr style="text-align: left; color: #4a5568; font-size: 0.8rem; border-bottom: 1px solid #e2e8f0;">
                                <th style="padding: 8px 6px;">"NOMBRE PRODUCTO"</th>
                                <th style="text-align: right; padding: 8px 6px;">"CANTIDAD"</th>
                                <th style="text-align: right; padding: 8px 6px;">"PRECIO UNITARIO"</th>
                                <th style="text-align: right; padding: 8px 6px;">"SUBTOTAL"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let lines = vm.cart.with(|c| c.lines().to_vec());
                                if lines.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="5" style="padding: 24px; text-align: center; color: #a0aec0;">
                                                "Agrega productos para comenzar la venta."
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    lines.into_iter().map(|line| {
                                        let id = line.id;
                                        let quantity_text = line.quantity.to_string();
                                        let qty_value = move || {
                                            vm.qty_drafts
                                                .with(|d| d.get(&id).cloned())
                                                .unwrap_or_else(|| quantity_text.clone())
                                        };

                                        view! {
                                            <tr style="border-bottom: 1px solid #f0f2f5;">
                                                <td style="padding: 8px 6px;">
                                                    {line.name.clone()}
                                                    <div style="color: #a0aec0; font-size: 0.75rem; margin-top: 2px;">
                                                        {line.barcode.clone()}
                                                    </div>
                                                </td>
                                                <td style="text-align: right; padding: 8px 6px;">
                                                    <input
                                                        style="width: 60px; text-align: right; padding: 6px; border: 1px solid #cbd5e0; border-radius: 6px;"
                                                        inputmode="numeric"
                                                        prop:value=qty_value
                                                        prop:disabled=move || vm.paying.get()
                                                        on:focus=move |ev| select_all(&ev)
                                                        on:input=move |ev| {
                                                            vm.set_qty_draft(id, event_target_value(&ev));
                                                        }
                                                        on:blur=move |_| vm.commit_qty_draft(id)
                                                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                            if ev.key() == "Enter" {
                                                                vm.commit_qty_draft(id);
                                                            }
                                                        }
                                                    />
                                                </td>
                                                <td style="text-align: right; padding: 8px 6px;">
                                                    {format_money(line.unit_price)}
                                                </td>
                                                <td style="text-align: right; padding: 8px 6px;">
                                                    {format_money(line.line_total())}
                                                </td>
                                                <td style="text-align: right; padding: 8px 6px;">
                                                    <button
                                                        type="button"
                                                        title="Eliminar"
                                                        style="border: none; background: none; color: #b03235; cursor: pointer; font-weight: 700;"
                                                        prop:disabled=move || vm.paying.get()
                                                        on:click=move |_| vm.remove_line(id)
                                                    >
                                                        "X"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>().into_any()
                                }
                            }}
                        </tbody>
                    </table>

                    <div style="display: flex; justify-content: flex-end; gap: 12px; margin-top: 12px; padding-top: 10px; border-top: 2px solid #2d3748; font-size: 1.05rem;">
                        <span>"TOTAL:"</span>
                        <b>{move || format_money(vm.cart.with(|c| c.subtotal()))}</b>
                    </div>
                </div>

                // payment panel
                <aside style=CARD>
                    <h2 style="margin: 0 0 12px 0;">"Cobro"</h2>

                    <div style="display: grid; grid-template-columns: auto 1fr; gap: 10px 12px; align-items: center;">
                        <label style=FIELD_LABEL>"Descuento"</label>
                        <input
                            style=FIELD_INPUT
                            inputmode="numeric"
                            prop:value=move || vm.discount_input.get()
                            prop:disabled=move || vm.cart.with(|c| c.is_empty()) || vm.paying.get()
                            on:focus=move |ev| select_all(&ev)
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                vm.discount_input.set(crate::shared::input_utils::only_digits(&raw));
                            }
                            on:blur=move |_| vm.discount_input.set(vm.discount().to_string())
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    vm.discount_input.set(vm.discount().to_string());
                                }
                            }
                        />

                        <label style=FIELD_LABEL>"Monto pago"</label>
                        <input
                            style=FIELD_INPUT
                            inputmode="numeric"
                            prop:value=move || vm.payment_input.get()
                            prop:disabled=move || vm.cart.with(|c| c.is_empty()) || vm.paying.get()
                            on:focus=move |ev| select_all(&ev)
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                vm.payment_input.set(crate::shared::input_utils::only_digits(&raw));
                            }
                            on:blur=move |_| vm.payment_input.set(vm.payment().to_string())
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    vm.payment_input.set(vm.payment().to_string());
                                }
                            }
                        />

                        <label style=FIELD_LABEL>"Cambio"</label>
                        <div style="text-align: right; font-weight: 600;">
                            {move || format_money(vm.totals().change)}
                        </div>

                        <label style=FIELD_LABEL>"Total"</label>
                        <div style="text-align: right; font-weight: 700; font-size: 1.2rem;">
                            {move || format_money(vm.totals().total)}
                        </div>
                    </div>

                    <div style="display: flex; justify-content: space-between; gap: 8px; margin-top: 16px;">
                        <button
                            type="button"
                            style=BTN_OUTLINE
                            prop:disabled=move || vm.cart.with(|c| c.is_empty()) || vm.paying.get()
                            on:click=move |_| vm.clear_command()
                        >
                            "Borrar productos"
                        </button>
                        <button
                            type="button"
                            style=BTN_DANGER
                            prop:disabled=move || vm.cart.with(|c| c.is_empty()) || vm.paying.get()
                            on:click=move |_| vm.pay_command()
                        >
                            {move || if vm.paying.get() { "Procesando..." } else { "Pagar" }}
                        </button>
                    </div>
                </aside>
            </section>

            <ToastHost toast=vm.toast />

            <Show when=move || vm.success_open.get()>
                {move || vm.completed.get().map(|sale| view! {
                    <SuccessModal
                        sale=sale
                        on_open_ticket=Callback::new(move |_| vm.open_ticket_command())
                        on_new_sale=Callback::new(move |_| vm.new_sale_command())
                    />
                })}
            </Show>

            <Show when=move || vm.variant_modal_open.get()>
                {move || {
                    let title = vm
                        .picked_product
                        .get()
                        .map(|p| p.product_name)
                        .unwrap_or_else(|| "Selecciona una variante".to_string());
                    view! {
                        <VariantPickerModal
                            title=title
                            loading=vm.variant_modal_loading
                            error=vm.variant_modal_error
                            items=vm.variant_modal_items
                            on_cancel=Callback::new(move |_| vm.variant_modal_open.set(false))
                            on_pick=Callback::new(move |row| vm.pick_variant_command(row))
                        />
                    }
                }}
            </Show>
        </div>
    }
}
