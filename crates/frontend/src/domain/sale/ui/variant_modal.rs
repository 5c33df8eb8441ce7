//! Variant picker: the variants of one product, one of which becomes the
//! pending item. Double-click a row or select it and confirm.

use contracts::domain::sale::VariantRow;
use leptos::prelude::*;

use crate::shared::modal::Modal;
use crate::shared::money::format_money;

#[component]
pub fn VariantPickerModal(
    /// Product name shown under the dialog title
    title: String,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] items: Signal<Vec<VariantRow>>,
    on_cancel: Callback<()>,
    on_pick: Callback<VariantRow>,
) -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    let pick_selected = move |_| {
        let index = selected.get();
        if let Some(row) = items.get().get(index) {
            on_pick.run(row.clone());
        }
    };

    let confirm_disabled = move || loading.get() || items.with(|v| v.is_empty());

    view! {
        <Modal
            badge="SEL"
            title="Variantes".to_string()
            subtitle=title
            on_close=on_cancel
            actions=move || view! {
                <button
                    type="button"
                    style="padding: 8px 16px; border-radius: 8px; border: 1px solid #cbd5e0; background: white; cursor: pointer;"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancelar"
                </button>
                <button
                    type="button"
                    style="padding: 8px 16px; border-radius: 8px; border: none; background: #2b6cb0; color: white; cursor: pointer;"
                    prop:disabled=confirm_disabled
                    on:click=pick_selected
                >
                    "Elegir variante"
                </button>
            }
        >
            {move || loading.get().then(|| view! {
                <div style="color: #718096;">"Cargando variantes..."</div>
            })}

            {move || error.get().map(|message| view! {
                <div style="color: #b03235;">{message}</div>
            })}

            {move || {
                if loading.get() || error.get().is_some() || items.with(|v| v.is_empty()) {
                    return None;
                }
                Some(view! {
                    <div style="max-height: 420px; overflow: auto;">
                        <table style="width: 100%; border-collapse: collapse; min-width: 560px;">
                            <thead>
                                <tr style="text-align: left; color: #4a5568; font-size: 0.8rem;">
                                    <th style="text-align: center; width: 80px; padding: 6px;">"COLOR"</th>
                                    <th style="padding: 6px;">"TALLA"</th>
                                    <th style="text-align: right; padding: 6px;">"PRECIO"</th>
                                    <th style="text-align: right; padding: 6px;">"STOCK"</th>
                                    <th style="padding: 6px;">"CODIGO"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.get().into_iter().enumerate().map(|(index, row)| {
                                    let is_active = move || selected.get() == index;
                                    let row_for_pick = row.clone();
                                    let color = row.color_hex.clone().unwrap_or_else(|| "#ffffff".to_string());
                                    let size = row.size.clone().unwrap_or_else(|| "—".to_string());

                                    view! {
                                        <tr
                                            style="cursor: pointer;"
                                            style:background=move || {
                                                if is_active() { "rgba(30, 144, 255, 0.16)" } else { "transparent" }
                                            }
                                            style:outline=move || {
                                                if is_active() { "1px solid rgba(30, 144, 255, 0.45)" } else { "none" }
                                            }
                                            on:click=move |_| set_selected.set(index)
                                            on:dblclick=move |_| on_pick.run(row_for_pick.clone())
                                        >
                                            <td style="text-align: center; padding: 6px;">
                                                <span style=format!(
                                                    "display: inline-block; width: 34px; height: 14px; border-radius: 4px; vertical-align: middle; border: 1px solid rgba(0,0,0,0.15); background: {};",
                                                    color
                                                )></span>
                                            </td>
                                            <td style="padding: 6px;">{size}</td>
                                            <td style="text-align: right; padding: 6px;">{format_money(row.sale_price)}</td>
                                            <td style="text-align: right; padding: 6px;">{row.stock}</td>
                                            <td style="padding: 6px;">{row.barcode.clone()}</td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>
                })
            }}
        </Modal>
    }
}
