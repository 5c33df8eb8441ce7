//! Confirmation dialog shown once the backend registered the sale.

use leptos::prelude::*;

use super::checkout::CompletedSale;
use crate::shared::modal::Modal;
use crate::shared::money::format_money;

#[component]
pub fn SuccessModal(
    sale: CompletedSale,
    on_open_ticket: Callback<()>,
    on_new_sale: Callback<()>,
) -> impl IntoView {
    let row_style = "display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px dashed #e2e8f0;";

    view! {
        <Modal
            badge="OK"
            title="Venta registrada".to_string()
            subtitle="Ticket generado correctamente.".to_string()
            on_close=on_new_sale
            actions=move || view! {
                <button
                    type="button"
                    style="padding: 8px 16px; border-radius: 8px; border: 1px solid #cbd5e0; background: white; cursor: pointer;"
                    on:click=move |_| on_new_sale.run(())
                >
                    "Nueva venta"
                </button>
                <button
                    type="button"
                    style="padding: 8px 16px; border-radius: 8px; border: none; background: #2b6cb0; color: white; cursor: pointer;"
                    on:click=move |_| on_open_ticket.run(())
                >
                    "Abrir ticket"
                </button>
            }
        >
            <div style=row_style>
                <span>"ID"</span>
                <b>{format!("#{}", sale.id)}</b>
            </div>
            <div style=row_style>
                <span>"Fecha"</span>
                <b>{sale.date.format("%d/%m/%Y %H:%M").to_string()}</b>
            </div>
            <div style=row_style>
                <span>"Total"</span>
                <b>{format_money(sale.total)}</b>
            </div>
            <div style=row_style>
                <span>"Cambio"</span>
                <b>{format_money(sale.change)}</b>
            </div>
        </Modal>
    }
}
