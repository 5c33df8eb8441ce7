use leptos::children::ViewFn;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Overlay dialog used by the variant picker and the sale-confirmation views.
///
/// Closes on Escape and on overlay clicks; clicks inside the card stay
/// inside the card.
#[component]
pub fn Modal(
    /// Short badge text shown next to the title ("OK", "SEL", ...)
    badge: &'static str,
    /// Dialog title
    title: String,
    /// Secondary line under the title
    subtitle: String,
    /// Callback when the dialog should close
    on_close: Callback<()>,
    /// Footer buttons
    #[prop(into)]
    actions: ViewFn,
    /// Dialog body
    children: Children,
) -> impl IntoView {
    // Close on Escape. The listener lives on `window`, so it must come off
    // again when the dialog unmounts or it would keep firing afterwards.
    let escape_listener: StoredValue<Option<Closure<dyn FnMut(web_sys::Event)>>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
        escape_listener.set_value(Some(closure));
    });

    on_cleanup(move || {
        let closure = escape_listener.try_update_value(|slot| slot.take()).flatten();
        if let Some(closure) = closure {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
        }
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            style="position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.55);"
            on:mousedown=handle_overlay_click
        >
            <div
                class="modal-card"
                style="background: white; border-radius: 12px; min-width: 420px; max-width: 90vw; max-height: 90vh; display: flex; flex-direction: column; box-shadow: 0 12px 40px rgba(0,0,0,0.35);"
                on:mousedown=stop_propagation
            >
                <div class="modal-head" style="display: flex; align-items: center; gap: 12px; padding: 16px 20px; border-bottom: 1px solid #e2e8f0;">
                    <div class="modal-badge" style="padding: 4px 10px; border-radius: 8px; background: #2d3748; color: white; font-size: 0.75rem; font-weight: 700;">{badge}</div>
                    <div>
                        <h3 class="modal-title" style="margin: 0; font-size: 1.1rem;">{title}</h3>
                        <div class="modal-sub" style="color: #718096; font-size: 0.85rem;">{subtitle}</div>
                    </div>
                </div>
                <div class="modal-body" style="padding: 16px 20px; overflow: auto;">
                    {children()}
                </div>
                <div class="modal-actions" style="display: flex; justify-content: flex-end; gap: 8px; padding: 12px 20px; border-top: 1px solid #e2e8f0;">
                    {actions.run()}
                </div>
            </div>
        </div>
    }
}
