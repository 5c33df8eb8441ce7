use crate::domain::sale::ui::checkout::CheckoutPage;
use crate::layout::{MenuKey, Sidebar};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let (active, set_active) = signal(MenuKey::Checkout);

    view! {
        <div class="app-shell" style="display: flex; min-height: 100vh; background: #f5f6f8;">
            <Sidebar
                active=active
                on_change=Callback::new(move |key| set_active.set(key))
            />
            <main class="app-content" style="flex: 1; padding: 24px; overflow: auto;">
                {move || match active.get() {
                    MenuKey::Checkout => view! { <CheckoutPage /> }.into_any(),
                    key => view! { <PlaceholderPage title=key.label() /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Sections other than the checkout are not built yet.
#[component]
fn PlaceholderPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page-placeholder" style="padding: 40px; color: #4a5568;">
            <h1 style="margin: 0 0 8px 0; text-transform: uppercase;">{title}</h1>
            <p>"Panel pendiente."</p>
        </div>
    }
}
