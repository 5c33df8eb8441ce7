//! Sidebar navigation. Pure UI state: the active entry lives in a signal
//! owned by the app shell, nothing here talks to the network.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Home,
    Checkout,
    Categories,
    Products,
    Reports,
}

impl MenuKey {
    pub fn label(&self) -> &'static str {
        match self {
            MenuKey::Home => "Home",
            MenuKey::Checkout => "Venta",
            MenuKey::Categories => "Categorías",
            MenuKey::Products => "Productos",
            MenuKey::Reports => "Reportes",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            MenuKey::Home => "home",
            MenuKey::Checkout => "shopping-cart",
            MenuKey::Categories => "tag",
            MenuKey::Products => "package",
            MenuKey::Reports => "bar-chart",
        }
    }
}

const MENU_ITEMS: [MenuKey; 5] = [
    MenuKey::Home,
    MenuKey::Checkout,
    MenuKey::Categories,
    MenuKey::Products,
    MenuKey::Reports,
];

#[component]
pub fn Sidebar(
    #[prop(into)] active: Signal<MenuKey>,
    on_change: Callback<MenuKey>,
) -> impl IntoView {
    view! {
        <aside class="sidebar" style="display: flex; flex-direction: column; width: 220px; min-height: 100vh; background: #1a202c; color: #e2e8f0;">
            <div class="sidebar__brand" style="padding: 20px 16px;">
                <div style="font-size: 1.3rem; font-weight: 700; letter-spacing: 2px;">"CHAZZ"</div>
                <div style="font-size: 0.8rem; color: #a0aec0;">"Boutique"</div>
            </div>

            <nav class="sidebar__nav" style="flex: 1; display: flex; flex-direction: column; gap: 4px; padding: 0 8px;">
                {MENU_ITEMS
                    .iter()
                    .map(|&key| {
                        let is_active = move || active.get() == key;
                        view! {
                            <button
                                type="button"
                                class="sidebar__item"
                                class:is-active=is_active
                                style="display: flex; align-items: center; gap: 10px; padding: 10px 12px; border: none; border-radius: 8px; background: none; color: inherit; cursor: pointer; text-align: left;"
                                style:background=move || {
                                    if is_active() { "rgba(66, 153, 225, 0.25)" } else { "transparent" }
                                }
                                on:click=move |_| on_change.run(key)
                            >
                                {icon(key.icon_name())}
                                <span>{key.label()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer" style="padding: 16px;">
                <div style="font-size: 0.75rem; padding: 6px 10px; border-radius: 999px; background: #2d3748; text-align: center;">
                    "ChazzBoutique POS"
                </div>
            </div>
        </aside>
    }
}
