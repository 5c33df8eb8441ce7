use leptos::prelude::*;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 2300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Ok,
    Error,
}

/// Transient notification; a newer toast replaces the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Ok,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Renders the current toast, if any, in a fixed corner.
#[component]
pub fn ToastHost(#[prop(into)] toast: Signal<Option<Toast>>) -> impl IntoView {
    view! {
        {move || toast.get().map(|t| {
            let background = match t.kind {
                ToastKind::Ok => "#1f7a3d",
                ToastKind::Error => "#b03235",
            };
            view! {
                <div
                    class="toast"
                    style=format!(
                        "position: fixed; right: 20px; bottom: 20px; z-index: 60; padding: 10px 16px; border-radius: 8px; color: white; box-shadow: 0 4px 12px rgba(0,0,0,0.25); background: {};",
                        background
                    )
                >
                    {t.text}
                </div>
            }
        })}
    }
}
