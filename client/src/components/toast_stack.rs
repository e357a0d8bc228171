//! Transient notification stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders queued toasts; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div
                            class=format!("toast {}", toast.severity.css_class())
                            on:click=move |_| toasts.update(|t| t.dismiss(&id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
