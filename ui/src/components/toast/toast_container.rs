use yew::prelude::*;

use super::ToastItem;
use crate::contexts::toast::ToastContext;

/// Stack of live toasts in the top right corner, oldest on top.
#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        tracing::warn!("ToastContainer rendered outside a ToastProvider");
        return html! {};
    };

    let toasts: Html = context
        .toasts
        .iter()
        .map(|toast| {
            html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            }
        })
        .collect();

    html! {
        <div
            aria-live="polite"
            class="fixed top-4 right-4 z-50 flex flex-col gap-3 max-w-sm w-full
                   pointer-events-none [&>*]:pointer-events-auto"
        >
            {toasts}
        </div>
    }
}
