use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    /// While set, neither the backdrop nor the close button dismiss the
    /// dialog. Used while a request started from the dialog is running.
    #[prop_or_default]
    pub locked: bool,
}

/// Titled dialog over a dimmed backdrop.
#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let locked = props.locked;

        Callback::from(move |e: MouseEvent| {
            // Clicks bubbling up from inside the dialog have another target
            if !locked && e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            onclick={on_backdrop_click}
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-black/50 z-40 flex items-center
                   justify-center p-4"
        >
            <div class="bg-white rounded-lg shadow-xl w-full max-w-md p-6">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-lg font-semibold text-neutral-900">
                        {&props.title}
                    </h3>
                    <button
                        type="button"
                        aria-label="Close"
                        onclick={on_close_click}
                        disabled={props.locked}
                        class="text-neutral-400 hover:text-neutral-600
                               disabled:opacity-50"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
