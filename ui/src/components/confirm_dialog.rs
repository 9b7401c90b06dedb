use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
}

/// Yes/no question before a destructive action.
#[function_component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal
            title={props.title.clone()}
            on_close={props.on_close.clone()}
            locked={props.is_loading}
        >
            <p class="text-sm text-neutral-600">{&props.message}</p>
            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700
                           bg-white border border-neutral-300 rounded-md
                           hover:bg-neutral-50 disabled:opacity-50"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white bg-red-600
                           hover:bg-red-700 rounded-md disabled:opacity-50"
                >
                    {if props.is_loading { "Processing..." } else { props.confirm_text.as_str() }}
                </button>
            </div>
        </Modal>
    }
}
