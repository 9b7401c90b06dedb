use payloads::tax_input::{
    AUTO_FORMAT_DELAY_MS, BlurOutcome, InputOutcome, PercentageInput,
};
use yew::prelude::*;

use crate::contexts::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct PercentageFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: PercentageInput,
    pub on_change: Callback<PercentageInput>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Text field for a percentage in the open interval (0, 100) with at most
/// two decimals. Keystrokes are sanitized as they arrive, a bare integer is
/// padded to two decimals after a short pause, and blur either formats the
/// value or restores the last good one.
#[function_component]
pub fn PercentageField(props: &PercentageFieldProps) -> Html {
    let toast = use_toast();
    // Timers read the value at the moment they fire, not when scheduled
    let latest = use_mut_ref(PercentageInput::default);
    *latest.borrow_mut() = props.value.clone();
    let generation = use_mut_ref(|| 0_u64);

    let on_input = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        let latest = latest.clone();
        let generation = generation.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = value.clone();
            let now_ms = js_sys::Date::now() as u64;

            match next.on_input(&input.value(), now_ms) {
                InputOutcome::Accepted => {}
                InputOutcome::Reverted => {
                    tracing::debug!("Rejected percentage keystroke");
                }
                InputOutcome::Warned(message) => toast.warning(message),
            }
            // The DOM keeps the raw keystroke unless overwritten
            input.set_value(next.value());

            *generation.borrow_mut() += 1;
            if next.needs_auto_format() {
                let scheduled = *generation.borrow();
                let generation = generation.clone();
                let latest = latest.clone();
                let on_change = on_change.clone();
                yew::platform::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(
                        AUTO_FORMAT_DELAY_MS,
                    )
                    .await;
                    if *generation.borrow() != scheduled {
                        return;
                    }
                    let mut formatted = latest.borrow().clone();
                    if formatted.auto_format() {
                        on_change.emit(formatted);
                    }
                });
            }

            on_change.emit(next);
        })
    };

    let on_blur = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        let generation = generation.clone();
        Callback::from(move |_: FocusEvent| {
            *generation.borrow_mut() += 1;
            let mut next = value.clone();
            if next.on_blur() == BlurOutcome::Reverted {
                tracing::debug!(
                    restored = next.value(),
                    "Restored last valid percentage"
                );
            }
            on_change.emit(next);
        })
    };

    html! {
        <div>
            <label
                for={props.id.clone()}
                class="block text-sm font-medium text-neutral-700 mb-1"
            >
                {&props.label}
            </label>
            <div class="relative">
                <input
                    id={props.id.clone()}
                    type="text"
                    inputmode="decimal"
                    autocomplete="off"
                    value={props.value.value().to_string()}
                    oninput={on_input}
                    onblur={on_blur}
                    disabled={props.disabled}
                    placeholder="e.g. 7.50"
                    class="w-full px-3 py-2 pr-8 border border-neutral-300
                           rounded-md bg-white focus:outline-none
                           focus:ring-2 focus:ring-neutral-500
                           disabled:opacity-50"
                />
                <span class="absolute inset-y-0 right-3 flex items-center
                             text-sm text-neutral-500">
                    {"%"}
                </span>
            </div>
        </div>
    }
}
