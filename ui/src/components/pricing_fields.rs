use payloads::TaxType;
use payloads::tax_input::PricingInput;
use yew::prelude::*;

use super::PercentageField;

#[derive(Properties, PartialEq)]
pub struct PricingFieldsProps {
    /// Prefix for element ids, unique per form
    pub id: AttrValue,
    pub value: PricingInput,
    pub on_change: Callback<PricingInput>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Pricing type switch plus the percentage or fixed amount input.
#[function_component]
pub fn PricingFields(props: &PricingFieldsProps) -> Html {
    let on_type_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = value.clone();
            next.pricing_type = match select.value().as_str() {
                "FIXED" => TaxType::Fixed,
                _ => TaxType::Percentage,
            };
            on_change.emit(next);
        })
    };

    let on_percentage_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |percentage| {
            let mut next = value.clone();
            next.percentage = percentage;
            on_change.emit(next);
        })
    };

    let on_amount_input = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = value.clone();
            next.on_amount_input(&input.value());
            input.set_value(&next.amount);
            on_change.emit(next);
        })
    };

    let type_id = format!("{}-type", props.id);
    let amount_id = format!("{}-amount", props.id);

    html! {
        <div class="space-y-4">
            <div>
                <label for={type_id.clone()} class="block text-sm font-medium text-neutral-700 mb-1">
                    {"Pricing type"}
                </label>
                <select
                    id={type_id}
                    onchange={on_type_change}
                    disabled={props.disabled}
                    class="w-full px-3 py-2 border border-neutral-300 rounded-md bg-white"
                >
                    {for [TaxType::Percentage, TaxType::Fixed].into_iter().map(|tax_type| html! {
                        <option
                            value={tax_type.as_str()}
                            selected={tax_type == props.value.pricing_type}
                        >
                            {tax_type.label()}
                        </option>
                    })}
                </select>
            </div>

            if props.value.pricing_type == TaxType::Percentage {
                <PercentageField
                    id={format!("{}-percentage", props.id)}
                    label="Percentage"
                    value={props.value.percentage.clone()}
                    on_change={on_percentage_change}
                    disabled={props.disabled}
                />
            } else {
                <div>
                    <label for={amount_id.clone()} class="block text-sm font-medium text-neutral-700 mb-1">
                        {"Amount"}
                    </label>
                    <input
                        id={amount_id}
                        type="text"
                        inputmode="decimal"
                        autocomplete="off"
                        value={props.value.amount.clone()}
                        oninput={on_amount_input}
                        disabled={props.disabled}
                        placeholder="e.g. 25.00"
                        class="w-full px-3 py-2 border border-neutral-300 rounded-md
                               bg-white focus:outline-none focus:ring-2
                               focus:ring-neutral-500 disabled:opacity-50"
                    />
                </div>
            }
        </div>
    }
}
