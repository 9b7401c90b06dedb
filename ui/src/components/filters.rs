use payloads::query::{DateRange, parse_date_input};
use yew::prelude::*;

use crate::utils::time::date_input_value;

#[derive(Properties, PartialEq)]
pub struct DateRangeFilterProps {
    pub value: DateRange,
    pub on_change: Callback<DateRange>,
}

/// From/to day pickers. Both bounds are inclusive.
#[function_component]
pub fn DateRangeFilter(props: &DateRangeFilterProps) -> Html {
    let on_bound = |is_from: bool| {
        let value = props.value;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            match parse_date_input(&input.value()) {
                Ok(date) => {
                    let mut next = value;
                    if is_from {
                        next.from = date;
                    } else {
                        next.to = date;
                    }
                    on_change.emit(next);
                }
                Err(e) => tracing::warn!("{e}"),
            }
        })
    };

    let input_class = "border border-neutral-300 rounded-md px-2 py-1 bg-white";

    html! {
        <div class="flex items-center gap-2 text-sm text-neutral-700">
            <label class="flex items-center gap-2">
                {"From"}
                <input
                    type="date"
                    value={date_input_value(props.value.from)}
                    onchange={on_bound(true)}
                    class={input_class}
                />
            </label>
            <label class="flex items-center gap-2">
                {"To"}
                <input
                    type="date"
                    value={date_input_value(props.value.to)}
                    onchange={on_bound(false)}
                    class={input_class}
                />
            </label>
            if props.value.is_inverted() {
                <span class="text-red-600">
                    {"End date is before start date"}
                </span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusSelectProps {
    /// `(api value, label)` pairs, listed after "All statuses"
    pub options: Vec<(&'static str, &'static str)>,
    /// API value of the selected status, `None` for all
    pub selected: Option<&'static str>,
    pub on_change: Callback<Option<String>>,
}

#[function_component]
pub fn StatusSelect(props: &StatusSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit((!value.is_empty()).then_some(value));
        })
    };

    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-700">
            {"Status"}
            <select
                onchange={on_change}
                class="border border-neutral-300 rounded-md px-2 py-1 bg-white"
            >
                <option value="" selected={props.selected.is_none()}>
                    {"All statuses"}
                </option>
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.selected == Some(*value)}>
                        {*label}
                    </option>
                })}
            </select>
        </label>
    }
}
