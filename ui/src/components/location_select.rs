use std::rc::Rc;

use payloads::LocationId;
use yew::prelude::*;

use crate::contexts::session::Session;

#[derive(Properties, PartialEq)]
pub struct LocationSelectProps {
    pub session: Rc<Session>,
    pub selected: Option<LocationId>,
    pub on_change: Callback<LocationId>,
}

/// Picks one of the company's operational locations.
#[function_component]
pub fn LocationSelect(props: &LocationSelectProps) -> Html {
    let locations = props.session.operator.locations.clone();

    let on_change = {
        let on_change = props.on_change.clone();
        let locations = locations.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if let Some(location) = locations
                .iter()
                .find(|location| location.id.to_string() == value)
            {
                on_change.emit(location.id);
            }
        })
    };

    if locations.is_empty() {
        return html! {
            <p class="text-sm text-neutral-600">
                {"Your company has no operational locations yet."}
            </p>
        };
    }

    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-700">
            {"Location"}
            <select
                onchange={on_change}
                class="border border-neutral-300 rounded-md px-2 py-1 bg-white"
            >
                {for locations.iter().map(|location| html! {
                    <option
                        value={location.id.to_string()}
                        selected={props.selected == Some(location.id)}
                    >
                        {&location.name}
                    </option>
                })}
            </select>
        </label>
    }
}
