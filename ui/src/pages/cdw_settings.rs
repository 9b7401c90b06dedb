use std::rc::Rc;

use payloads::LocationId;
use payloads::responses::CdwSettings;
use payloads::tax_input::CdwFormState;
use yew::prelude::*;

use crate::components::{LocationSelect, PricingFields};
use crate::contexts::session::Session;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_cdw_settings, use_invalidate, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: Rc<Session>,
}

/// Collision damage waiver offered at each location.
#[function_component]
pub fn CdwSettingsPage(props: &Props) -> Html {
    use_title("CDW settings");
    let location = {
        let session = props.session.clone();
        use_state(move || session.default_location())
    };
    let on_location = {
        let location = location.clone();
        Callback::from(move |id: LocationId| location.set(Some(id)))
    };

    html! {
        <div class="space-y-6 max-w-xl">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900">{"Collision damage waiver"}</h1>
                <LocationSelect
                    session={props.session.clone()}
                    selected={*location}
                    on_change={on_location}
                />
            </div>
            if let Some(location_id) = *location {
                <LocationCdwSettings
                    key={location_id.to_string()}
                    session={props.session.clone()}
                    {location_id}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LocationProps {
    session: Rc<Session>,
    location_id: LocationId,
}

#[function_component]
fn LocationCdwSettings(props: &LocationProps) -> Html {
    let settings = use_cdw_settings(props.session.clone(), props.location_id);

    settings.render("CDW settings", |settings, _, error| html! {
        <>
            if let Some(error) = error {
                <p class="text-sm text-red-600">{error}</p>
            }
            <CdwForm
                session={props.session.clone()}
                location_id={props.location_id}
                settings={settings.clone()}
            />
        </>
    })
}

#[derive(Properties, PartialEq)]
struct FormProps {
    session: Rc<Session>,
    location_id: LocationId,
    settings: CdwSettings,
}

#[function_component]
fn CdwForm(props: &FormProps) -> Html {
    let toast = use_toast();
    let invalidate = use_invalidate();
    let form = {
        let settings = props.settings.clone();
        use_state(move || CdwFormState::from_settings(&settings))
    };
    let is_saving = use_state(|| false);
    let validation_error = form.validate();

    let on_enabled = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.enabled = input.checked();
            form.set(next);
        })
    };
    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement =
                e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
        })
    };
    let on_pricing = {
        let form = form.clone();
        Callback::from(move |pricing| {
            let mut next = (*form).clone();
            next.pricing = pricing;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let session = props.session.clone();
        let location_id = props.location_id;
        let is_saving = is_saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };
            let api_client = session.api_client();
            let toast = toast.clone();
            let invalidate = invalidate.clone();
            let is_saving = is_saving.clone();

            is_saving.set(true);
            yew::platform::spawn_local(async move {
                match api_client
                    .update_cdw_settings(&location_id, &request)
                    .await
                {
                    Ok(mutated) => {
                        toast.success("CDW settings saved");
                        invalidate.emit(mutated.affected);
                    }
                    Err(e) => toast
                        .error(e.user_message("Failed to save CDW settings")),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-4 bg-white p-6 rounded-lg border border-neutral-200">
            <label class="flex items-center gap-2 text-sm font-medium text-neutral-700">
                <input type="checkbox" checked={form.enabled} onchange={on_enabled} />
                {"Offer CDW at this location"}
            </label>

            <PricingFields
                id="cdw"
                value={form.pricing.clone()}
                on_change={on_pricing}
                disabled={!form.enabled || *is_saving}
            />

            <div>
                <label for="cdw-description" class="block text-sm font-medium text-neutral-700 mb-1">
                    {"Description"}
                </label>
                <textarea
                    id="cdw-description"
                    rows="3"
                    value={form.description.clone()}
                    oninput={on_description}
                    class="w-full px-3 py-2 border border-neutral-300 rounded-md bg-white"
                />
            </div>

            if let Some(message) = &validation_error {
                <p class="text-sm text-red-600">{message}</p>
            }

            <button
                type="submit"
                disabled={validation_error.is_some() || *is_saving}
                class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                       hover:bg-neutral-700 rounded-md disabled:opacity-50"
            >
                {if *is_saving { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
