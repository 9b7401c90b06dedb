use std::rc::Rc;

use payloads::LocationId;
use payloads::requests::{MAX_BIDS_PER_SESSION, UpdateBiddingConfig};
use payloads::responses::BiddingConfig;
use payloads::tax_input::{
    PercentageInput, format_two_decimals, validate_percentage,
};
use yew::prelude::*;

use crate::components::{LocationSelect, PercentageField};
use crate::contexts::session::Session;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_bidding_config, use_invalidate, use_title};
use crate::pages::edit_state;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: Rc<Session>,
}

/// Per-location rules for renter bidding.
#[function_component]
pub fn BiddingConfigPage(props: &Props) -> Html {
    use_title("Bidding settings");
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
                <h1 class="text-2xl font-bold text-neutral-900">{"Bidding settings"}</h1>
                <LocationSelect
                    session={props.session.clone()}
                    selected={*location}
                    on_change={on_location}
                />
            </div>
            if let Some(location_id) = *location {
                <LocationBiddingConfig
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
fn LocationBiddingConfig(props: &LocationProps) -> Html {
    let config = use_bidding_config(props.session.clone(), props.location_id);

    config.render("bidding settings", |config, _, error| html! {
        <>
            if let Some(error) = error {
                <p class="text-sm text-red-600">{error}</p>
            }
            <BiddingConfigForm
                session={props.session.clone()}
                location_id={props.location_id}
                config={config.clone()}
            />
        </>
    })
}

#[derive(Clone, PartialEq)]
struct FormState {
    enabled: bool,
    max_bids_per_session: u8,
    session_duration_minutes: String,
    min_bid_percentage: PercentageInput,
}

impl FormState {
    fn from_config(config: &BiddingConfig) -> Self {
        Self {
            enabled: config.enabled,
            max_bids_per_session: config.max_bids_per_session,
            session_duration_minutes: config
                .session_duration_minutes
                .to_string(),
            min_bid_percentage: config
                .min_bid_percentage
                .map(|p| PercentageInput::with_value(format_two_decimals(p)))
                .unwrap_or_default(),
        }
    }

    fn to_request(&self) -> Result<UpdateBiddingConfig, String> {
        let session_duration_minutes = self
            .session_duration_minutes
            .trim()
            .parse::<u32>()
            .map_err(|_| {
                "Session duration must be a whole number of minutes"
                    .to_string()
            })?;
        let min_bid_percentage = match self.min_bid_percentage.value() {
            "" => None,
            value => Some(format_two_decimals(validate_percentage(value)?)),
        };
        let request = UpdateBiddingConfig {
            enabled: self.enabled,
            max_bids_per_session: self.max_bids_per_session,
            session_duration_minutes,
            min_bid_percentage,
        };
        match request.validate() {
            Some(message) => Err(message.to_string()),
            None => Ok(request),
        }
    }
}

#[derive(Properties, PartialEq)]
struct FormProps {
    session: Rc<Session>,
    location_id: LocationId,
    config: BiddingConfig,
}

#[function_component]
fn BiddingConfigForm(props: &FormProps) -> Html {
    let toast = use_toast();
    let invalidate = use_invalidate();
    let form = {
        let config = props.config.clone();
        use_state(move || FormState::from_config(&config))
    };
    let is_saving = use_state(|| false);
    let request = form.to_request();

    let on_enabled = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.enabled = input.checked();
            form.set(next);
        })
    };
    let on_max_bids =
        edit_state(&form, |form: &mut FormState, value: String| {
            if let Ok(max) = value.parse() {
                form.max_bids_per_session = max;
            }
        })
        .reform(|e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            select.value()
        });
    let on_duration =
        edit_state(&form, |form: &mut FormState, value: String| {
            form.session_duration_minutes = value;
        })
        .reform(|e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            input.value()
        });
    let on_min_bid = {
        let form = form.clone();
        Callback::from(move |percentage| {
            let mut next = (*form).clone();
            next.min_bid_percentage = percentage;
            form.set(next);
        })
    };

    let on_submit = {
        let request = request.clone();
        let session = props.session.clone();
        let location_id = props.location_id;
        let is_saving = is_saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Ok(request) = request.clone() else {
                return;
            };
            let api_client = session.api_client();
            let toast = toast.clone();
            let invalidate = invalidate.clone();
            let is_saving = is_saving.clone();

            is_saving.set(true);
            yew::platform::spawn_local(async move {
                match api_client
                    .update_bidding_config(&location_id, &request)
                    .await
                {
                    Ok(mutated) => {
                        toast.success("Bidding settings saved");
                        invalidate.emit(mutated.affected);
                    }
                    Err(e) => toast.error(
                        e.user_message("Failed to save bidding settings"),
                    ),
                }
                is_saving.set(false);
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-4 bg-white p-6 rounded-lg border border-neutral-200">
            <label class="flex items-center gap-2 text-sm font-medium text-neutral-700">
                <input type="checkbox" checked={form.enabled} onchange={on_enabled} />
                {"Accept bids from renters"}
            </label>

            <div>
                <label for="max-bids" class="block text-sm font-medium text-neutral-700 mb-1">
                    {"Bids per session"}
                </label>
                <select
                    id="max-bids"
                    onchange={on_max_bids}
                    class="w-full px-3 py-2 border border-neutral-300 rounded-md bg-white"
                >
                    {for (1..=MAX_BIDS_PER_SESSION).map(|count| html! {
                        <option
                            value={count.to_string()}
                            selected={count == form.max_bids_per_session}
                        >
                            {count.to_string()}
                        </option>
                    })}
                </select>
            </div>

            <div>
                <label for="session-duration" class="block text-sm font-medium text-neutral-700 mb-1">
                    {"Session duration (minutes)"}
                </label>
                <input
                    id="session-duration"
                    type="number"
                    min="1"
                    value={form.session_duration_minutes.clone()}
                    oninput={on_duration}
                    class="w-full px-3 py-2 border border-neutral-300 rounded-md bg-white"
                />
            </div>

            <PercentageField
                id="min-bid-percentage"
                label="Minimum bid (% of base price)"
                value={form.min_bid_percentage.clone()}
                on_change={on_min_bid}
            />

            if let Err(message) = &request {
                <p class="text-sm text-red-600">{message}</p>
            }

            <button
                type="submit"
                disabled={request.is_err() || *is_saving}
                class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                       hover:bg-neutral-700 rounded-md disabled:opacity-50"
            >
                {if *is_saving { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
