use std::rc::Rc;

use payloads::BiddingSessionStatus;
use payloads::query::{BiddingSessionQuery, StatusFilter};
use yew::prelude::*;

use crate::components::{
    BiddingSessionsTable, DateRangeFilter, PaginationControls, StatusSelect,
};
use crate::contexts::session::Session;
use crate::hooks::{use_company_bidding_sessions, use_title};
use crate::pages::edit_state;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: Rc<Session>,
}

/// Read-only list of the company's bidding sessions.
#[function_component]
pub fn BiddingSessionsPage(props: &Props) -> Html {
    use_title("Bidding sessions");
    let query = use_state(BiddingSessionQuery::default);
    let sessions =
        use_company_bidding_sessions(props.session.clone(), (*query).clone());

    let on_status = {
        let query = query.clone();
        Callback::from(move |value: Option<String>| {
            let mut next = (*query).clone();
            next.set_status(
                match value.as_deref().and_then(BiddingSessionStatus::parse) {
                    Some(status) => StatusFilter::Only(status),
                    None => StatusFilter::All,
                },
            );
            query.set(next);
        })
    };

    let on_location = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.set_operational_location_id(Some(select.value()));
            query.set(next);
        })
    };

    let on_clear = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.clear_filters();
            query.set(next);
        })
    };

    let on_refresh = sessions.refetch.reform(|_: MouseEvent| ());
    let status_options = BiddingSessionStatus::ALL
        .iter()
        .map(|status| (status.as_str(), status.label()))
        .collect::<Vec<_>>();
    let selected_location =
        query.operational_location_id.clone().unwrap_or_default();

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900">{"Bidding sessions"}</h1>
                <button
                    onclick={on_refresh}
                    disabled={sessions.is_loading}
                    class="px-4 py-2 text-sm font-medium border border-neutral-300
                           rounded-md bg-white hover:bg-neutral-50 disabled:opacity-50"
                >
                    {if sessions.is_loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <div class="flex flex-wrap items-center gap-4">
                <StatusSelect
                    options={status_options}
                    selected={query.status.selected().map(|status| status.as_str())}
                    on_change={on_status}
                />
                <DateRangeFilter
                    value={query.dates}
                    on_change={edit_state(&query, BiddingSessionQuery::set_dates)}
                />
                <label class="flex items-center gap-2 text-sm text-neutral-700">
                    {"Location"}
                    <select
                        onchange={on_location}
                        class="border border-neutral-300 rounded-md px-2 py-1 bg-white"
                    >
                        <option value="" selected={selected_location.is_empty()}>
                            {"All locations"}
                        </option>
                        {for props.session.operator.locations.iter().map(|location| {
                            let value = location.id.to_string();
                            let selected = selected_location == value;
                            html! {
                                <option {selected} {value}>
                                    {&location.name}
                                </option>
                            }
                        })}
                    </select>
                </label>
                <button onclick={on_clear} class="text-sm text-neutral-600 underline">
                    {"Clear filters"}
                </button>
            </div>

            {sessions.render("bidding sessions", |page, is_loading, error| html! {
                <>
                    if let Some(error) = error {
                        <div class="p-3 rounded-md bg-red-50 border border-red-200 text-sm text-red-700">
                            {error}
                        </div>
                    }
                    <BiddingSessionsTable
                        items={page.items.clone()}
                        sort_by={query.sort_by}
                        sort_dir={query.sort_dir}
                        on_sort={edit_state(&query, BiddingSessionQuery::sort_on)}
                    />
                    <PaginationControls
                        info={page.page_info()}
                        limit={query.limit}
                        on_page_change={edit_state(&query, BiddingSessionQuery::set_page)}
                        on_limit_change={edit_state(&query, BiddingSessionQuery::set_limit)}
                        {is_loading}
                    />
                </>
            })}
        </div>
    }
}
