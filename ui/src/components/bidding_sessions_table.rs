use payloads::BiddingSessionStatus;
use payloads::pagination::TableBody;
use payloads::query::{SessionSortBy, SortDir};
use payloads::responses::CompanyBiddingSessionItem;
use yew::prelude::*;

use crate::utils::format::{format_money, or_dash};
use crate::utils::time::format_timestamp;

pub const NO_SESSIONS_MESSAGE: &str = "No bidding sessions found";
const COLUMN_COUNT: usize = 8;

#[derive(Properties, PartialEq)]
pub struct BiddingSessionsTableProps {
    pub items: Vec<CompanyBiddingSessionItem>,
    pub sort_by: SessionSortBy,
    pub sort_dir: SortDir,
    pub on_sort: Callback<SessionSortBy>,
}

#[function_component]
pub fn BiddingSessionsTable(props: &BiddingSessionsTableProps) -> Html {
    let sortable = |column: SessionSortBy| {
        let indicator = if column != props.sort_by {
            ""
        } else if props.sort_dir == SortDir::Asc {
            " ▲"
        } else {
            " ▼"
        };
        let on_click = props.on_sort.reform(move |_: MouseEvent| column);
        html! {
            <th class="px-4 py-2 text-left">
                <button onclick={on_click} class="font-medium hover:underline">
                    {format!("{}{indicator}", column.label())}
                </button>
            </th>
        }
    };

    let body = match TableBody::new(&props.items, NO_SESSIONS_MESSAGE) {
        TableBody::Placeholder(message) => html! {
            <tr>
                <td
                    colspan={COLUMN_COUNT.to_string()}
                    class="px-4 py-8 text-center text-neutral-500"
                >
                    {message}
                </td>
            </tr>
        },
        TableBody::Rows(items) => {
            items.iter().map(session_row).collect::<Html>()
        }
    };

    html! {
        <div class="overflow-x-auto bg-white rounded-lg border border-neutral-200">
            <table class="min-w-full text-sm">
                <thead class="bg-neutral-50 text-neutral-700">
                    <tr>
                        {sortable(SessionSortBy::Status)}
                        <th class="px-4 py-2 text-left">{"Renter"}</th>
                        <th class="px-4 py-2 text-left">{"Car class"}</th>
                        <th class="px-4 py-2 text-left">{"Location"}</th>
                        {sortable(SessionSortBy::PickupAt)}
                        {sortable(SessionSortBy::DropAt)}
                        <th class="px-4 py-2 text-left">{"Bids"}</th>
                        {sortable(SessionSortBy::CreatedAt)}
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-100">{body}</tbody>
            </table>
        </div>
    }
}

fn session_row(session: &CompanyBiddingSessionItem) -> Html {
    let currency = session.currency.as_deref();
    let bids = session.bid_amounts();
    let bids = if bids.is_empty() {
        "—".to_string()
    } else {
        bids.into_iter()
            .map(|bid| format_money(Some(bid), currency))
            .collect::<Vec<_>>()
            .join(" / ")
    };

    html! {
        <tr key={session.id.to_string()}>
            <td class="px-4 py-2"><StatusBadge status={session.status} /></td>
            <td class="px-4 py-2">{or_dash(session.renter_name.as_deref())}</td>
            <td class="px-4 py-2">{or_dash(session.car_class_name.as_deref())}</td>
            <td class="px-4 py-2">
                {or_dash(session.operational_location.as_ref().map(|l| l.name.as_str()))}
            </td>
            <td class="px-4 py-2">{format_timestamp(session.pickup_at)}</td>
            <td class="px-4 py-2">{format_timestamp(session.drop_at)}</td>
            <td class="px-4 py-2">
                <div>{bids}</div>
                if session.accepted_amount.is_some() {
                    <div class="text-xs text-green-700">
                        {format!("Accepted {}", format_money(session.accepted_amount, currency))}
                    </div>
                }
            </td>
            <td class="px-4 py-2">{format_timestamp(session.created_at)}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct StatusBadgeProps {
    status: BiddingSessionStatus,
}

#[function_component]
fn StatusBadge(props: &StatusBadgeProps) -> Html {
    let palette = match props.status {
        BiddingSessionStatus::Active => "bg-blue-100 text-blue-800",
        BiddingSessionStatus::Accepted => "bg-green-100 text-green-800",
        BiddingSessionStatus::Locked => "bg-amber-100 text-amber-800",
        BiddingSessionStatus::Cancelled => "bg-red-100 text-red-800",
        BiddingSessionStatus::Completed => "bg-neutral-200 text-neutral-800",
    };
    html! {
        <span class={classes!("px-2", "py-0.5", "rounded", "text-xs", "font-medium", palette)}>
            {props.status.label()}
        </span>
    }
}
