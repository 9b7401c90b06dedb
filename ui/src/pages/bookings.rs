use std::rc::Rc;

use payloads::BookingStatus;
use payloads::pagination::TableBody;
use payloads::query::{BookingQuery, SortDir, StatusFilter};
use payloads::responses::CompanyBookingItem;
use yew::prelude::*;

use crate::components::{DateRangeFilter, PaginationControls, StatusSelect};
use crate::contexts::session::Session;
use crate::hooks::{use_company_bookings, use_title};
use crate::pages::edit_state;
use crate::utils::format::{format_money, or_dash};
use crate::utils::time::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: Rc<Session>,
}

#[function_component]
pub fn BookingsPage(props: &Props) -> Html {
    use_title("Bookings");
    let query = use_state(BookingQuery::default);
    let bookings =
        use_company_bookings(props.session.clone(), (*query).clone());

    let on_status = {
        let query = query.clone();
        Callback::from(move |value: Option<String>| {
            let mut next = (*query).clone();
            next.set_status(
                match value.as_deref().and_then(BookingStatus::parse) {
                    Some(status) => StatusFilter::Only(status),
                    None => StatusFilter::All,
                },
            );
            query.set(next);
        })
    };

    let on_sort = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.toggle_sort_dir();
            query.set(next);
        })
    };

    let on_refresh = bookings.refetch.reform(|_: MouseEvent| ());
    let status_options = BookingStatus::ALL
        .iter()
        .map(|status| (status.as_str(), status.label()))
        .collect::<Vec<_>>();
    let pickup_label = match query.sort_dir {
        SortDir::Asc => "Pickup ▲",
        SortDir::Desc => "Pickup ▼",
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900">{"Bookings"}</h1>
                <button
                    onclick={on_refresh}
                    disabled={bookings.is_loading}
                    class="px-4 py-2 text-sm font-medium border border-neutral-300
                           rounded-md bg-white hover:bg-neutral-50 disabled:opacity-50"
                >
                    {"Refresh"}
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
                    on_change={edit_state(&query, BookingQuery::set_dates)}
                />
            </div>

            {bookings.render("bookings", |page, is_loading, error| {
                let rows = match TableBody::new(&page.items, "No bookings found") {
                    TableBody::Placeholder(message) => html! {
                        <tr>
                            <td colspan="6" class="px-4 py-8 text-center text-neutral-500">
                                {message}
                            </td>
                        </tr>
                    },
                    TableBody::Rows(items) => {
                        items.iter().map(booking_row).collect::<Html>()
                    }
                };
                html! {
                    <>
                        if let Some(error) = error {
                            <div class="p-3 rounded-md bg-red-50 border border-red-200 text-sm text-red-700">
                                {error}
                            </div>
                        }
                        <div class="overflow-x-auto bg-white rounded-lg border border-neutral-200">
                            <table class="min-w-full text-sm">
                                <thead class="bg-neutral-50 text-neutral-700">
                                    <tr>
                                        <th class="px-4 py-2 text-left">{"Status"}</th>
                                        <th class="px-4 py-2 text-left">{"Renter"}</th>
                                        <th class="px-4 py-2 text-left">{"Car class"}</th>
                                        <th class="px-4 py-2 text-left">
                                            <button onclick={on_sort.clone()} class="font-medium hover:underline">
                                                {pickup_label}
                                            </button>
                                        </th>
                                        <th class="px-4 py-2 text-left">{"Drop-off"}</th>
                                        <th class="px-4 py-2 text-left">{"Total"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-neutral-100">{rows}</tbody>
                            </table>
                        </div>
                        <PaginationControls
                            info={page.page_info()}
                            limit={query.limit}
                            on_page_change={edit_state(&query, BookingQuery::set_page)}
                            on_limit_change={edit_state(&query, BookingQuery::set_limit)}
                            {is_loading}
                        />
                    </>
                }
            })}
        </div>
    }
}

fn booking_row(booking: &CompanyBookingItem) -> Html {
    html! {
        <tr key={booking.id.to_string()}>
            <td class="px-4 py-2">{booking.status.label()}</td>
            <td class="px-4 py-2">{or_dash(booking.renter_name.as_deref())}</td>
            <td class="px-4 py-2">{or_dash(booking.car_class_name.as_deref())}</td>
            <td class="px-4 py-2">{format_timestamp(booking.pickup_at)}</td>
            <td class="px-4 py-2">{format_timestamp(booking.drop_at)}</td>
            <td class="px-4 py-2">
                {format_money(booking.total_price, booking.currency.as_deref())}
            </td>
        </tr>
    }
}
