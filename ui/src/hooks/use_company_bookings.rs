use std::rc::Rc;

use payloads::cache::QueryKey;
use payloads::query::BookingQuery;
use payloads::responses::{CompanyBookingItem, Paged};
use yew::prelude::*;

use super::FetchHookReturn;
use super::use_query::use_cached_query;
use crate::contexts::session::Session;
use crate::state::Bookings;

#[hook]
pub fn use_company_bookings(
    session: Rc<Session>,
    query: BookingQuery,
) -> FetchHookReturn<Paged<CompanyBookingItem>> {
    let company_id = session.company_id();
    let key = QueryKey::CompanyBookings {
        company_id,
        query: query.clone(),
    };

    use_cached_query::<Bookings, _, _>(key, move || {
        let api_client = session.api_client();
        let query = query.clone();
        async move {
            api_client
                .get_company_bookings(&company_id, &query)
                .await
                .map_err(|e| e.user_message("Failed to load bookings"))
        }
    })
}
