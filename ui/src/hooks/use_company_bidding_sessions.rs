use std::rc::Rc;

use payloads::cache::QueryKey;
use payloads::query::BiddingSessionQuery;
use payloads::responses::{CompanyBiddingSessionItem, Paged};
use yew::prelude::*;

use super::FetchHookReturn;
use super::use_query::use_cached_query;
use crate::contexts::session::Session;
use crate::state::BiddingSessions;

/// One page of the company's bidding sessions for the given filters.
#[hook]
pub fn use_company_bidding_sessions(
    session: Rc<Session>,
    query: BiddingSessionQuery,
) -> FetchHookReturn<Paged<CompanyBiddingSessionItem>> {
    let company_id = session.company_id();
    let key = QueryKey::CompanyBiddingSessions {
        company_id,
        query: query.clone(),
    };

    use_cached_query::<BiddingSessions, _, _>(key, move || {
        let api_client = session.api_client();
        let query = query.clone();
        async move {
            api_client
                .get_company_bidding_sessions(&company_id, &query)
                .await
                .map_err(|e| e.user_message("Failed to load bidding sessions"))
        }
    })
}
