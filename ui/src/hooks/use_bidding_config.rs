use std::rc::Rc;

use payloads::LocationId;
use payloads::cache::QueryKey;
use payloads::responses::BiddingConfig;
use yew::prelude::*;

use super::FetchHookReturn;
use super::use_query::use_cached_query;
use crate::contexts::session::Session;
use crate::state::BiddingConfigs;

#[hook]
pub fn use_bidding_config(
    session: Rc<Session>,
    location_id: LocationId,
) -> FetchHookReturn<BiddingConfig> {
    let key = QueryKey::BiddingConfig(location_id);

    use_cached_query::<BiddingConfigs, _, _>(key, move || {
        let api_client = session.api_client();
        async move {
            api_client
                .get_bidding_config(&location_id)
                .await
                .map_err(|e| e.user_message("Failed to load bidding settings"))
        }
    })
}
