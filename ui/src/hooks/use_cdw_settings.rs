use std::rc::Rc;

use payloads::LocationId;
use payloads::cache::QueryKey;
use payloads::responses::CdwSettings;
use yew::prelude::*;

use super::FetchHookReturn;
use super::use_query::use_cached_query;
use crate::contexts::session::Session;
use crate::state;

#[hook]
pub fn use_cdw_settings(
    session: Rc<Session>,
    location_id: LocationId,
) -> FetchHookReturn<CdwSettings> {
    let key = QueryKey::CdwSettings(location_id);

    use_cached_query::<state::CdwSettings, _, _>(key, move || {
        let api_client = session.api_client();
        async move {
            api_client
                .get_cdw_settings(&location_id)
                .await
                .map_err(|e| e.user_message("Failed to load CDW settings"))
        }
    })
}
