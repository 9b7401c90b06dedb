use std::rc::Rc;

use payloads::LocationId;
use payloads::cache::QueryKey;
use payloads::responses::CompanyLocationTax;
use yew::prelude::*;

use super::FetchHookReturn;
use super::use_query::use_cached_query;
use crate::contexts::session::Session;
use crate::state::Taxes;

/// Every tax configured at one location of the company.
#[hook]
pub fn use_company_taxes(
    session: Rc<Session>,
    location_id: LocationId,
) -> FetchHookReturn<Vec<CompanyLocationTax>> {
    let company_id = session.company_id();
    let key = QueryKey::CompanyTaxes {
        company_id,
        location_id,
    };

    use_cached_query::<Taxes, _, _>(key, move || {
        let api_client = session.api_client();
        async move {
            api_client
                .list_company_taxes(&company_id, &location_id)
                .await
                .map(|page| page.items)
                .map_err(|e| e.user_message("Failed to load taxes"))
        }
    })
}
