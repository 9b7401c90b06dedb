pub mod bidding_config;
pub mod bidding_sessions;
pub mod bookings;
pub mod cdw_settings;
pub mod company_taxes;
pub mod login;
pub mod not_found;

pub use bidding_config::BiddingConfigPage;
pub use bidding_sessions::BiddingSessionsPage;
pub use bookings::BookingsPage;
pub use cdw_settings::CdwSettingsPage;
pub use company_taxes::CompanyTaxesPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;

use yew::prelude::*;

/// Callback applying a setter to a copy of the state and storing the result,
/// e.g. `edit_state(&query, BiddingSessionQuery::set_page)`.
pub fn edit_state<S, T>(
    state: &UseStateHandle<S>,
    edit: fn(&mut S, T),
) -> Callback<T>
where
    S: Clone + 'static,
    T: 'static,
{
    let state = state.clone();
    Callback::from(move |value| {
        let mut next = (*state).clone();
        edit(&mut next, value);
        state.set(next);
    })
}
