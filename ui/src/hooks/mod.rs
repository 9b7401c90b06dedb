pub mod use_bidding_config;
pub mod use_cdw_settings;
pub mod use_company_bidding_sessions;
pub mod use_company_bookings;
pub mod use_company_taxes;
pub mod use_query;
pub mod use_title;

pub use use_bidding_config::use_bidding_config;
pub use use_cdw_settings::use_cdw_settings;
pub use use_company_bidding_sessions::use_company_bidding_sessions;
pub use use_company_bookings::use_company_bookings;
pub use use_company_taxes::use_company_taxes;
pub use use_query::{FetchHookReturn, use_invalidate};
pub use use_title::use_title;

/// Distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
