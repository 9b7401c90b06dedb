use payloads::cache::{QueryCache, QueryKeyPrefix};
use payloads::responses;
use yewdux::prelude::*;

/// Remote reads of the portal, one [`QueryCache`] per resource.
///
/// Hooks read and fill these caches; mutations never write to them
/// directly but call [`State::invalidate`] with what they affected.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub bidding_sessions:
        QueryCache<responses::Paged<responses::CompanyBiddingSessionItem>>,
    pub bookings: QueryCache<responses::Paged<responses::CompanyBookingItem>>,
    pub taxes: QueryCache<Vec<responses::CompanyLocationTax>>,
    pub bidding_configs: QueryCache<responses::BiddingConfig>,
    pub cdw_settings: QueryCache<responses::CdwSettings>,
}

impl State {
    /// Mark every cached read matching one of the prefixes as stale.
    pub fn invalidate(&mut self, prefixes: &[QueryKeyPrefix]) -> usize {
        self.bidding_sessions.invalidate(prefixes)
            + self.bookings.invalidate(prefixes)
            + self.taxes.invalidate(prefixes)
            + self.bidding_configs.invalidate(prefixes)
            + self.cdw_settings.invalidate(prefixes)
    }

    /// Drop everything, e.g. when the operator logs out.
    pub fn clear(&mut self) {
        self.bidding_sessions.clear();
        self.bookings.clear();
        self.taxes.clear();
        self.bidding_configs.clear();
        self.cdw_settings.clear();
    }
}

/// Ties a resource marker to its cache inside [`State`], so one generic
/// hook can serve every remote read.
pub trait CachedResource: 'static {
    type Value: Clone + PartialEq + 'static;

    fn cache(state: &State) -> &QueryCache<Self::Value>;
    fn cache_mut(state: &mut State) -> &mut QueryCache<Self::Value>;
}

macro_rules! cached_resource {
    ($marker:ident, $field:ident, $value:ty) => {
        pub struct $marker;

        impl CachedResource for $marker {
            type Value = $value;

            fn cache(state: &State) -> &QueryCache<Self::Value> {
                &state.$field
            }

            fn cache_mut(state: &mut State) -> &mut QueryCache<Self::Value> {
                &mut state.$field
            }
        }
    };
}

cached_resource!(
    BiddingSessions,
    bidding_sessions,
    responses::Paged<responses::CompanyBiddingSessionItem>
);
cached_resource!(
    Bookings,
    bookings,
    responses::Paged<responses::CompanyBookingItem>
);
cached_resource!(Taxes, taxes, Vec<responses::CompanyLocationTax>);
cached_resource!(BiddingConfigs, bidding_configs, responses::BiddingConfig);
cached_resource!(CdwSettings, cdw_settings, responses::CdwSettings);
