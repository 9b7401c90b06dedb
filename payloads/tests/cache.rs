use payloads::cache::{PendingWrites, QueryCache, QueryKey, QueryKeyPrefix};
use payloads::query::{BiddingSessionQuery, StatusFilter};
use payloads::{BiddingSessionStatus, CompanyId, LocationId, TaxId};
use uuid::Uuid;

fn company(n: u128) -> CompanyId {
    CompanyId(Uuid::from_u128(n))
}

fn location(n: u128) -> LocationId {
    LocationId(Uuid::from_u128(n))
}

fn sessions_key(company_id: CompanyId, page: u32) -> QueryKey {
    let mut query = BiddingSessionQuery::default();
    query.set_page(page);
    QueryKey::CompanyBiddingSessions { company_id, query }
}

fn taxes_key(company_id: CompanyId, location_id: LocationId) -> QueryKey {
    QueryKey::CompanyTaxes {
        company_id,
        location_id,
    }
}

#[test]
fn identical_queries_share_one_request() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = sessions_key(company(1), 1);

    assert!(cache.needs_fetch(&key));
    assert!(cache.begin_fetch(&key));
    assert!(!cache.begin_fetch(&key.clone()));
    assert!(cache.is_in_flight(&key));

    // A different page is a different key.
    assert!(cache.begin_fetch(&sessions_key(company(1), 2)));

    cache.complete(&key, Ok(7));
    assert!(!cache.is_in_flight(&key));
    assert_eq!(cache.get(&key), Some(&7));
    assert!(!cache.needs_fetch(&key));
}

#[test]
fn failure_is_not_retried_until_refresh() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = sessions_key(company(1), 1);

    assert!(cache.begin_fetch(&key));
    cache.complete(&key, Err("Failed to load bidding sessions".to_string()));
    assert_eq!(cache.error(&key), Some("Failed to load bidding sessions"));
    assert!(!cache.needs_fetch(&key));

    // Refresh re-issues the very same key and success clears the error.
    assert!(cache.begin_fetch(&key));
    assert_eq!(cache.error(&key), None);
    cache.complete(&key, Ok(3));
    assert_eq!(cache.get(&key), Some(&3));
    assert_eq!(cache.error(&key), None);
}

#[test]
fn failed_refetch_keeps_previous_data() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = taxes_key(company(1), location(1));
    cache.begin_fetch(&key);
    cache.complete(&key, Ok(1));
    cache.begin_fetch(&key);
    cache.complete(&key, Err("boom".to_string()));
    assert_eq!(cache.get(&key), Some(&1));
    assert_eq!(cache.error(&key), Some("boom"));
}

#[test]
fn invalidation_marks_only_matching_keys_stale() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let here = taxes_key(company(1), location(1));
    let there = taxes_key(company(1), location(2));
    let other_company = taxes_key(company(2), location(1));
    let sessions = sessions_key(company(1), 1);
    for key in [&here, &there, &other_company, &sessions] {
        cache.begin_fetch(key);
        cache.complete(key, Ok(1));
    }

    let revision = cache.revision();
    let affected =
        cache.invalidate(&[QueryKeyPrefix::CompanyTaxesAt(company(1), location(1))]);
    assert_eq!(affected, 1);
    assert!(cache.revision() > revision);
    assert!(cache.needs_fetch(&here));
    assert!(!cache.needs_fetch(&there));

    cache.invalidate(&[QueryKeyPrefix::CompanyTaxes(company(1))]);
    assert!(cache.needs_fetch(&there));
    assert!(!cache.needs_fetch(&other_company));
    assert!(!cache.needs_fetch(&sessions));

    // Stale data stays readable until the refetch lands.
    assert_eq!(cache.get(&here), Some(&1));
    assert!(cache.is_stale(&here));
}

#[test]
fn company_prefix_covers_every_filter_combination() {
    let prefix = QueryKeyPrefix::CompanyBiddingSessions(company(1));
    let mut query = BiddingSessionQuery::default();
    query.set_status(StatusFilter::Only(BiddingSessionStatus::Cancelled));
    assert!(prefix.matches(&QueryKey::CompanyBiddingSessions {
        company_id: company(1),
        query,
    }));
    assert!(!prefix.matches(&sessions_key(company(2), 1)));
    assert!(!prefix.matches(&QueryKey::BiddingConfig(location(1))));
}

#[test]
fn stale_key_in_flight_is_not_fetched_twice() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = QueryKey::CdwSettings(location(3));
    cache.begin_fetch(&key);
    cache.complete(&key, Ok(1));
    cache.invalidate(&[QueryKeyPrefix::CdwSettings(location(3))]);
    assert!(cache.begin_fetch(&key));
    assert!(!cache.needs_fetch(&key));
}

#[test]
fn invalidation_during_fetch_triggers_another_fetch() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = taxes_key(company(1), location(2));
    cache.begin_fetch(&key);
    cache.complete(&key, Ok(1));

    // Refresh is out when a write to the same location lands
    assert!(cache.begin_fetch(&key));
    cache.invalidate(&[QueryKeyPrefix::CompanyTaxesAt(company(1), location(2))]);
    assert!(!cache.needs_fetch(&key));

    cache.complete(&key, Ok(1));
    assert_eq!(cache.get(&key), Some(&1));
    assert!(cache.is_stale(&key));
    assert!(cache.needs_fetch(&key));

    assert!(cache.begin_fetch(&key));
    cache.complete(&key, Ok(2));
    assert_eq!(cache.get(&key), Some(&2));
    assert!(!cache.needs_fetch(&key));
}

#[test]
fn failed_fetch_invalidated_midway_is_fetched_again() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = QueryKey::CdwSettings(location(3));
    cache.begin_fetch(&key);
    cache.invalidate(&[QueryKeyPrefix::CdwSettings(location(3))]);
    cache.complete(&key, Err("timeout".to_string()));
    assert!(cache.needs_fetch(&key));
}

#[test]
fn clear_forgets_everything() {
    let mut cache: QueryCache<u32> = QueryCache::default();
    let key = QueryKey::BiddingConfig(location(1));
    cache.begin_fetch(&key);
    cache.complete(&key, Ok(1));
    cache.clear();
    assert_eq!(cache.get(&key), None);
    assert!(cache.needs_fetch(&key));
}

#[test]
fn second_write_to_same_record_is_refused_until_first_finishes() {
    let mut pending = PendingWrites::default();
    let tax = TaxId(Uuid::from_u128(7));
    let other = TaxId(Uuid::from_u128(8));

    assert!(pending.begin(tax));
    assert!(!pending.begin(tax));
    assert!(pending.begin(other));
    assert!(pending.contains(&tax));

    pending.finish(&tax);
    assert!(!pending.contains(&tax));
    assert!(pending.contains(&other));
    assert!(pending.begin(tax));
}
