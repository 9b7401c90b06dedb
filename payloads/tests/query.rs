use jiff::civil::date;
use payloads::BiddingSessionStatus;
use payloads::query::{
    BiddingSessionQuery, BookingQuery, DateRange, PageLimit, SessionSortBy,
    SortDir, StatusFilter, parse_date_input,
};
use payloads::requests::RequestError;

fn pairs(query: &BiddingSessionQuery) -> Vec<(String, String)> {
    query
        .to_query_pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}

#[test]
fn default_query_has_paging_and_sort_only() {
    let query = BiddingSessionQuery::default();
    assert_eq!(
        pairs(&query),
        vec![
            pair("page", "1"),
            pair("limit", "10"),
            pair("sortBy", "createdAt"),
            pair("sortDir", "DESC"),
        ]
    );
}

#[test]
fn every_filter_is_composed_in_order() {
    let mut query = BiddingSessionQuery::default();
    query.set_limit(PageLimit::Fifty);
    query.sort_on(SessionSortBy::PickupAt);
    query.set_sort_dir(SortDir::Asc);
    query.set_status(StatusFilter::Only(BiddingSessionStatus::Locked));
    query.set_dates(DateRange {
        from: Some(date(2024, 3, 1)),
        to: Some(date(2024, 3, 31)),
    });
    query.set_operational_location_id(Some(" loc-42 ".to_string()));
    query.set_page(2);

    assert_eq!(
        pairs(&query),
        vec![
            pair("page", "2"),
            pair("limit", "50"),
            pair("sortBy", "pickupAt"),
            pair("sortDir", "ASC"),
            pair("status", "LOCKED"),
            pair("dateFrom", "2024-03-01T00:00:00.000Z"),
            pair("dateTo", "2024-03-31T23:59:59.999Z"),
            pair("operationalLocationId", "loc-42"),
        ]
    );
}

#[test]
fn all_status_and_blank_location_are_omitted() {
    let mut query = BiddingSessionQuery::default();
    query.set_status(StatusFilter::All);
    query.set_operational_location_id(Some("   ".to_string()));
    let keys: Vec<_> =
        query.to_query_pairs().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["page", "limit", "sortBy", "sortDir"]);
}

#[test]
fn status_change_resets_page_but_keeps_limit_and_sort() {
    let mut query = BiddingSessionQuery::default();
    query.set_limit(PageLimit::Twenty);
    query.sort_on(SessionSortBy::DropAt);
    query.set_page(3);
    assert_eq!(query.page(), 3);

    query.set_status(StatusFilter::Only(BiddingSessionStatus::Active));

    assert_eq!(query.page(), 1);
    assert_eq!(query.limit, PageLimit::Twenty);
    assert_eq!(query.sort_by, SessionSortBy::DropAt);
    assert_eq!(query.sort_dir, SortDir::Desc);
}

#[test]
fn every_filter_change_resets_page() {
    let changes: Vec<fn(&mut BiddingSessionQuery)> = vec![
        |q| q.set_limit(PageLimit::Hundred),
        |q| q.set_sort_dir(SortDir::Asc),
        |q| q.sort_on(SessionSortBy::Status),
        |q| q.set_dates(DateRange { from: Some(date(2024, 1, 1)), to: None }),
        |q| q.set_operational_location_id(Some("abc".to_string())),
        |q| q.clear_filters(),
    ];
    for change in changes {
        let mut query = BiddingSessionQuery::default();
        query.set_page(4);
        change(&mut query);
        assert_eq!(query.page(), 1);
    }
}

#[test]
fn page_never_drops_below_one() {
    let mut query = BiddingSessionQuery::default();
    query.set_page(0);
    assert_eq!(query.page(), 1);
}

#[test]
fn sorting_the_active_column_toggles_direction() {
    let mut query = BiddingSessionQuery::default();
    assert_eq!(query.sort_by, SessionSortBy::CreatedAt);
    query.sort_on(SessionSortBy::CreatedAt);
    assert_eq!(query.sort_dir, SortDir::Asc);
    query.sort_on(SessionSortBy::CreatedAt);
    assert_eq!(query.sort_dir, SortDir::Desc);

    query.sort_on(SessionSortBy::Status);
    query.sort_on(SessionSortBy::PickupAt);
    assert_eq!(query.sort_by, SessionSortBy::PickupAt);
    assert_eq!(query.sort_dir, SortDir::Desc);
}

#[test]
fn equal_queries_compose_identically() {
    let mut a = BiddingSessionQuery::default();
    let mut b = BiddingSessionQuery::default();
    for query in [&mut a, &mut b] {
        query.set_status(StatusFilter::Only(BiddingSessionStatus::Completed));
        query.set_page(2);
    }
    assert_eq!(a, b);
    assert_eq!(a.to_query_pairs(), b.to_query_pairs());
}

#[test]
fn page_limit_accepts_only_offered_sizes() {
    assert_eq!(PageLimit::try_from(20), Ok(PageLimit::Twenty));
    assert_eq!(PageLimit::try_from(100), Ok(PageLimit::Hundred));
    assert_eq!(
        PageLimit::try_from(25),
        Err(RequestError::InvalidPageLimit(25))
    );
}

#[test]
fn date_inputs() {
    assert_eq!(parse_date_input(""), Ok(None));
    assert_eq!(parse_date_input("2024-02-29"), Ok(Some(date(2024, 2, 29))));
    assert!(matches!(
        parse_date_input("2023-02-29"),
        Err(RequestError::InvalidDate(_))
    ));
}

#[test]
fn inverted_date_range() {
    let range = DateRange {
        from: Some(date(2024, 5, 2)),
        to: Some(date(2024, 5, 1)),
    };
    assert!(range.is_inverted());
    let single_day = DateRange {
        from: Some(date(2024, 5, 1)),
        to: Some(date(2024, 5, 1)),
    };
    assert!(!single_day.is_inverted());
    assert!(!DateRange::default().is_inverted());
}

#[test]
fn booking_query_is_sorted_by_pickup() {
    let mut query = BookingQuery::default();
    query.set_page(5);
    query.toggle_sort_dir();
    assert_eq!(query.page(), 1);
    let pairs = query.to_query_pairs();
    assert!(pairs.contains(&("sortBy", "pickupAt".to_string())));
    assert!(pairs.contains(&("sortDir", "ASC".to_string())));
}
