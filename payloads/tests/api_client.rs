use payloads::api_client::extract_error_message;
use payloads::query::{BiddingSessionQuery, PageLimit, StatusFilter};
use payloads::tax_input::TaxFormState;
use payloads::{
    APIClient, BiddingSessionStatus, ClientError, CompanyId, LocationId,
    TaxId, cache::QueryKeyPrefix, requests,
};
use reqwest::StatusCode;
use rust_decimal::dec;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{
    body_json, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPANY: Uuid = Uuid::from_u128(0x11);
const LOCATION: Uuid = Uuid::from_u128(0x22);
const TAX: Uuid = Uuid::from_u128(0x33);

fn client(server: &MockServer) -> APIClient {
    APIClient::new(server.uri()).with_token("operator-token")
}

fn session_json() -> serde_json::Value {
    json!({
        "id": Uuid::from_u128(0x44),
        "status": "ACCEPTED",
        "renterName": "Jane Doe",
        "carClassName": "Compact",
        "createdAt": "2024-03-01T09:00:00.000Z",
        "pickupAt": "2024-03-10T10:00:00.000Z",
        "dropAt": "2024-03-12T10:00:00.000Z",
        "operationalLocation": { "id": LOCATION, "name": "Airport" },
        "firstBidAmount": "120.00",
        "secondBidAmount": 110,
        "thirdBidAmount": null,
        "basePrice": "150.00",
        "acceptedAmount": "110.00",
        "currency": "EUR"
    })
}

fn tax_json(percentage: &str) -> serde_json::Value {
    json!({
        "id": TAX,
        "operationalLocationId": LOCATION,
        "title": "City tax",
        "description": null,
        "taxType": "PERCENTAGE",
        "percentage": percentage,
        "amount": null,
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn bidding_sessions_request_carries_the_composed_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bidding/sessions/company/{COMPANY}")))
        .and(header("authorization", "Bearer operator-token"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "20"))
        .and(query_param("sortBy", "createdAt"))
        .and(query_param("sortDir", "DESC"))
        .and(query_param("status", "ACCEPTED"))
        .and(query_param_is_missing("dateFrom"))
        .and(query_param_is_missing("operationalLocationId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "page": 1,
            "limit": 20,
            "total": 41,
            "items": [session_json()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = BiddingSessionQuery::default();
    query.set_limit(PageLimit::Twenty);
    query.set_status(StatusFilter::Only(BiddingSessionStatus::Accepted));

    let page = client(&server)
        .get_company_bidding_sessions(&CompanyId(COMPANY), &query)
        .await
        .unwrap();

    assert_eq!(page.total, 41);
    assert_eq!(page.page_info().total_pages(), 3);
    let item = &page.items[0];
    assert_eq!(item.status, BiddingSessionStatus::Accepted);
    assert_eq!(item.bid_amounts(), vec![dec!(120.00), dec!(110)]);
    assert_eq!(
        item.operational_location.as_ref().map(|l| l.name.as_str()),
        Some("Airport")
    );
}

#[tokio::test]
async fn refresh_after_failure_reissues_the_same_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bidding/sessions/company/{COMPANY}")))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/bidding/sessions/company/{COMPANY}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true, "page": 2, "limit": 10, "total": 0, "items": []
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let mut query = BiddingSessionQuery::default();
    query.set_page(2);

    let error = client
        .get_company_bidding_sessions(&CompanyId(COMPANY), &query)
        .await
        .unwrap_err();
    assert_eq!(
        error.user_message("Failed to load bidding sessions"),
        "Failed to load bidding sessions"
    );

    let page = client
        .get_company_bidding_sessions(&CompanyId(COMPANY), &query)
        .await
        .unwrap();
    assert!(page.items.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, requests[1].url);
}

#[tokio::test]
async fn tax_list_fetches_one_oversized_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/company-location-taxes/{COMPANY}")))
        .and(query_param("operationalLocationId", LOCATION.to_string()))
        .and(query_param("page", "1"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true, "page": 1, "limit": 1000, "total": 1,
            "items": [tax_json("5.00")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .list_company_taxes(&CompanyId(COMPANY), &LocationId(LOCATION))
        .await
        .unwrap();
    assert_eq!(page.items[0].percentage, Some(dec!(5.00)));
}

#[tokio::test]
async fn creating_a_tax_posts_canonical_percentage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/company-location-taxes/{COMPANY}")))
        .and(body_json(json!({
            "operationalLocationId": LOCATION,
            "title": "City tax",
            "taxType": "PERCENTAGE",
            "percentage": "5.00"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(tax_json("5.00")))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = TaxFormState {
        title: "City tax".to_string(),
        ..Default::default()
    };
    form.pricing.percentage.on_input("5", 0);
    form.pricing.percentage.on_blur();
    let request = form.to_create_request(LocationId(LOCATION)).unwrap();

    let created = client(&server)
        .create_company_tax(&CompanyId(COMPANY), &request)
        .await
        .unwrap();
    assert_eq!(created.value.id, TaxId(TAX));
    assert_eq!(
        created.affected,
        vec![QueryKeyPrefix::CompanyTaxesAt(
            CompanyId(COMPANY),
            LocationId(LOCATION)
        )]
    );
}

#[tokio::test]
async fn toggle_and_delete_invalidate_company_taxes() {
    let server = MockServer::start().await;
    let tax_path = format!("/company-location-taxes/{COMPANY}/tax/{TAX}");
    Mock::given(method("PATCH"))
        .and(path(format!("{tax_path}/toggle")))
        .respond_with(ResponseTemplate::new(200).set_body_json(tax_json("5.00")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(tax_path))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let toggled = client
        .toggle_company_tax(&CompanyId(COMPANY), &TaxId(TAX))
        .await
        .unwrap();
    let deleted = client
        .delete_company_tax(&CompanyId(COMPANY), &TaxId(TAX))
        .await
        .unwrap();
    let expected = vec![QueryKeyPrefix::CompanyTaxes(CompanyId(COMPANY))];
    assert_eq!(toggled.affected, expected);
    assert_eq!(deleted.affected, expected);
}

#[tokio::test]
async fn business_rule_rejection_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("/company-location-taxes/{COMPANY}/tax/{TAX}")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "message": "Percentage must be between 0 and 100"
        })))
        .mount(&server)
        .await;

    let request = requests::UpdateCompanyTax {
        title: "City tax".to_string(),
        description: None,
        tax_type: payloads::TaxType::Percentage,
        percentage: Some("5.00".to_string()),
        amount: None,
    };
    let error = client(&server)
        .update_company_tax(&CompanyId(COMPANY), &TaxId(TAX), &request)
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::APIError(..)));
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        error.user_message("Failed to update tax"),
        "Percentage must be between 0 and 100"
    );
    assert_eq!(error.to_string(), "Percentage must be between 0 and 100");
}

#[tokio::test]
async fn cdw_settings_use_the_full_endpoint() {
    let server = MockServer::start().await;
    let cdw_path = format!("/operator/locations/cdw-settings/{LOCATION}/full");
    let settings = json!({
        "locationId": LOCATION,
        "enabled": true,
        "cdwType": "FIXED",
        "percentage": null,
        "amount": "12.50",
        "description": "Per day",
        "updatedAt": null
    });
    Mock::given(method("GET"))
        .and(path(cdw_path.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(cdw_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(settings))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let fetched = client.get_cdw_settings(&LocationId(LOCATION)).await.unwrap();
    assert_eq!(fetched.amount, Some(dec!(12.50)));

    let request = payloads::tax_input::CdwFormState::from_settings(&fetched)
        .to_request()
        .unwrap();
    assert_eq!(request.amount.as_deref(), Some("12.50"));
    let updated = client
        .update_cdw_settings(&LocationId(LOCATION), &request)
        .await
        .unwrap();
    assert_eq!(
        updated.affected,
        vec![QueryKeyPrefix::CdwSettings(LocationId(LOCATION))]
    );
}

#[tokio::test]
async fn bidding_config_round_trip() {
    let server = MockServer::start().await;
    let config_path = format!("/operator/locations/bidding-config/{LOCATION}");
    Mock::given(method("PUT"))
        .and(path(config_path))
        .and(body_json(json!({
            "enabled": true,
            "maxBidsPerSession": 3,
            "sessionDurationMinutes": 60,
            "minBidPercentage": "70.00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locationId": LOCATION,
            "enabled": true,
            "maxBidsPerSession": 3,
            "sessionDurationMinutes": 60,
            "minBidPercentage": "70.00",
            "updatedAt": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = requests::UpdateBiddingConfig {
        enabled: true,
        max_bids_per_session: 3,
        session_duration_minutes: 60,
        min_bid_percentage: Some("70.00".to_string()),
    };
    assert_eq!(request.validate(), None);
    let updated = client(&server)
        .update_bidding_config(&LocationId(LOCATION), &request)
        .await
        .unwrap();
    assert_eq!(updated.value.min_bid_percentage, Some(dec!(70)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let server = MockServer::start().await;
    let address = server.uri();
    drop(server);

    let error = APIClient::new(address)
        .get_bidding_config(&LocationId(LOCATION))
        .await
        .unwrap_err();
    assert!(matches!(error, ClientError::Network(_)));
    assert_eq!(error.user_message("Failed to load"), "Failed to load");
}

#[test]
fn error_messages_are_extracted_from_json_bodies() {
    assert_eq!(
        extract_error_message(r#"{"message":"Tax not found"}"#).as_deref(),
        Some("Tax not found")
    );
    assert_eq!(
        extract_error_message(
            r#"{"message":["title should not be empty","percentage must be a number"]}"#
        )
        .as_deref(),
        Some("title should not be empty, percentage must be a number")
    );
    assert_eq!(extract_error_message(r#"{"message":""}"#), None);
    assert_eq!(extract_error_message(r#"{"error":"x"}"#), None);
    assert_eq!(extract_error_message("<html>bad gateway</html>"), None);
}

#[test]
fn bidding_config_rules() {
    let mut request = requests::UpdateBiddingConfig {
        enabled: true,
        max_bids_per_session: 4,
        session_duration_minutes: 30,
        min_bid_percentage: None,
    };
    assert_eq!(
        request.validate(),
        Some("Bids per session must be between 1 and 3")
    );
    request.max_bids_per_session = 2;
    request.session_duration_minutes = 0;
    assert_eq!(
        request.validate(),
        Some("Session duration must be greater than 0")
    );
    request.session_duration_minutes = 30;
    request.min_bid_percentage = Some("100.00".to_string());
    assert_eq!(
        request.validate(),
        Some("Percentage must be greater than 0 and less than 100")
    );
}
