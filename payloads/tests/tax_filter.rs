use jiff::Timestamp;
use payloads::responses::CompanyLocationTax;
use payloads::tax_filter::filter_taxes;
use payloads::{LocationId, TaxId, TaxType};
use rust_decimal::dec;
use uuid::Uuid;

fn tax(n: u128, title: &str, description: Option<&str>) -> CompanyLocationTax {
    CompanyLocationTax {
        id: TaxId(Uuid::from_u128(n)),
        operational_location_id: LocationId(Uuid::from_u128(1)),
        title: title.to_string(),
        description: description.map(str::to_string),
        tax_type: TaxType::Percentage,
        percentage: Some(dec!(5.00)),
        amount: None,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn taxes() -> Vec<CompanyLocationTax> {
    vec![
        tax(1, "City Tax", Some("Municipal levy")),
        tax(2, "VAT", None),
        tax(3, "Airport surcharge", Some("Applies to airport pickups")),
    ]
}

fn titles(found: Vec<&CompanyLocationTax>) -> Vec<&str> {
    found.into_iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn blank_search_keeps_everything() {
    let taxes = taxes();
    assert_eq!(filter_taxes(&taxes, "").len(), 3);
    assert_eq!(filter_taxes(&taxes, "   ").len(), 3);
}

#[test]
fn matches_title_ignoring_case() {
    let taxes = taxes();
    assert_eq!(titles(filter_taxes(&taxes, "vat")), vec!["VAT"]);
    assert_eq!(titles(filter_taxes(&taxes, "CITY")), vec!["City Tax"]);
}

#[test]
fn matches_description() {
    let taxes = taxes();
    assert_eq!(titles(filter_taxes(&taxes, "levy")), vec!["City Tax"]);
}

#[test]
fn keeps_original_order() {
    let taxes = taxes();
    assert_eq!(
        titles(filter_taxes(&taxes, "air")),
        vec!["Airport surcharge"]
    );
    assert_eq!(
        titles(filter_taxes(&taxes, "t")),
        vec!["City Tax", "VAT", "Airport surcharge"]
    );
}

#[test]
fn no_match_is_empty() {
    let taxes = taxes();
    assert!(filter_taxes(&taxes, "fuel").is_empty());
}
