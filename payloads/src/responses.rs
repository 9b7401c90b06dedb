use crate::pagination::PageInfo;
use crate::{
    BiddingSessionId, BiddingSessionStatus, BookingId, BookingStatus,
    CompanyId, LocationId, OperatorId, TaxId, TaxType,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One page of a list endpoint: `{ok, page, limit, total, items}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(default = "default_ok")]
    pub ok: bool,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub items: Vec<T>,
}

fn default_ok() -> bool {
    true
}

impl<T> Paged<T> {
    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: LocationId,
    pub name: String,
}

/// The logged in operator and the company they administer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorProfile {
    pub id: OperatorId,
    pub email: String,
    pub name: Option<String>,
    pub company_id: CompanyId,
    pub company_name: Option<String>,
    #[serde(default)]
    pub locations: Vec<LocationSummary>,
}

impl OperatorProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: OperatorProfile,
}

/// Read-only view of a bidding session between a renter and the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBiddingSessionItem {
    pub id: BiddingSessionId,
    pub status: BiddingSessionStatus,
    pub renter_name: Option<String>,
    pub car_class_name: Option<String>,
    pub created_at: Timestamp,
    pub pickup_at: Timestamp,
    pub drop_at: Timestamp,
    pub operational_location: Option<LocationSummary>,
    pub first_bid_amount: Option<Decimal>,
    pub second_bid_amount: Option<Decimal>,
    pub third_bid_amount: Option<Decimal>,
    pub base_price: Option<Decimal>,
    pub accepted_amount: Option<Decimal>,
    pub currency: Option<String>,
}

impl CompanyBiddingSessionItem {
    /// The bids placed so far, oldest first. At most three.
    pub fn bid_amounts(&self) -> Vec<Decimal> {
        [
            self.first_bid_amount,
            self.second_bid_amount,
            self.third_bid_amount,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLocationTax {
    pub id: TaxId,
    pub operational_location_id: LocationId,
    pub title: String,
    pub description: Option<String>,
    pub tax_type: TaxType,
    pub percentage: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiddingConfig {
    pub location_id: LocationId,
    pub enabled: bool,
    pub max_bids_per_session: u8,
    pub session_duration_minutes: u32,
    pub min_bid_percentage: Option<Decimal>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdwSettings {
    pub location_id: LocationId,
    pub enabled: bool,
    pub cdw_type: TaxType,
    pub percentage: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBookingItem {
    pub id: BookingId,
    pub status: BookingStatus,
    pub renter_name: Option<String>,
    pub car_class_name: Option<String>,
    pub pickup_at: Timestamp,
    pub drop_at: Timestamp,
    pub total_price: Option<Decimal>,
    pub currency: Option<String>,
}
