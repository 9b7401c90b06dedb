use crate::{LocationId, TaxType};
use serde::{Deserialize, Serialize};

pub const TAX_TITLE_MAX_LEN: usize = 100;
pub const MAX_BIDS_PER_SESSION: u8 = 3;
pub const SESSION_DURATION_MAX_MINUTES: u32 = 7 * 24 * 60;

/// Failures building a request locally, before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Page size {0} is not one of 10, 20, 50 or 100")]
    InvalidPageLimit(u32),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyTax {
    pub operational_location_id: LocationId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tax_type: TaxType,
    /// Two-decimal string, set only for percentage taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    /// Two-decimal string, set only for fixed taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyTax {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tax_type: TaxType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBiddingConfig {
    pub enabled: bool,
    pub max_bids_per_session: u8,
    pub session_duration_minutes: u32,
    /// Lowest acceptable bid as a share of the base price, two decimals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bid_percentage: Option<String>,
}

impl UpdateBiddingConfig {
    /// Returns the first rule the config breaks, if any.
    pub fn validate(&self) -> Option<&'static str> {
        if !(1..=MAX_BIDS_PER_SESSION).contains(&self.max_bids_per_session) {
            return Some("Bids per session must be between 1 and 3");
        }
        if self.session_duration_minutes == 0 {
            return Some("Session duration must be greater than 0");
        }
        if self.session_duration_minutes > SESSION_DURATION_MAX_MINUTES {
            return Some("Session duration cannot exceed 7 days");
        }
        if let Some(percentage) = &self.min_bid_percentage {
            return crate::tax_input::validate_percentage(percentage).err();
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCdwSettings {
    pub enabled: bool,
    pub cdw_type: TaxType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
