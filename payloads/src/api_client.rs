use crate::cache::{Mutated, QueryKeyPrefix};
use crate::query::{BiddingSessionQuery, BookingQuery};
use crate::tax_filter::TAX_LIST_FETCH_LIMIT;
use crate::{CompanyId, LocationId, TaxId, requests, responses};
use reqwest::{Method, StatusCode};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the rental marketplace backend.
///
/// The client carries the operator's access token explicitly; it is built
/// from the session at the call site rather than read from global state.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: None,
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let request = self.inner_client.request(method, self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ReqwestResult {
        self.request(Method::GET, path).query(query).send().await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        self.request(method, path).json(body).send().await
    }

    async fn send_empty(&self, method: Method, path: &str) -> ReqwestResult {
        self.request(method, path).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::LoginResponse, ClientError> {
        let response =
            self.send_json(Method::POST, "auth/login", details).await?;
        ok_body(response).await
    }

    /// Profile of the operator owning the current token.
    pub async fn current_operator(
        &self,
    ) -> Result<responses::OperatorProfile, ClientError> {
        let response = self.get("auth/me", &[]).await?;
        ok_body(response).await
    }

    pub async fn get_company_bidding_sessions(
        &self,
        company_id: &CompanyId,
        query: &BiddingSessionQuery,
    ) -> Result<
        responses::Paged<responses::CompanyBiddingSessionItem>,
        ClientError,
    > {
        let path = format!("bidding/sessions/company/{company_id}");
        let response = self.get(&path, &query.to_query_pairs()).await?;
        ok_body(response).await
    }

    pub async fn get_company_bookings(
        &self,
        company_id: &CompanyId,
        query: &BookingQuery,
    ) -> Result<responses::Paged<responses::CompanyBookingItem>, ClientError>
    {
        let path = format!("bookings/company/{company_id}");
        let response = self.get(&path, &query.to_query_pairs()).await?;
        ok_body(response).await
    }

    /// All taxes of one location. The endpoint is paged; a single oversized
    /// page stands in for "everything".
    pub async fn list_company_taxes(
        &self,
        company_id: &CompanyId,
        location_id: &LocationId,
    ) -> Result<responses::Paged<responses::CompanyLocationTax>, ClientError>
    {
        let path = format!("company-location-taxes/{company_id}");
        let query = [
            ("operationalLocationId", location_id.to_string()),
            ("page", "1".to_string()),
            ("limit", TAX_LIST_FETCH_LIMIT.to_string()),
        ];
        let response = self.get(&path, &query).await?;
        ok_body(response).await
    }

    pub async fn create_company_tax(
        &self,
        company_id: &CompanyId,
        details: &requests::CreateCompanyTax,
    ) -> Result<Mutated<responses::CompanyLocationTax>, ClientError> {
        let path = format!("company-location-taxes/{company_id}");
        let response = self.send_json(Method::POST, &path, details).await?;
        let tax = ok_body(response).await?;
        Ok(Mutated::new(
            tax,
            vec![QueryKeyPrefix::CompanyTaxesAt(
                *company_id,
                details.operational_location_id,
            )],
        ))
    }

    pub async fn update_company_tax(
        &self,
        company_id: &CompanyId,
        tax_id: &TaxId,
        details: &requests::UpdateCompanyTax,
    ) -> Result<Mutated<responses::CompanyLocationTax>, ClientError> {
        let path = format!("company-location-taxes/{company_id}/tax/{tax_id}");
        let response = self.send_json(Method::PATCH, &path, details).await?;
        let tax = ok_body(response).await?;
        Ok(Mutated::new(
            tax,
            vec![QueryKeyPrefix::CompanyTaxes(*company_id)],
        ))
    }

    pub async fn delete_company_tax(
        &self,
        company_id: &CompanyId,
        tax_id: &TaxId,
    ) -> Result<Mutated<()>, ClientError> {
        let path = format!("company-location-taxes/{company_id}/tax/{tax_id}");
        let response = self.send_empty(Method::DELETE, &path).await?;
        ok_empty(response).await?;
        Ok(Mutated::new(
            (),
            vec![QueryKeyPrefix::CompanyTaxes(*company_id)],
        ))
    }

    /// Flip a tax between active and inactive.
    pub async fn toggle_company_tax(
        &self,
        company_id: &CompanyId,
        tax_id: &TaxId,
    ) -> Result<Mutated<responses::CompanyLocationTax>, ClientError> {
        let path =
            format!("company-location-taxes/{company_id}/tax/{tax_id}/toggle");
        let response = self.send_empty(Method::PATCH, &path).await?;
        let tax = ok_body(response).await?;
        Ok(Mutated::new(
            tax,
            vec![QueryKeyPrefix::CompanyTaxes(*company_id)],
        ))
    }

    pub async fn get_bidding_config(
        &self,
        location_id: &LocationId,
    ) -> Result<responses::BiddingConfig, ClientError> {
        let path = format!("operator/locations/bidding-config/{location_id}");
        let response = self.get(&path, &[]).await?;
        ok_body(response).await
    }

    pub async fn update_bidding_config(
        &self,
        location_id: &LocationId,
        details: &requests::UpdateBiddingConfig,
    ) -> Result<Mutated<responses::BiddingConfig>, ClientError> {
        let path = format!("operator/locations/bidding-config/{location_id}");
        let response = self.send_json(Method::PUT, &path, details).await?;
        let config = ok_body(response).await?;
        Ok(Mutated::new(
            config,
            vec![QueryKeyPrefix::BiddingConfig(*location_id)],
        ))
    }

    pub async fn get_cdw_settings(
        &self,
        location_id: &LocationId,
    ) -> Result<responses::CdwSettings, ClientError> {
        let path = format!("operator/locations/cdw-settings/{location_id}/full");
        let response = self.get(&path, &[]).await?;
        ok_body(response).await
    }

    pub async fn update_cdw_settings(
        &self,
        location_id: &LocationId,
        details: &requests::UpdateCdwSettings,
    ) -> Result<Mutated<responses::CdwSettings>, ClientError> {
        let path = format!("operator/locations/cdw-settings/{location_id}/full");
        let response = self.send_json(Method::PUT, &path, details).await?;
        let settings = ok_body(response).await?;
        Ok(Mutated::new(
            settings,
            vec![QueryKeyPrefix::CdwSettings(*location_id)],
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the request, with the message it sent if any.
    #[error("{}", .1.as_deref().unwrap_or("The server rejected the request."))]
    APIError(StatusCode, Option<String>),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Text to show the operator: the server's own message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::APIError(_, Some(message)) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Pull `message` out of an error body. Validation failures report a list
/// of messages, which are joined.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        serde_json::Value::String(message) => message.trim().to_string(),
        serde_json::Value::Array(messages) => messages
            .iter()
            .filter_map(|m| m.as_str())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!message.is_empty()).then_some(message)
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    tracing::warn!(%status, url = %response.url(), "api request failed");
    match response.text().await {
        Ok(body) => ClientError::APIError(status, extract_error_message(&body)),
        Err(e) => ClientError::Network(e),
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}
