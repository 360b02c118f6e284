//! Thin client for the third-party flight and hotel search API.
//!
//! Responses are relayed untouched; only transport failures and non-2xx
//! statuses are turned into errors.

use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const DEFAULT_CURRENCY: &str = "INR";
const DEFAULT_ADULTS: u32 = 2;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("API key is required")]
    MissingApiKey,
    #[error("search API is unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("search API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("search API returned an unreadable body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FlightSearchParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "return")]
    pub return_date: Option<String>,
    pub currency: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchParams {
    pub destination: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub adults: Option<u32>,
    pub currency: Option<String>,
    pub key: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl FlightSearchParams {
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, UpstreamError> {
        let key = present(&self.key).ok_or(UpstreamError::MissingApiKey)?;

        let mut query = vec![
            ("engine", "google_flights".to_string()),
            ("departure_id", present(&self.origin).unwrap_or_default().to_string()),
            ("arrival_id", present(&self.destination).unwrap_or_default().to_string()),
            ("outbound_date", present(&self.date).unwrap_or_default().to_string()),
            ("currency", present(&self.currency).unwrap_or(DEFAULT_CURRENCY).to_string()),
            ("hl", "en".to_string()),
        ];

        match present(&self.return_date) {
            Some(return_date) => {
                query.push(("return_date", return_date.to_string()));
                query.push(("type", "1".to_string()));
            }
            None => query.push(("type", "2".to_string())),
        }

        query.push(("api_key", key.to_string()));
        Ok(query)
    }
}

impl HotelSearchParams {
    pub fn to_query(&self) -> Result<Vec<(&'static str, String)>, UpstreamError> {
        let key = present(&self.key).ok_or(UpstreamError::MissingApiKey)?;

        Ok(vec![
            ("engine", "google_hotels".to_string()),
            ("q", present(&self.destination).unwrap_or_default().to_string()),
            ("check_in_date", present(&self.check_in_date).unwrap_or_default().to_string()),
            ("check_out_date", present(&self.check_out_date).unwrap_or_default().to_string()),
            ("adults", self.adults.unwrap_or(DEFAULT_ADULTS).to_string()),
            ("currency", present(&self.currency).unwrap_or(DEFAULT_CURRENCY).to_string()),
            ("hl", "en".to_string()),
            ("api_key", key.to_string()),
        ])
    }
}

#[derive(Clone)]
pub struct UpstreamClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search_flights(&self, params: &FlightSearchParams) -> Result<Value, UpstreamError> {
        let query = params.to_query()?;
        info!(
            "Relaying flight search {} -> {}",
            present(&params.origin).unwrap_or("?"),
            present(&params.destination).unwrap_or("?")
        );
        self.relay(&query).await
    }

    pub async fn search_hotels(&self, params: &HotelSearchParams) -> Result<Value, UpstreamError> {
        let query = params.to_query()?;
        info!(
            "Relaying hotel search in {}",
            present(&params.destination).unwrap_or("?")
        );
        self.relay(&query).await
    }

    async fn relay(&self, query: &[(&'static str, String)]) -> Result<Value, UpstreamError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!("Search API request failed: {}", e);
                UpstreamError::Unreachable(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Upstream request failed")
                    .to_string()
            });
            warn!("Search API returned {}: {}", status, message);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<Value>().await.map_err(UpstreamError::InvalidBody)
    }
}

/// Pull a human readable message out of an upstream error body.
fn error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .or_else(|| json.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string),
        Err(_) if !body.trim().is_empty() => Some(body.trim().to_string()),
        Err(_) => None,
    }
}
