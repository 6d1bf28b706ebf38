//! Delay API HTTP client.
//!
//! One client covers every resource the dashboard loads. All endpoints share
//! the same shape (build URL, GET, check status, parse a JSON array), so the
//! per-resource methods only supply the path, the filter-to-query mapping and
//! the projection to the display model.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::config::{self, Mode};
use crate::model::{IncidentItem, LineDelay, StationDelay, StopInfo};

use super::error::ApiError;
use super::query::{Resource, TimeFilter, format_date};
use super::types::{IncidentRecord, StopInfoRecord};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the delay API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a new config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Config for the backend belonging to the given runtime mode.
    pub fn for_mode(mode: Mode) -> Self {
        Self::new(config::api_base_url(mode))
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the delay statistics backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Average delay per line, optionally filtered to a date or timeframe.
    pub async fn line_delays(&self, filter: &TimeFilter) -> Result<Vec<LineDelay>, ApiError> {
        self.fetch_rows(Resource::Lines, filter.path_suffix(), &filter.query())
            .await
    }

    /// The prime subset of line delays (the backend's curated headline set).
    pub async fn prime_line_delays(&self) -> Result<Vec<LineDelay>, ApiError> {
        self.fetch_rows(Resource::Lines, "/prime", &[]).await
    }

    /// Average delay per station, optionally filtered to a date or timeframe.
    pub async fn station_delays(&self, filter: &TimeFilter) -> Result<Vec<StationDelay>, ApiError> {
        self.fetch_rows(Resource::Stations, filter.path_suffix(), &filter.query())
            .await
    }

    /// The prime subset of station delays.
    pub async fn prime_station_delays(&self) -> Result<Vec<StationDelay>, ApiError> {
        self.fetch_rows(Resource::Stations, "/prime", &[]).await
    }

    /// Stop metadata, trimmed to the display shape.
    pub async fn stop_infos(&self, filter: &TimeFilter) -> Result<Vec<StopInfo>, ApiError> {
        let records = self.stop_info_records(filter).await?;
        Ok(records.into_iter().map(StopInfo::from).collect())
    }

    /// Stop metadata as the backend serves it, including the record date.
    pub async fn stop_info_records(
        &self,
        filter: &TimeFilter,
    ) -> Result<Vec<StopInfoRecord>, ApiError> {
        self.fetch_rows(Resource::Infos, filter.path_suffix(), &filter.query())
            .await
    }

    /// Incidents for one line on one date, trimmed to the display shape.
    pub async fn incidents(
        &self,
        date: NaiveDate,
        line: &str,
    ) -> Result<Vec<IncidentItem>, ApiError> {
        let records = self.incident_records(date, line).await?;
        Ok(records.into_iter().map(IncidentItem::from).collect())
    }

    /// Incidents as the backend serves them, including train number and date.
    pub async fn incident_records(
        &self,
        date: NaiveDate,
        line: &str,
    ) -> Result<Vec<IncidentRecord>, ApiError> {
        let query = [("date", format_date(date)), ("line", line.to_string())];
        self.fetch_rows(Resource::Incidents, "", &query).await
    }

    /// Build the GET request for a resource endpoint.
    ///
    /// Query values are encoded by reqwest's serializer, so every parameter
    /// is percent-encoded the same way regardless of which loader built it.
    fn get(
        &self,
        resource: Resource,
        suffix: &str,
        query: &[(&'static str, String)],
    ) -> reqwest::RequestBuilder {
        let url = format!("{}/{}{}", self.base_url, resource.path(), suffix);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        request
    }

    /// Shared fetch core: GET, check status, parse the body as a JSON array.
    ///
    /// A non-success status never reaches the JSON parser; its body is read
    /// as text so the error is legible to a human.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        resource: Resource,
        suffix: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let request = self.get(resource, suffix, query);
        tracing::debug!(resource = resource.name(), "fetching {}", resource.path());

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                resource: resource.name(),
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            resource: resource.name(),
            message: e.to_string(),
        })
    }
}
