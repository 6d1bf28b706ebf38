//! Mock delay API client for development without a live backend.
//!
//! Loads fixture JSON from a directory and serves it through the same
//! method surface as the real client. Expects files named after the
//! resources: `lines.json`, `stations.json`, `infos.json`, `incidents.json`
//! (each an array in the backend's wire format; any subset may be present).

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::model::{IncidentItem, LineDelay, StationDelay, StopInfo};

use super::error::ApiError;
use super::query::{Resource, TimeFilter};
use super::types::{IncidentRecord, StopInfoRecord};

#[derive(Debug, Default, Clone)]
struct MockData {
    lines: Option<Vec<LineDelay>>,
    stations: Option<Vec<StationDelay>>,
    infos: Option<Vec<StopInfoRecord>>,
    incidents: Option<Vec<IncidentRecord>>,
}

/// Mock client that serves fixture data from JSON files.
#[derive(Clone)]
pub struct MockApiClient {
    data: Arc<RwLock<MockData>>,
}

impl MockApiClient {
    /// Create a new mock client from a fixture directory.
    ///
    /// Fails if none of the fixture files exist there.
    pub fn new(fixture_dir: impl AsRef<Path>) -> Result<Self, ApiError> {
        let data = load_dir(fixture_dir.as_ref())?;
        Ok(Self {
            data: Arc::new(RwLock::new(data)),
        })
    }

    /// Average delay per line.
    ///
    /// Mimics `ApiClient::line_delays`. Time filters are ignored, the
    /// fixture data is static.
    pub async fn line_delays(&self, _filter: &TimeFilter) -> Result<Vec<LineDelay>, ApiError> {
        self.rows(Resource::Lines, |data| data.lines.clone()).await
    }

    /// Mimics `ApiClient::prime_line_delays`; serves the same fixture rows.
    pub async fn prime_line_delays(&self) -> Result<Vec<LineDelay>, ApiError> {
        self.rows(Resource::Lines, |data| data.lines.clone()).await
    }

    /// Mimics `ApiClient::station_delays`.
    pub async fn station_delays(
        &self,
        _filter: &TimeFilter,
    ) -> Result<Vec<StationDelay>, ApiError> {
        self.rows(Resource::Stations, |data| data.stations.clone())
            .await
    }

    /// Mimics `ApiClient::prime_station_delays`.
    pub async fn prime_station_delays(&self) -> Result<Vec<StationDelay>, ApiError> {
        self.rows(Resource::Stations, |data| data.stations.clone())
            .await
    }

    /// Mimics `ApiClient::stop_infos`, projection included.
    pub async fn stop_infos(&self, filter: &TimeFilter) -> Result<Vec<StopInfo>, ApiError> {
        let records = self.stop_info_records(filter).await?;
        Ok(records.into_iter().map(StopInfo::from).collect())
    }

    /// Mimics `ApiClient::stop_info_records`.
    pub async fn stop_info_records(
        &self,
        _filter: &TimeFilter,
    ) -> Result<Vec<StopInfoRecord>, ApiError> {
        self.rows(Resource::Infos, |data| data.infos.clone()).await
    }

    /// Mimics `ApiClient::incidents`, projection included.
    pub async fn incidents(
        &self,
        date: NaiveDate,
        line: &str,
    ) -> Result<Vec<IncidentItem>, ApiError> {
        let records = self.incident_records(date, line).await?;
        Ok(records.into_iter().map(IncidentItem::from).collect())
    }

    /// Mimics `ApiClient::incident_records`.
    ///
    /// The line parameter is honoured so fixture files can hold incidents
    /// for several lines; the date is ignored like the other time filters.
    pub async fn incident_records(
        &self,
        _date: NaiveDate,
        line: &str,
    ) -> Result<Vec<IncidentRecord>, ApiError> {
        let rows = self
            .rows(Resource::Incidents, |data| data.incidents.clone())
            .await?;
        Ok(rows.into_iter().filter(|r| r.line == line).collect())
    }

    /// Reload fixture data from disk (useful during development).
    pub async fn reload(&self, fixture_dir: impl AsRef<Path>) -> Result<(), ApiError> {
        let new_data = load_dir(fixture_dir.as_ref())?;
        let mut data = self.data.write().await;
        *data = new_data;
        Ok(())
    }

    async fn rows<T>(
        &self,
        resource: Resource,
        select: impl FnOnce(&MockData) -> Option<Vec<T>>,
    ) -> Result<Vec<T>, ApiError> {
        let data = self.data.read().await;
        select(&data).ok_or_else(|| ApiError::Api {
            resource: resource.name(),
            status: 0,
            message: format!("no mock fixture loaded for {}", resource.path()),
        })
    }
}

fn load_dir(dir: &Path) -> Result<MockData, ApiError> {
    let data = MockData {
        lines: load_fixture(dir, "lines.json")?,
        stations: load_fixture(dir, "stations.json")?,
        infos: load_fixture(dir, "infos.json")?,
        incidents: load_fixture(dir, "incidents.json")?,
    };

    if data.lines.is_none()
        && data.stations.is_none()
        && data.infos.is_none()
        && data.incidents.is_none()
    {
        return Err(ApiError::Api {
            resource: "mock fixtures",
            status: 0,
            message: format!("no fixture files found in {dir:?}"),
        });
    }

    Ok(data)
}

fn load_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<T>, ApiError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }

    let json = std::fs::read_to_string(&path).map_err(|e| ApiError::Api {
        resource: "mock fixtures",
        status: 0,
        message: format!("failed to read {path:?}: {e}"),
    })?;

    serde_json::from_str(&json).map(Some).map_err(|e| ApiError::Json {
        resource: "mock fixtures",
        message: format!("{}: {e}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join("lines.json"),
            r#"[{ "line": "U1", "avg_delay": 1.5 }]"#,
        )
        .unwrap();
        fs::write(
            dir.join("incidents.json"),
            r#"[
                { "station": "A", "line": "U1", "train_number": 1, "incident": "delay", "date": "2024-01-01" },
                { "station": "B", "line": "S1", "train_number": 2, "incident": "cancelled", "date": "2024-01-01" }
            ]"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn serves_fixture_rows() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let client = MockApiClient::new(dir.path()).unwrap();
        let delays = client.line_delays(&TimeFilter::All).await.unwrap();
        assert_eq!(delays.len(), 1);
        assert_eq!(delays[0].line, "U1");
    }

    #[tokio::test]
    async fn incidents_filtered_by_line() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let client = MockApiClient::new(dir.path()).unwrap();
        let incidents = client.incidents(date(2024, 1, 1), "S1").await.unwrap();
        assert_eq!(
            incidents,
            vec![IncidentItem {
                station: "B".into(),
                line: "S1".into(),
                incident: "cancelled".into(),
            }]
        );
    }

    #[tokio::test]
    async fn missing_fixture_is_an_error_at_call_time() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let client = MockApiClient::new(dir.path()).unwrap();
        let result = client.station_delays(&TimeFilter::All).await;
        assert!(result.is_err());
    }

    #[test]
    fn empty_fixture_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockApiClient::new(dir.path()).is_err());
    }

    #[tokio::test]
    async fn reload_replaces_data() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let client = MockApiClient::new(dir.path()).unwrap();

        fs::write(
            dir.path().join("lines.json"),
            r#"[{ "line": "U6", "avg_delay": 4.0 }, { "line": "U7", "avg_delay": 0.5 }]"#,
        )
        .unwrap();
        client.reload(dir.path()).await.unwrap();

        let delays = client.line_delays(&TimeFilter::All).await.unwrap();
        assert_eq!(delays.len(), 2);
        assert_eq!(delays[0].line, "U6");
    }
}
