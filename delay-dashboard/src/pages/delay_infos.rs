//! Loader for the incident list page.

use chrono::NaiveDate;

use crate::api::{ApiClient, ApiError};
use crate::model::IncidentItem;

/// Data for the incident list page.
#[derive(Debug, Clone)]
pub struct DelayInfosPage {
    pub incidents: Vec<IncidentItem>,
}

/// Load the incidents reported for one line on one date.
///
/// Both parameters are required by the backend; records are trimmed to the
/// display shape before they reach the page.
pub async fn load(
    client: &ApiClient,
    date: NaiveDate,
    line: &str,
) -> Result<DelayInfosPage, ApiError> {
    let incidents = client.incidents(date, line).await?;
    Ok(DelayInfosPage { incidents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use crate::testutil::serve;

    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn page_sees_only_trimmed_records() {
        let app = Router::new().route(
            "/incidents",
            get(|| async {
                Json(json!([{
                    "station": "A",
                    "line": "U1",
                    "train_number": 123,
                    "incident": "delay",
                    "date": "2024-01-01",
                }]))
            }),
        );
        let base_url = serve(app).await;
        let client = ApiClient::new(ApiConfig::new(&base_url)).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let page = load(&client, date, "U1").await.unwrap();
        assert_eq!(
            page.incidents,
            vec![IncidentItem {
                station: "A".into(),
                line: "U1".into(),
                incident: "delay".into(),
            }]
        );
    }
}
