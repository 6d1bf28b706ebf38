//! Loader for the station delays page.

use crate::api::{ApiClient, ApiError, TimeFilter};
use crate::model::StationDelay;

/// Data for the station delays page.
#[derive(Debug, Clone)]
pub struct StationDelaysPage {
    pub delays: Vec<StationDelay>,
}

/// Load average delays per station, optionally filtered to a date or timeframe.
pub async fn load(client: &ApiClient, filter: &TimeFilter) -> Result<StationDelaysPage, ApiError> {
    let delays = client.station_delays(filter).await?;
    Ok(StationDelaysPage { delays })
}

/// Load the prime subset of station delays.
pub async fn load_prime(client: &ApiClient) -> Result<StationDelaysPage, ApiError> {
    let delays = client.prime_station_delays().await?;
    Ok(StationDelaysPage { delays })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use crate::store::DashboardStore;
    use crate::testutil::serve;

    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn loaded_page_can_be_published_at_the_call_site() {
        let app = Router::new().route(
            "/stations",
            get(|| async {
                Json(json!([{ "name": "Hauptbahnhof", "line": "U1", "avg_delay": 2.0 }]))
            }),
        );
        let base_url = serve(app).await;
        let client = ApiClient::new(ApiConfig::new(&base_url)).unwrap();
        let store = DashboardStore::new();

        // The loader only returns data; sharing it is the caller's call.
        let page = load(&client, &TimeFilter::All).await.unwrap();
        store.station_delays.publish(page.delays.clone());

        assert_eq!(store.station_delays.latest(), page.delays);
    }
}
