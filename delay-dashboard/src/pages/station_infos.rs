//! Loader for the stop metadata page.

use crate::api::{ApiClient, ApiError, TimeFilter};
use crate::model::StopInfo;

/// Data for the stop metadata page.
#[derive(Debug, Clone)]
pub struct StationInfosPage {
    pub infos: Vec<StopInfo>,
}

/// Load stop metadata, optionally filtered to a date or timeframe.
///
/// Records are trimmed to the display shape before they reach the page.
pub async fn load(client: &ApiClient, filter: &TimeFilter) -> Result<StationInfosPage, ApiError> {
    let infos = client.stop_infos(filter).await?;
    Ok(StationInfosPage { infos })
}
