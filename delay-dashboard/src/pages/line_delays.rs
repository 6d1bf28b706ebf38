//! Loader for the line delays page.

use crate::api::{ApiClient, ApiError, TimeFilter};
use crate::model::LineDelay;

/// Data for the line delays page.
#[derive(Debug, Clone)]
pub struct LineDelaysPage {
    pub delays: Vec<LineDelay>,
}

/// Load average delays per line, optionally filtered to a date or timeframe.
pub async fn load(client: &ApiClient, filter: &TimeFilter) -> Result<LineDelaysPage, ApiError> {
    let delays = client.line_delays(filter).await?;
    Ok(LineDelaysPage { delays })
}

/// Load the prime subset shown on the dashboard's landing page.
pub async fn load_prime(client: &ApiClient) -> Result<LineDelaysPage, ApiError> {
    let delays = client.prime_line_delays().await?;
    Ok(LineDelaysPage { delays })
}
