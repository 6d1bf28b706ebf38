use chrono::Local;
use futures::future::join_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delay_dashboard::api::{ApiClient, ApiConfig, TimeFilter};
use delay_dashboard::config::{self, Mode};
use delay_dashboard::pages;
use delay_dashboard::store::DashboardStore;

/// Lines whose incidents the preview fans out over.
const PREVIEW_LINES: &[&str] = &["U1", "U6", "S1"];

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delay_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mode = Mode::from_env();
    let base_url = config::api_base_url(mode);
    let client = ApiClient::new(ApiConfig::for_mode(mode)).expect("Failed to create API client");
    let store = DashboardStore::new();

    println!("Fetching dashboard data from {base_url} ({mode:?})...");

    let (lines, stations, infos) = tokio::join!(
        pages::line_delays::load_prime(&client),
        pages::station_delays::load(&client, &TimeFilter::All),
        pages::station_infos::load(&client, &TimeFilter::All),
    );

    match lines {
        Ok(page) => {
            println!("Loaded {} prime line delays", page.delays.len());
            store.line_delays.publish(page.delays);
        }
        Err(e) => eprintln!("Line delays unavailable: {e}"),
    }

    match stations {
        Ok(page) => {
            println!("Loaded {} station delays", page.delays.len());
            store.station_delays.publish(page.delays);
        }
        Err(e) => eprintln!("Station delays unavailable: {e}"),
    }

    match infos {
        Ok(page) => {
            println!("Loaded {} stop infos", page.infos.len());
            store.stop_infos.publish(page.infos);
        }
        Err(e) => eprintln!("Stop infos unavailable: {e}"),
    }

    let today = Local::now().date_naive();
    let incident_pages = join_all(
        PREVIEW_LINES
            .iter()
            .map(|line| pages::delay_infos::load(&client, today, line)),
    )
    .await;

    let mut incidents = Vec::new();
    for (line, page) in PREVIEW_LINES.iter().zip(incident_pages) {
        match page {
            Ok(page) => {
                println!("Loaded {} incidents for {line}", page.incidents.len());
                incidents.extend(page.incidents);
            }
            Err(e) => eprintln!("Incidents for {line} unavailable: {e}"),
        }
    }
    store.incidents.publish(incidents);
}
