//! Test support: a stub delay backend.

use axum::Router;
use tokio::net::TcpListener;

/// Serve the router on an ephemeral local port in the background.
///
/// Returns the base URL to point an [`crate::api::ApiClient`] at. The server
/// task lives until the test process exits.
pub(crate) async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
