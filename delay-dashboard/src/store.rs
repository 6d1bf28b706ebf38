//! Shared feeds of the most recently fetched dashboard data.
//!
//! Some values are shown by more than one view (the incident ticker, the
//! headline delay table), so the latest fetched copy is kept in a small set
//! of watch channels that views can subscribe to. Nothing writes a feed
//! implicitly: a page loader returns its data to the caller, and the caller
//! decides whether to publish it here.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{IncidentItem, LineDelay, StationDelay, StopInfo};

/// A shared feed of the latest fetched value of one resource.
///
/// Cloning the feed clones a handle to the same channel. Subscribers see
/// the value current at subscription time and are notified on publish.
#[derive(Debug, Clone)]
pub struct Feed<T> {
    tx: Arc<watch::Sender<Vec<T>>>,
}

impl<T: Clone> Feed<T> {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self {
            tx: Arc::new(watch::Sender::new(Vec::new())),
        }
    }

    /// Replace the feed's value, notifying all subscribers.
    pub fn publish(&self, items: Vec<T>) {
        self.tx.send_replace(items);
    }

    /// Subscribe to the feed.
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.tx.subscribe()
    }

    /// A copy of the latest published value (empty until first publish).
    pub fn latest(&self) -> Vec<T> {
        self.tx.borrow().clone()
    }
}

impl<T: Clone> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The dashboard's shared feeds, one per displayed resource.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    pub incidents: Feed<IncidentItem>,
    pub line_delays: Feed<LineDelay>,
    pub stop_infos: Feed<StopInfo>,
    pub station_delays: Feed<StationDelay>,
}

impl DashboardStore {
    /// Create a store with all feeds empty.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_starts_empty() {
        let feed: Feed<LineDelay> = Feed::new();
        assert!(feed.latest().is_empty());
    }

    #[tokio::test]
    async fn publish_is_visible_to_subscribers() {
        let store = DashboardStore::new();
        let mut rx = store.line_delays.subscribe();

        store.line_delays.publish(vec![LineDelay {
            line: "U1".into(),
            avg_delay: 1.5,
        }]);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().len(), 1);
        assert_eq!(store.line_delays.latest()[0].line, "U1");
    }

    #[test]
    fn publish_without_subscribers_does_not_fail() {
        let feed: Feed<IncidentItem> = Feed::new();
        feed.publish(vec![IncidentItem {
            station: "A".into(),
            line: "U1".into(),
            incident: "delay".into(),
        }]);
        assert_eq!(feed.latest().len(), 1);
    }

    #[tokio::test]
    async fn clones_share_the_same_channel() {
        let feed: Feed<StopInfo> = Feed::new();
        let handle = feed.clone();

        handle.publish(vec![StopInfo {
            station: "Charlottenplatz".into(),
            short: "CP".into(),
            long: "Charlottenplatz (Stadtmitte)".into(),
        }]);

        assert_eq!(feed.latest().len(), 1);
    }
}
