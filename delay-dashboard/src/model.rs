//! Display model: the shapes handed to UI routes.
//!
//! These are the records a page actually renders. For the two delay
//! statistics they coincide with the backend's wire format; incidents and
//! stop infos are trimmed projections of fuller backend records (see
//! [`crate::api::types`]), with internal-only fields dropped before they
//! reach a view.

use serde::{Deserialize, Serialize};

/// Mean delay of one transit line over the queried time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDelay {
    pub line: String,
    pub avg_delay: f32,
}

/// Mean delay at one station on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDelay {
    pub name: String,
    pub line: String,
    pub avg_delay: f32,
}

/// Descriptive metadata for a stop.
///
/// Trimmed: the backend record's `date` is dropped, and its `name` field
/// is exposed as `station`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopInfo {
    pub station: String,
    pub short: String,
    pub long: String,
}

/// A reported disruption on a line.
///
/// Trimmed: the backend record's `train_number` and `date` are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentItem {
    pub station: String,
    pub line: String,
    pub incident: String,
}
