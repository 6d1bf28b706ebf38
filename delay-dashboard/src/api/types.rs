//! Wire types for the delay API.
//!
//! Full-detail records as the backend serializes them. The delay statistics
//! deserialize directly into the display model; stop infos and incidents
//! carry extra fields that are stripped in [`super::convert`] before the
//! data reaches a view.

use serde::Deserialize;

/// Backend record for one stop's descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopInfoRecord {
    pub name: String,
    pub short: String,
    pub long: String,
    /// Date the record was captured; not shown in the UI.
    pub date: String,
}

/// Backend record for one reported disruption.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncidentRecord {
    pub station: String,
    pub line: String,
    /// Operational train number; not shown in the UI.
    pub train_number: i32,
    pub incident: String,
    /// Date of the disruption; not shown in the UI.
    pub date: String,
}
