//! Projection from wire records to display shapes.
//!
//! Stop infos and incidents arrive with fields the dashboard never shows.
//! The conversions here drop them, so everything downstream of the client
//! only sees the trimmed model.

use crate::model::{IncidentItem, StopInfo};

use super::types::{IncidentRecord, StopInfoRecord};

impl From<StopInfoRecord> for StopInfo {
    fn from(record: StopInfoRecord) -> Self {
        StopInfo {
            // The backend calls this field `name`; the UI knows it as the station.
            station: record.name,
            short: record.short,
            long: record.long,
        }
    }
}

impl From<IncidentRecord> for IncidentItem {
    fn from(record: IncidentRecord) -> Self {
        IncidentItem {
            station: record.station,
            line: record.line,
            incident: record.incident,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_info_drops_date_and_renames_name() {
        let record = StopInfoRecord {
            name: "Charlottenplatz".into(),
            short: "CP".into(),
            long: "Charlottenplatz (Stadtmitte)".into(),
            date: "2024-01-01".into(),
        };

        let info = StopInfo::from(record);
        assert_eq!(
            info,
            StopInfo {
                station: "Charlottenplatz".into(),
                short: "CP".into(),
                long: "Charlottenplatz (Stadtmitte)".into(),
            }
        );
    }

    #[test]
    fn incident_drops_train_number_and_date() {
        let record = IncidentRecord {
            station: "A".into(),
            line: "U1".into(),
            train_number: 123,
            incident: "delay".into(),
            date: "2024-01-01".into(),
        };

        let item = IncidentItem::from(record);
        assert_eq!(
            item,
            IncidentItem {
                station: "A".into(),
                line: "U1".into(),
                incident: "delay".into(),
            }
        );
    }
}
