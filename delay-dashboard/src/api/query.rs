//! Resource paths and filter-to-query mapping.
//!
//! Every endpoint of the delay API is `GET {base}/{resource}{suffix}?{query}`.
//! This module owns the resource paths and the translation of a time filter
//! into the endpoint suffix and query parameters, so the client itself only
//! has to know how to fetch.

use chrono::NaiveDate;

/// Backend resources exposed by the delay API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resource {
    Lines,
    Stations,
    Infos,
    Incidents,
}

impl Resource {
    /// URL path segment for this resource.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Resource::Lines => "lines",
            Resource::Stations => "stations",
            Resource::Infos => "infos",
            Resource::Incidents => "incidents",
        }
    }

    /// Human-readable name, used in error messages.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Resource::Lines => "line delays",
            Resource::Stations => "station delays",
            Resource::Infos => "stop infos",
            Resource::Incidents => "incidents",
        }
    }
}

/// Time filter applied to a delay or info query.
///
/// Exactly one mode is active per call. The prime variant is not a filter:
/// it is a distinct endpoint with no query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    /// Whole recorded history, no parameters.
    #[default]
    All,
    /// Statistics for a single day.
    Date(NaiveDate),
    /// Statistics for an inclusive `[lower, upper]` date range.
    Timeframe { lower: NaiveDate, upper: NaiveDate },
}

impl TimeFilter {
    /// Endpoint suffix selecting the filtered variant of a resource.
    pub(crate) fn path_suffix(&self) -> &'static str {
        match self {
            TimeFilter::All => "",
            TimeFilter::Date(_) => "/date",
            TimeFilter::Timeframe { .. } => "/timeframe",
        }
    }

    /// Query parameters for this filter.
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            TimeFilter::All => Vec::new(),
            TimeFilter::Date(date) => vec![("date", format_date(*date))],
            TimeFilter::Timeframe { lower, upper } => vec![
                ("lower_limit", format_date(*lower)),
                ("upper_limit", format_date(*upper)),
            ],
        }
    }
}

/// Dates go over the wire as `YYYY-MM-DD`.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
