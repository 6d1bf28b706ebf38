//! Delay API client.
//!
//! This module is the dashboard's only boundary to the backend: a small
//! HTTP-resource client shared by every page loader. All endpoints follow
//! the same shape (build URL, GET, check status, parse a JSON array,
//! optionally project), so each resource contributes only its path, its
//! filter-to-query mapping, and its projection to the display model.

mod client;
mod convert;
mod error;
pub mod mock;
mod query;
pub mod types;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use query::TimeFilter;
