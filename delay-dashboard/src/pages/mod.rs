//! Page-level loaders, one module per dashboard route.
//!
//! A route entry point calls exactly one loader; the loader performs one
//! API call and returns that page's data. No loader depends on another's
//! output, and none writes the shared store: a caller that wants other
//! views to see the result publishes it explicitly.
//!
//! The module names follow the dashboard's routes: `line_delays`,
//! `station_delays`, `station_infos` (stop metadata), and `delay_infos`
//! (the incident list).

pub mod delay_infos;
pub mod line_delays;
pub mod station_delays;
pub mod station_infos;
mod task;

pub use task::LoadHandle;
