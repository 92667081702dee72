//! Fantasy Premier League data and the expected-points engine
//!
//! - `types`: wire models for `bootstrap-static` and `event/{id}/live`
//! - `http`: API client
//! - `source`: the `DataSource` seam and its cached FPL implementation
//! - `compute`: actual/expected points breakdowns
//! - `report`: season and gameweek reports built on `compute`

pub mod compute;
pub mod http;
pub mod report;
pub mod source;
pub mod types;
