//! Aggregation and chart-shaping for student placement dashboards.
//!
//! Every projection is a pure function of an immutable slice of
//! [`StudentRecord`](dashboard::StudentRecord)s and is rebuilt in full whenever
//! the selected department or roster filter changes.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
