//! Core domain logic for charging station uptime.
//!
//! This crate contains:
//! - Interval engine: merging closed intervals into a canonical disjoint set
//! - Report parsing: validating station declarations and availability reports
//! - Aggregation: per-station coverage, up time and uptime percentage

mod aggregate;
pub mod interval;
pub mod report;
pub mod types;

pub use aggregate::{StationAggregate, StationUptime, compute_uptime, uptime_percent};
pub use interval::{Interval, Timestamp, length, unify};
pub use report::{Charger, Fleet, ReportError};
pub use types::{ChargerId, StationId, Status, ValidationError};
