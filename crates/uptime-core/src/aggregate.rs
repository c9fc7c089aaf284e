//! Per-station uptime aggregation.
//!
//! # Algorithm Summary
//!
//! 1. Each charger contributes one coverage interval (its report envelope)
//!    and its merged up intervals.
//! 2. A station unions its chargers' coverage and up intervals separately.
//! 3. Uptime is `floor(100 * up / coverage)`, or 0 with no coverage.

use crate::interval::{Interval, length, unify};
use crate::report::Fleet;
use crate::types::{ChargerId, StationId};

/// Coverage and up time of one station, as disjoint sorted intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationAggregate {
    pub coverage: Vec<Interval>,
    pub up: Vec<Interval>,
}

impl StationAggregate {
    /// Builds the aggregate for the given chargers of `fleet`.
    ///
    /// Chargers without reports contribute nothing.
    pub fn collect(fleet: &Fleet, chargers: &[ChargerId]) -> Self {
        let mut coverage = Vec::with_capacity(chargers.len());
        let mut up = Vec::new();

        for charger in chargers.iter().filter_map(|&id| fleet.charger(id)) {
            coverage.extend(charger.coverage());
            up.extend(charger.merged_up());
        }

        Self {
            coverage: unify(&mut coverage),
            up: unify(&mut up),
        }
    }

    pub fn coverage_length(&self) -> u64 {
        length(&self.coverage)
    }

    pub fn up_length(&self) -> u64 {
        length(&self.up)
    }

    /// Truncated percentage of coverage during which the station was up.
    pub fn uptime_percent(&self) -> u64 {
        uptime_percent(self.up_length(), self.coverage_length())
    }
}

/// Computed uptime for a single station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationUptime {
    pub station_id: StationId,

    /// Integer percentage in `0..=100`.
    pub uptime_percent: u64,

    /// Total length of the station's unified coverage.
    pub coverage_length: u64,

    /// Total length of the station's unified up time.
    pub up_length: u64,
}

/// `floor(up * 100 / coverage)`, or 0 when `coverage` is 0.
pub fn uptime_percent(up: u64, coverage: u64) -> u64 {
    if coverage == 0 {
        return 0;
    }
    let percent = u128::from(up) * 100 / u128::from(coverage);
    u64::try_from(percent).unwrap_or(u64::MAX)
}

/// Calculates uptime for every declared station, ascending by station ID.
pub fn compute_uptime(fleet: &Fleet) -> Vec<StationUptime> {
    let results: Vec<StationUptime> = fleet
        .stations()
        .map(|(station_id, chargers)| {
            let aggregate = StationAggregate::collect(fleet, chargers);
            let uptime = StationUptime {
                station_id,
                uptime_percent: aggregate.uptime_percent(),
                coverage_length: aggregate.coverage_length(),
                up_length: aggregate.up_length(),
            };
            tracing::trace!(
                station = %station_id,
                coverage = uptime.coverage_length,
                up = uptime.up_length,
                percent = uptime.uptime_percent,
                "aggregated station"
            );
            uptime
        })
        .collect();

    tracing::debug!(stations = results.len(), "computed station uptime");
    results
}
