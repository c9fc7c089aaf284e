//! Availability report parsing and validation.
//!
//! A report has two sections, in order:
//!
//! ```text
//! [Stations]
//! <station_id> <charger_id> [<charger_id> ...]
//! [Charger Availability Reports]
//! <charger_id> <start> <end> <true|false>
//! ```
//!
//! Parsing is all-or-nothing: the first malformed line aborts with a
//! [`ReportError`] and no partial [`Fleet`] is produced.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use thiserror::Error;

use crate::interval::{Interval, Timestamp, unify};
use crate::types::{ChargerId, StationId, Status, ValidationError, parse_unsigned};

/// Header that opens the station declarations.
pub const STATIONS_HEADER: &str = "[Stations]";

/// Header that opens the availability reports.
pub const REPORTS_HEADER: &str = "[Charger Availability Reports]";

/// Errors produced while reading a report. Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The input has no `[Stations]` header at all.
    #[error("missing [Stations] header")]
    MissingStationsHeader,

    /// Something other than `[Stations]` precedes the station declarations.
    #[error("line {line}: expected [Stations], found {content:?}")]
    UnexpectedContent { line: usize, content: String },

    /// The input ends before `[Charger Availability Reports]`.
    #[error("missing [Charger Availability Reports] header")]
    MissingReportsHeader,

    /// A token failed validation.
    #[error("line {line}: {source}")]
    InvalidToken {
        line: usize,
        #[source]
        source: ValidationError,
    },

    /// A station line lacks at least one charger.
    #[error(
        "line {line}: station line needs a station ID and at least one charger ID, got {tokens} token(s)"
    )]
    StationArity { line: usize, tokens: usize },

    /// A report line does not have exactly four tokens.
    #[error("line {line}: report line needs exactly 4 tokens, got {tokens}")]
    ReportArity { line: usize, tokens: usize },

    /// A report references a charger no station declared.
    #[error("line {line}: charger {charger} is not declared under any station")]
    UnknownCharger { line: usize, charger: ChargerId },

    /// A charger is declared more than once.
    #[error("line {line}: charger {charger} already belongs to station {owner}")]
    DuplicateCharger {
        line: usize,
        charger: ChargerId,
        owner: StationId,
    },

    /// A report whose start is after its end.
    #[error("line {line}: report start {start} is after end {end}")]
    InvertedInterval {
        line: usize,
        start: Timestamp,
        end: Timestamp,
    },
}

/// Everything known about one charger after reading its reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charger {
    /// `[min_start, max_end]` over every report, up or down. `None` until the
    /// first report arrives.
    envelope: Option<Interval>,

    /// Raw spans reported as up, in file order.
    up: Vec<Interval>,
}

impl Charger {
    /// Folds one report into the charger.
    pub fn record(&mut self, span: Interval, status: Status) {
        self.envelope = Some(match self.envelope {
            Some(envelope) => envelope.hull(&span),
            None => span,
        });
        if status == Status::Up {
            self.up.push(span);
        }
    }

    /// The charger's coverage: a single envelope of all its reports.
    ///
    /// Gaps between reports count as covered.
    pub const fn coverage(&self) -> Option<Interval> {
        self.envelope
    }

    /// Up spans merged into a disjoint sorted set.
    pub fn merged_up(&self) -> Vec<Interval> {
        unify(&mut self.up.clone())
    }
}

/// Validated in-memory model of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    /// Declared stations and their chargers in declaration order.
    stations: BTreeMap<StationId, Vec<ChargerId>>,

    /// Owning station of each declared charger.
    owners: HashMap<ChargerId, StationId>,

    /// Chargers that received at least one report.
    chargers: HashMap<ChargerId, Charger>,
}

impl Fleet {
    /// Parses and validates a complete report.
    pub fn parse(input: &str) -> Result<Self, ReportError> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim_ascii()))
            .filter(|(_, line)| !line.is_empty());

        match lines.next() {
            Some((_, STATIONS_HEADER)) => {}
            Some((line, content)) => {
                return Err(ReportError::UnexpectedContent {
                    line,
                    content: content.to_string(),
                });
            }
            None => return Err(ReportError::MissingStationsHeader),
        }

        let mut fleet = Self::default();

        let mut found_reports_header = false;
        for (line, content) in lines.by_ref() {
            if content == REPORTS_HEADER {
                found_reports_header = true;
                break;
            }
            fleet.declare_station(line, content)?;
        }
        if !found_reports_header {
            return Err(ReportError::MissingReportsHeader);
        }

        let mut reports = 0usize;
        for (line, content) in lines {
            fleet.record_report(line, content)?;
            reports += 1;
        }

        tracing::debug!(
            stations = fleet.stations.len(),
            chargers = fleet.owners.len(),
            reports,
            "parsed availability report"
        );
        Ok(fleet)
    }

    fn declare_station(&mut self, line: usize, content: &str) -> Result<(), ReportError> {
        let tokens: Vec<&str> = content.split_ascii_whitespace().collect();
        if tokens.len() < 2 {
            return Err(ReportError::StationArity {
                line,
                tokens: tokens.len(),
            });
        }

        let station: StationId = parse_token(line, tokens[0])?;
        let chargers = tokens[1..]
            .iter()
            .map(|token| parse_token::<ChargerId>(line, token))
            .collect::<Result<Vec<_>, _>>()?;

        for &charger in &chargers {
            if let Some(&owner) = self.owners.get(&charger) {
                return Err(ReportError::DuplicateCharger {
                    line,
                    charger,
                    owner,
                });
            }
            self.owners.insert(charger, station);
        }
        self.stations.entry(station).or_default().extend(chargers);
        Ok(())
    }

    fn record_report(&mut self, line: usize, content: &str) -> Result<(), ReportError> {
        let tokens: Vec<&str> = content.split_ascii_whitespace().collect();
        let [charger, start, end, status] = tokens[..] else {
            return Err(ReportError::ReportArity {
                line,
                tokens: tokens.len(),
            });
        };

        let charger: ChargerId = parse_token(line, charger)?;
        let start = parse_unsigned("start time", start)
            .map_err(|source| ReportError::InvalidToken { line, source })?;
        let end = parse_unsigned("end time", end)
            .map_err(|source| ReportError::InvalidToken { line, source })?;
        let status: Status = parse_token(line, status)?;

        if !self.owners.contains_key(&charger) {
            return Err(ReportError::UnknownCharger { line, charger });
        }
        let span =
            Interval::new(start, end).ok_or(ReportError::InvertedInterval { line, start, end })?;

        self.chargers.entry(charger).or_default().record(span, status);
        Ok(())
    }

    /// Declared stations in ascending ID order with their chargers.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &[ChargerId])> {
        self.stations.iter().map(|(id, chargers)| (*id, chargers.as_slice()))
    }

    /// The charger's report data, if it received any report.
    pub fn charger(&self, id: ChargerId) -> Option<&Charger> {
        self.chargers.get(&id)
    }
}

fn parse_token<T>(line: usize, token: &str) -> Result<T, ReportError>
where
    T: FromStr<Err = ValidationError>,
{
    token
        .parse()
        .map_err(|source| ReportError::InvalidToken { line, source })
}
