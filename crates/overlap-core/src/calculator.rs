//! Request-level orchestration: entries in, overlap report out.
//!
//! Converts each availability entry to an absolute UTC interval through the
//! injected resolver, then reduces the list with the intersection fold. All
//! values are transient and per-request; there is no shared state.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};
use crate::interval::AbsoluteInterval;
use crate::resolver::TimezoneResolver;

/// One participant's local availability window plus the IANA zone it is
/// expressed in.
///
/// `start_local` / `end_local` are naive wall-clock instants -- ISO-8601
/// datetimes without a UTC offset on the wire -- interpreted relative to
/// `timezone` only after resolution succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub timezone: String,
    pub start_local: NaiveDateTime,
    pub end_local: NaiveDateTime,
}

/// The outcome of an overlap calculation.
///
/// The bound fields are `Some` iff `is_overlap` is true; they serialize as
/// explicit `null`s otherwise, matching the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapReport {
    pub is_overlap: bool,
    pub overlap_start_utc: Option<DateTime<Utc>>,
    pub overlap_end_utc: Option<DateTime<Utc>>,
}

impl OverlapReport {
    fn none() -> Self {
        OverlapReport {
            is_overlap: false,
            overlap_start_utc: None,
            overlap_end_utc: None,
        }
    }

    fn from_interval(interval: AbsoluteInterval) -> Self {
        OverlapReport {
            is_overlap: true,
            overlap_start_utc: Some(interval.start),
            overlap_end_utc: Some(interval.end),
        }
    }
}

/// Compute the common overlap of all supplied availability windows.
///
/// Entries are converted in order; the first unresolvable timezone aborts the
/// whole request with no partial results. The intersection itself is the
/// max-of-starts / min-of-ends fold in [`AbsoluteInterval::intersect_all`];
/// a zero-width intersection reports no overlap.
///
/// # Errors
/// - `OverlapError::InsufficientInput` when fewer than two entries are given.
/// - `OverlapError::InvalidTimezone` naming the first entry whose zone does
///   not resolve, even when other entries are valid.
pub fn calculate_overlap<R: TimezoneResolver>(
    entries: &[AvailabilityEntry],
    resolver: &R,
) -> Result<OverlapReport> {
    if entries.len() < 2 {
        return Err(OverlapError::InsufficientInput);
    }

    let intervals = entries
        .iter()
        .map(|entry| {
            Ok(AbsoluteInterval {
                start: resolver.resolve(&entry.timezone, entry.start_local)?,
                end: resolver.resolve(&entry.timezone, entry.end_local)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(match AbsoluteInterval::intersect_all(&intervals) {
        Some(overlap) => OverlapReport::from_interval(overlap),
        None => OverlapReport::none(),
    })
}
