//! Absolute intervals and the max/min intersection fold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC-normalized time interval, produced 1:1 from an availability entry
/// after zone conversion.
///
/// `start < end` is deliberately NOT enforced here: a malformed entry still
/// participates in the intersection fold, where it simply can never contribute
/// a positive-width overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsoluteInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AbsoluteInterval {
    /// Intersect a sequence of intervals.
    ///
    /// Left-to-right fold: `start = max(start, next.start)`,
    /// `end = min(end, next.end)`. Pairwise max/min is associative and
    /// commutative, so any reduction order gives the same result.
    ///
    /// Returns `Some` only for a strictly positive-width intersection --
    /// `start == end` counts as no overlap. Returns `None` for an empty input.
    pub fn intersect_all(intervals: &[AbsoluteInterval]) -> Option<AbsoluteInterval> {
        let (first, rest) = intervals.split_first()?;

        let merged = rest.iter().fold(*first, |acc, next| AbsoluteInterval {
            start: acc.start.max(next.start),
            end: acc.end.min(next.end),
        });

        (merged.start < merged.end).then_some(merged)
    }
}
