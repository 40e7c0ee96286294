//! Timezone resolution -- naive local wall-clock time to UTC.
//!
//! Resolution is an injected capability so the calculator stays testable with a
//! fake resolver. The production implementation is backed by `chrono-tz`, which
//! compiles the IANA database into the binary; zone-rule maintenance is the
//! host toolchain's concern, not ours.

use crate::error::{OverlapError, Result};
use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves a naive local wall-clock instant, expressed in a named IANA zone,
/// to the corresponding UTC instant.
pub trait TimezoneResolver {
    /// # Errors
    /// Returns `OverlapError::InvalidTimezone` (carrying `identifier` verbatim)
    /// when the identifier is not a recognized IANA zone name.
    fn resolve(&self, identifier: &str, local: NaiveDateTime) -> Result<DateTime<Utc>>;
}

/// Production resolver backed by the `chrono-tz` IANA database.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaResolver;

impl TimezoneResolver for IanaResolver {
    fn resolve(&self, identifier: &str, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        let tz: Tz = identifier
            .parse()
            .map_err(|_| OverlapError::InvalidTimezone(identifier.to_string()))?;

        // The naive instant is interpreted literally as wall-clock time in `tz`.
        // It must never pass through another zone first -- that would be a
        // double conversion.
        let resolved = match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            // Fall-back hour: two valid mappings, take the earlier one.
            LocalResult::Ambiguous(earlier, _later) => earlier,
            // Spring-forward gap: the wall-clock reading does not exist. Probe
            // one hour later (past the gap) and shift back, which interprets
            // the reading with the post-transition offset.
            LocalResult::None => {
                let probe = local + Duration::hours(1);
                match tz.from_local_datetime(&probe).earliest() {
                    Some(dt) => dt - Duration::hours(1),
                    // A double gap does not occur in the IANA database.
                    None => return Err(OverlapError::InvalidTimezone(identifier.to_string())),
                }
            }
        };

        Ok(resolved.with_timezone(&Utc))
    }
}
