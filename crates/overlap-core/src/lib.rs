//! # overlap-core
//!
//! Timezone-aware availability overlap calculation.
//!
//! Given N participants' local availability windows, each tagged with an IANA
//! timezone name, the calculator normalizes every window to UTC and reduces
//! the list to its common intersection (max of starts, min of ends), reporting
//! whether a positive-width overlap exists and, if so, its bounds.
//!
//! ## Quick start
//!
//! ```rust
//! use overlap_core::{calculate_overlap, AvailabilityEntry, IanaResolver};
//!
//! let entries = vec![
//!     AvailabilityEntry {
//!         timezone: "America/New_York".to_string(),
//!         start_local: "2026-03-16T09:00:00".parse().unwrap(),
//!         end_local: "2026-03-16T12:00:00".parse().unwrap(),
//!     },
//!     AvailabilityEntry {
//!         timezone: "Europe/London".to_string(),
//!         start_local: "2026-03-16T15:00:00".parse().unwrap(),
//!         end_local: "2026-03-16T18:00:00".parse().unwrap(),
//!     },
//! ];
//!
//! let report = calculate_overlap(&entries, &IanaResolver).unwrap();
//! assert!(report.is_overlap);
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] — entries in, overlap report out
//! - [`interval`] — UTC intervals and the intersection fold
//! - [`resolver`] — naive local wall-clock time → UTC, behind a trait
//! - [`api`] — the contract the external HTTP layer consumes
//! - [`error`] — error types

pub mod api;
pub mod calculator;
pub mod error;
pub mod interval;
pub mod resolver;

pub use api::ServiceConfig;
pub use calculator::{calculate_overlap, AvailabilityEntry, OverlapReport};
pub use error::OverlapError;
pub use interval::AbsoluteInterval;
pub use resolver::{IanaResolver, TimezoneResolver};
