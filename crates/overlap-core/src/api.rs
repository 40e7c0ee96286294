//! The boundary contract consumed by the HTTP collaborator.
//!
//! The web-framework layer lives outside this repo. What it needs from the
//! core is defined here as plain data: the route payloads (a request is a
//! `Vec<AvailabilityEntry>`, a response is an [`OverlapReport`](crate::OverlapReport)), the startup
//! configuration struct, and the CORS allow-list check. Error-to-status
//! translation lives on [`OverlapError::status_code`](crate::OverlapError::status_code).

use serde::{Deserialize, Serialize};

/// Route path for the overlap calculation endpoint (POST).
pub const CALCULATE_OVERLAP_PATH: &str = "/calculate-overlap";

/// Payload returned by the liveness route (GET /).
pub const LIVENESS_MESSAGE: &str = "Time Zone Scheduler API is running!";

/// Startup configuration handed to the boundary layer's constructor.
///
/// Replaces global middleware state: the CORS origin allow-list is explicit
/// data, owned by whoever builds the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Origins permitted to call the service with credentials. All methods
    /// and headers are allowed from these origins.
    pub allowed_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl ServiceConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        ServiceConfig { allowed_origins }
    }

    /// Exact-match check against the allow-list. Origins not listed are
    /// denied; there is no wildcard.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}
