use chrono::{DateTime, Duration, Utc};

use crate::inventory::domain::EndpointRecord;

/// PolicyFilter - Decides which endpoints remain in scope for enrichment
///
/// Two policies compose by logical AND; their order of application does not
/// affect the result set:
/// - Server exclusion: an endpoint is a server iff its OS string contains
///   the case-insensitive substring "server". Excluded unless
///   `include_servers` is set. Endpoints with no OS string are never
///   classified as servers.
/// - Staleness: active only when `max_last_logon_age_days > 0`. Retains an
///   endpoint only if its last-seen timestamp is present and at or after
///   `now - max_last_logon_age_days`.
#[derive(Debug, Clone, Copy)]
pub struct PolicyFilter {
    include_servers: bool,
    max_last_logon_age_days: u32,
}

impl PolicyFilter {
    pub fn new(include_servers: bool, max_last_logon_age_days: u32) -> Self {
        Self {
            include_servers,
            max_last_logon_age_days,
        }
    }

    /// Applies the composed policy, returning only the in-scope endpoints.
    ///
    /// `now` is passed in rather than read from the clock so the staleness
    /// cutoff is deterministic for a given invocation.
    pub fn apply(
        &self,
        endpoints: Vec<EndpointRecord>,
        now: DateTime<Utc>,
    ) -> Vec<EndpointRecord> {
        let cutoff = if self.max_last_logon_age_days > 0 {
            Some(now - Duration::days(i64::from(self.max_last_logon_age_days)))
        } else {
            None
        };

        endpoints
            .into_iter()
            .filter(|e| self.include_servers || !Self::is_server(e))
            .filter(|e| Self::is_fresh(e, cutoff))
            .collect()
    }

    fn is_server(endpoint: &EndpointRecord) -> bool {
        endpoint
            .operating_system()
            .map(|os| os.to_lowercase().contains("server"))
            .unwrap_or(false)
    }

    fn is_fresh(endpoint: &EndpointRecord, cutoff: Option<DateTime<Utc>>) -> bool {
        match cutoff {
            Some(cutoff) => endpoint
                .last_logon()
                .map(|seen| seen >= cutoff)
                .unwrap_or(false),
            None => true,
        }
    }
}
