use chrono::{DateTime, Utc};

/// InventoryRequest - Internal request DTO for one inventory run
///
/// Carries the policy configuration plus the reference instant used for
/// staleness evaluation. `now` is captured once at invocation so the whole
/// run evaluates against the same cutoff.
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Distinguished name restricting endpoint enumeration to a subtree;
    /// `None` scans the entire directory tree
    pub scope: Option<String>,
    /// Whether server operating systems stay in scope
    pub include_servers: bool,
    /// Staleness window in days; 0 disables staleness filtering
    pub max_last_logon_age_days: u32,
    /// Reference instant for the staleness cutoff
    pub now: DateTime<Utc>,
}

impl InventoryRequest {
    pub fn new(
        scope: Option<String>,
        include_servers: bool,
        max_last_logon_age_days: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            scope,
            include_servers,
            max_last_logon_age_days,
            now,
        }
    }
}
