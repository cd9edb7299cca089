use chrono::{DateTime, Utc};

use crate::inventory::domain::{EndpointRecord, RecoveryEscrowObject};

/// One enriched, policy-filtered endpoint record ready for display/export.
///
/// Immutable once built. Both constructors uphold the invariants
/// `has_recovery_key == (recovery_key_count > 0)` and
/// `encryption_date.is_some() == has_recovery_key`.
///
/// `encryption_date` is a proxy: it is the escrow object's creation time in
/// the directory, not a cryptographic attestation of when the volume was
/// actually encrypted.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    computer_name: String,
    operating_system: String,
    last_logon_date: Option<DateTime<Utc>>,
    has_recovery_key: bool,
    recovery_key_count: usize,
    encryption_date: Option<DateTime<Utc>>,
    distinguished_name: String,
    escrow_query_failed: bool,
}

impl InventoryRow {
    /// Derives a row from an endpoint and its escrow children.
    ///
    /// Count = number of children returned; `encryption_date` = the maximum
    /// creation timestamp among them, absent when there are none. Which
    /// object carried the maximal timestamp is irrelevant, only the instant
    /// matters.
    pub fn from_escrow_objects(
        endpoint: &EndpointRecord,
        children: &[RecoveryEscrowObject],
    ) -> Self {
        let recovery_key_count = children.len();
        let encryption_date = children.iter().map(RecoveryEscrowObject::created).max();

        Self {
            computer_name: endpoint.computer_name().to_string(),
            operating_system: endpoint.operating_system().unwrap_or_default().to_string(),
            last_logon_date: endpoint.last_logon(),
            has_recovery_key: recovery_key_count > 0,
            recovery_key_count,
            encryption_date,
            distinguished_name: endpoint.distinguished_name().to_string(),
            escrow_query_failed: false,
        }
    }

    /// Derives a zero-escrow row for an endpoint whose child query failed.
    ///
    /// A single unreachable or permission-denied subtree must not fail the
    /// whole inventory; the endpoint is recorded as having no escrowed keys
    /// and flagged so the failure stays distinguishable from a genuine
    /// zero-key result.
    pub fn from_failed_query(endpoint: &EndpointRecord) -> Self {
        Self {
            computer_name: endpoint.computer_name().to_string(),
            operating_system: endpoint.operating_system().unwrap_or_default().to_string(),
            last_logon_date: endpoint.last_logon(),
            has_recovery_key: false,
            recovery_key_count: 0,
            encryption_date: None,
            distinguished_name: endpoint.distinguished_name().to_string(),
            escrow_query_failed: true,
        }
    }

    pub fn computer_name(&self) -> &str {
        &self.computer_name
    }

    /// Operating-system string; empty when the directory has none recorded.
    pub fn operating_system(&self) -> &str {
        &self.operating_system
    }

    pub fn last_logon_date(&self) -> Option<DateTime<Utc>> {
        self.last_logon_date
    }

    pub fn has_recovery_key(&self) -> bool {
        self.has_recovery_key
    }

    pub fn recovery_key_count(&self) -> usize {
        self.recovery_key_count
    }

    pub fn encryption_date(&self) -> Option<DateTime<Utc>> {
        self.encryption_date
    }

    /// Stable identity key, unique per row within one report run.
    pub fn distinguished_name(&self) -> &str {
        &self.distinguished_name
    }

    /// True when the escrow child query failed and the row was recorded as
    /// zero-escrow. Not part of the exported CSV format.
    pub fn escrow_query_failed(&self) -> bool {
        self.escrow_query_failed
    }
}
