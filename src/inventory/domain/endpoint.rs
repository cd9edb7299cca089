use chrono::{DateTime, Utc};

/// Raw endpoint (computer) record as returned by the directory.
///
/// Ephemeral query result: owned by the enrichment pass and discarded
/// after conversion to an InventoryRow.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRecord {
    distinguished_name: String,
    computer_name: String,
    operating_system: Option<String>,
    last_logon: Option<DateTime<Utc>>,
}

impl EndpointRecord {
    pub fn new(
        distinguished_name: String,
        computer_name: String,
        operating_system: Option<String>,
        last_logon: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            distinguished_name,
            computer_name,
            operating_system,
            last_logon,
        }
    }

    pub fn distinguished_name(&self) -> &str {
        &self.distinguished_name
    }

    pub fn computer_name(&self) -> &str {
        &self.computer_name
    }

    pub fn operating_system(&self) -> Option<&str> {
        self.operating_system.as_deref()
    }

    /// Last-seen timestamp. Absent if the endpoint never logged on.
    pub fn last_logon(&self) -> Option<DateTime<Utc>> {
        self.last_logon
    }
}

/// Raw recovery-key escrow object as returned by the directory.
///
/// One escrow object records one recovery key backup event beneath an
/// endpoint. Zero or more exist per endpoint; the directory returns them
/// unordered.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryEscrowObject {
    parent_dn: String,
    created: DateTime<Utc>,
}

impl RecoveryEscrowObject {
    pub fn new(parent_dn: String, created: DateTime<Utc>) -> Self {
        Self { parent_dn, created }
    }

    pub fn parent_dn(&self) -> &str {
        &self.parent_dn
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}
