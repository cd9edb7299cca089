use std::time::Duration;

use async_trait::async_trait;
use ldap3::{Ldap, LdapConnAsync, LdapConnSettings, Scope, SearchEntry};
use tracing::{debug, info, warn};

use crate::adapters::outbound::directory::timestamps;
use crate::config::DirectorySettings;
use crate::inventory::domain::{EndpointRecord, RecoveryEscrowObject};
use crate::ports::outbound::DirectoryGateway;
use crate::shared::error::InventoryError;
use crate::shared::Result;

/// Endpoint enumeration filter: computer objects only.
const ENDPOINT_FILTER: &str = "(&(objectCategory=computer)(objectClass=computer))";

/// Escrow child filter: one object per recovery key backup event.
const ESCROW_FILTER: &str = "(objectClass=msFVE-RecoveryInformation)";

/// Attributes requested for endpoint objects. Kept minimal to bound query
/// cost; the distinguished name always comes back with the entry.
const ENDPOINT_ATTRS: [&str; 3] = ["name", "operatingSystem", "lastLogonTimestamp"];

/// Attributes requested for escrow children.
const ESCROW_ATTRS: [&str; 1] = ["whenCreated"];

/// LdapDirectoryGateway adapter for read-only Active Directory queries
///
/// Implements the DirectoryGateway port over an `ldap3` connection.
/// Construction connects and binds eagerly, so environment errors
/// (unreachable controller, rejected credentials) surface before any
/// inventory query runs. The gateway is scoped to one inventory run.
pub struct LdapDirectoryGateway {
    ldap: Ldap,
    base_dn: String,
    query_timeout: Duration,
}

impl LdapDirectoryGateway {
    /// Connects to the directory and performs a simple bind.
    ///
    /// # Errors
    /// - `InventoryError::DirectoryUnavailable` when the controller cannot
    ///   be reached or the bind fails for a non-credential reason
    /// - `InventoryError::AuthenticationFailed` when the bind is rejected
    ///   with invalid credentials (LDAP rc 49)
    pub async fn connect(settings: &DirectorySettings) -> Result<Self> {
        let url = if settings.use_ssl {
            format!("ldaps://{}:{}", settings.host, settings.port)
        } else {
            format!("ldap://{}:{}", settings.host, settings.port)
        };

        debug!(url = %url, "Connecting to directory");

        let conn_settings = LdapConnSettings::new()
            .set_conn_timeout(Duration::from_secs(settings.query_timeout_secs))
            .set_starttls(settings.use_starttls);

        let (conn, mut ldap) = LdapConnAsync::with_settings(conn_settings, &url)
            .await
            .map_err(|e| InventoryError::DirectoryUnavailable {
                details: format!("failed to connect to {}: {}", url, e),
            })?;

        // Drive the connection in the background for the lifetime of the run
        tokio::spawn(async move {
            if let Err(e) = conn.drive().await {
                warn!(error = %e, "Directory connection driver error");
            }
        });

        debug!(bind_dn = %settings.bind_dn, "Performing simple bind");

        let password = settings.bind_password.as_deref().unwrap_or("");
        let result = ldap
            .simple_bind(&settings.bind_dn, password)
            .await
            .map_err(|e| InventoryError::DirectoryUnavailable {
                details: format!("bind request failed: {}", e),
            })?;

        if result.rc == 49 {
            return Err(InventoryError::AuthenticationFailed {
                bind_dn: settings.bind_dn.clone(),
            }
            .into());
        }
        if result.rc != 0 {
            return Err(InventoryError::DirectoryUnavailable {
                details: format!("bind failed with code {}: {}", result.rc, result.text),
            }
            .into());
        }

        info!(host = %settings.host, "Directory connection established");

        Ok(Self {
            ldap,
            base_dn: settings.base_dn.clone(),
            query_timeout: Duration::from_secs(settings.query_timeout_secs),
        })
    }

    fn entry_to_endpoint(entry: SearchEntry) -> EndpointRecord {
        let computer_name = entry
            .attrs
            .get("name")
            .and_then(|values| values.first())
            .cloned()
            .unwrap_or_else(|| cn_from_dn(&entry.dn));

        let operating_system = entry
            .attrs
            .get("operatingSystem")
            .and_then(|values| values.first())
            .filter(|os| !os.is_empty())
            .cloned();

        let last_logon = entry
            .attrs
            .get("lastLogonTimestamp")
            .and_then(|values| values.first())
            .and_then(|raw| timestamps::parse_filetime(raw));

        EndpointRecord::new(entry.dn, computer_name, operating_system, last_logon)
    }

    fn entry_to_escrow(parent_dn: &str, entry: SearchEntry) -> Option<RecoveryEscrowObject> {
        let created = entry
            .attrs
            .get("whenCreated")
            .and_then(|values| values.first())
            .and_then(|raw| timestamps::parse_generalized_time(raw));

        match created {
            Some(created) => Some(RecoveryEscrowObject::new(parent_dn.to_string(), created)),
            None => {
                // whenCreated is an operational attribute the directory
                // always stamps; a child without one cannot satisfy the row
                // invariant, so it is dropped rather than counted.
                warn!(dn = %entry.dn, "Escrow object without a usable whenCreated, skipping");
                None
            }
        }
    }
}

#[async_trait]
impl DirectoryGateway for LdapDirectoryGateway {
    async fn list_endpoints(&self, scope: Option<&str>) -> Result<Vec<EndpointRecord>> {
        let base = scope.unwrap_or(&self.base_dn);
        let mut ldap = self.ldap.clone();

        debug!(base = %base, filter = ENDPOINT_FILTER, "Searching for endpoint objects");

        let result = ldap
            .with_timeout(self.query_timeout)
            .search(base, Scope::Subtree, ENDPOINT_FILTER, ENDPOINT_ATTRS.to_vec())
            .await
            .map_err(|e| InventoryError::SearchFailed {
                base: base.to_string(),
                details: e.to_string(),
            })?;

        let (entries, _res) = result.success().map_err(|e| InventoryError::SearchFailed {
            base: base.to_string(),
            details: e.to_string(),
        })?;

        let endpoints: Vec<EndpointRecord> = entries
            .into_iter()
            .map(SearchEntry::construct)
            .map(Self::entry_to_endpoint)
            .collect();

        info!(base = %base, count = endpoints.len(), "Endpoint enumeration completed");

        Ok(endpoints)
    }

    async fn list_escrow_children(&self, endpoint_dn: &str) -> Result<Vec<RecoveryEscrowObject>> {
        let mut ldap = self.ldap.clone();

        let result = ldap
            .with_timeout(self.query_timeout)
            .search(
                endpoint_dn,
                Scope::OneLevel,
                ESCROW_FILTER,
                ESCROW_ATTRS.to_vec(),
            )
            .await
            .map_err(|e| InventoryError::SearchFailed {
                base: endpoint_dn.to_string(),
                details: e.to_string(),
            })?;

        let (entries, _res) = result.success().map_err(|e| InventoryError::SearchFailed {
            base: endpoint_dn.to_string(),
            details: e.to_string(),
        })?;

        let children: Vec<RecoveryEscrowObject> = entries
            .into_iter()
            .map(SearchEntry::construct)
            .filter_map(|entry| Self::entry_to_escrow(endpoint_dn, entry))
            .collect();

        debug!(dn = %endpoint_dn, count = children.len(), "Escrow children fetched");

        Ok(children)
    }
}

/// Extracts the leading CN value from a distinguished name, as a fallback
/// when the `name` attribute is missing from an entry.
fn cn_from_dn(dn: &str) -> String {
    dn.split(',')
        .next()
        .and_then(|rdn| rdn.split_once('='))
        .map(|(_, value)| value.to_string())
        .unwrap_or_else(|| dn.to_string())
}
