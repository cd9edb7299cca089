use crate::inventory::domain::{EndpointRecord, RecoveryEscrowObject};
use crate::shared::Result;
use async_trait::async_trait;

/// DirectoryGateway port for read-only directory queries
///
/// This port abstracts the directory service (Active Directory over LDAP)
/// used to enumerate endpoint objects and their recovery-key escrow
/// children. Implementations are strictly read-only.
///
/// # Async Support
/// Both methods are async so per-endpoint child queries can be dispatched
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Enumerates endpoint (computer) objects.
    ///
    /// # Arguments
    /// * `scope` - Optional distinguished name restricting the search to
    ///   that subtree; `None` queries from the configured base of the
    ///   directory tree
    ///
    /// # Returns
    /// The endpoint records found under the scope. An empty vector is a
    /// successful result, not an error.
    ///
    /// # Errors
    /// Returns an error if the directory query itself fails (connection
    /// lost, search rejected, scope DN does not exist).
    async fn list_endpoints(&self, scope: Option<&str>) -> Result<Vec<EndpointRecord>>;

    /// Lists the recovery-key escrow objects stored beneath one endpoint.
    ///
    /// # Arguments
    /// * `endpoint_dn` - Distinguished name of the endpoint whose children
    ///   are queried
    ///
    /// # Returns
    /// The escrow objects with their creation timestamps. An endpoint with
    /// no escrowed keys yields an empty vector, which is a successful
    /// result distinct from a failed query.
    ///
    /// # Errors
    /// Returns an error if the child query fails for this endpoint
    /// (permission denied, unreachable subtree). Callers decide whether
    /// such a failure is fatal; the inventory pipeline treats it as
    /// zero-escrow for that endpoint only.
    async fn list_escrow_children(&self, endpoint_dn: &str) -> Result<Vec<RecoveryEscrowObject>>;
}
