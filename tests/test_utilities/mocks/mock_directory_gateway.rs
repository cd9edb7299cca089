use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use bitlocker_inventory::prelude::*;

/// Mock DirectoryGateway for testing
///
/// Configured with a fixed endpoint set, per-DN escrow children, and an
/// optional set of DNs whose child query fails.
pub struct MockDirectoryGateway {
    endpoints: Vec<EndpointRecord>,
    children: HashMap<String, Vec<RecoveryEscrowObject>>,
    failing_dns: HashSet<String>,
    fail_enumeration: bool,
}

impl MockDirectoryGateway {
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
            children: HashMap::new(),
            failing_dns: HashSet::new(),
            fail_enumeration: false,
        }
    }

    pub fn with_endpoint(
        mut self,
        name: &str,
        dn: &str,
        os: Option<&str>,
        last_logon: Option<DateTime<Utc>>,
    ) -> Self {
        self.endpoints.push(EndpointRecord::new(
            dn.to_string(),
            name.to_string(),
            os.map(String::from),
            last_logon,
        ));
        self
    }

    pub fn with_escrow_children(mut self, dn: &str, created: &[DateTime<Utc>]) -> Self {
        let children = created
            .iter()
            .map(|ts| RecoveryEscrowObject::new(dn.to_string(), *ts))
            .collect();
        self.children.insert(dn.to_string(), children);
        self
    }

    pub fn with_failing_children_query(mut self, dn: &str) -> Self {
        self.failing_dns.insert(dn.to_string());
        self
    }

    pub fn with_enumeration_failure() -> Self {
        Self {
            fail_enumeration: true,
            ..Self::new()
        }
    }
}

impl Default for MockDirectoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryGateway for MockDirectoryGateway {
    async fn list_endpoints(&self, _scope: Option<&str>) -> Result<Vec<EndpointRecord>> {
        if self.fail_enumeration {
            anyhow::bail!("Mock directory enumeration failure");
        }
        Ok(self.endpoints.clone())
    }

    async fn list_escrow_children(&self, endpoint_dn: &str) -> Result<Vec<RecoveryEscrowObject>> {
        if self.failing_dns.contains(endpoint_dn) {
            anyhow::bail!("Mock escrow query failure for {}", endpoint_dn);
        }
        Ok(self.children.get(endpoint_dn).cloned().unwrap_or_default())
    }
}
