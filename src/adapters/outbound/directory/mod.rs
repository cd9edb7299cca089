/// Directory adapters for LDAP/Active Directory access
mod ldap_gateway;
mod timestamps;

pub use ldap_gateway::LdapDirectoryGateway;
