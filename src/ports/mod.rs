/// Ports module defining interfaces for hexagonal architecture
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (directory service, file system,
/// console).
pub mod outbound;
