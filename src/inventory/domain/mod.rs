pub mod endpoint;
pub mod inventory_row;
pub mod report;

pub use endpoint::{EndpointRecord, RecoveryEscrowObject};
pub use inventory_row::InventoryRow;
pub use report::{InventoryReport, ReportSummary};
