use crate::inventory::domain::InventoryReport;

/// InventoryResponse - Internal response DTO from one inventory run
///
/// Owns the completed, immutable report; views and exporters borrow it
/// from here for the remainder of the process.
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    /// The ordered, summarized inventory
    pub report: InventoryReport,
    /// Number of endpoints whose escrow child query failed and were
    /// recorded as zero-escrow
    pub failed_queries: usize,
}

impl InventoryResponse {
    pub fn new(report: InventoryReport, failed_queries: usize) -> Self {
        Self {
            report,
            failed_queries,
        }
    }
}
