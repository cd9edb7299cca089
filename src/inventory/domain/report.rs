use crate::inventory::domain::InventoryRow;

/// Summary statistics for one inventory report.
///
/// `total == with_key + without_key` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub with_key: usize,
    pub without_key: usize,
}

/// Ordered, immutable result of one inventory run.
///
/// Rows are sorted by computer name ascending (case-insensitive), ties
/// broken by distinguished name. Owned by the process for the remainder of
/// the run; views borrow it, never copy it.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    rows: Vec<InventoryRow>,
    summary: ReportSummary,
}

impl InventoryReport {
    /// Builds a report from already-sorted rows and their summary.
    ///
    /// Use `ReportAggregator::aggregate` instead of calling this directly;
    /// it establishes the ordering this type promises.
    pub(crate) fn new(rows: Vec<InventoryRow>, summary: ReportSummary) -> Self {
        Self { rows, summary }
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn summary(&self) -> ReportSummary {
        self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
