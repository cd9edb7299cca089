use crate::inventory::domain::{InventoryReport, InventoryRow};

/// DatasetView - Filterable, non-owning view over an inventory report
///
/// Holds a borrowed reference to the immutable report plus the current
/// filter query; the visible set is recomputed on demand from those two, so
/// the view always reflects the latest query with no observable cache
/// staleness. A display layer calls `set_filter` on text change and rereads
/// `visible_rows`.
#[derive(Debug)]
pub struct DatasetView<'a> {
    report: &'a InventoryReport,
    query: String,
}

impl<'a> DatasetView<'a> {
    pub fn new(report: &'a InventoryReport) -> Self {
        Self {
            report,
            query: String::new(),
        }
    }

    /// Replaces the current filter query. Idempotent.
    pub fn set_filter(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    /// Rows visible under the current query, in report order.
    ///
    /// A row is visible iff the query is empty or is a case-insensitive
    /// substring of the computer name, the operating system, or the
    /// distinguished name.
    pub fn visible_rows(&self) -> Vec<&'a InventoryRow> {
        self.report
            .rows()
            .iter()
            .filter(|row| self.matches(row))
            .collect()
    }

    fn matches(&self, row: &InventoryRow) -> bool {
        if self.query.is_empty() {
            return true;
        }
        row.computer_name().to_lowercase().contains(&self.query)
            || row.operating_system().to_lowercase().contains(&self.query)
            || row
                .distinguished_name()
                .to_lowercase()
                .contains(&self.query)
    }
}
