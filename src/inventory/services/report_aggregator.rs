use crate::inventory::domain::{InventoryReport, InventoryRow, ReportSummary};

/// ReportAggregator - Collects enriched rows into an ordered report
///
/// Pure and deterministic: sorts rows by computer name ascending
/// (case-insensitive, ties broken by distinguished name) and derives the
/// with-key / without-key summary. Runs only after every enrichment result
/// has been collected, so concurrent enrichment order never leaks into the
/// report.
pub struct ReportAggregator;

impl ReportAggregator {
    pub fn aggregate(mut rows: Vec<InventoryRow>) -> InventoryReport {
        rows.sort_by(|a, b| {
            a.computer_name()
                .to_lowercase()
                .cmp(&b.computer_name().to_lowercase())
                .then_with(|| a.distinguished_name().cmp(b.distinguished_name()))
        });

        let with_key = rows.iter().filter(|r| r.has_recovery_key()).count();
        let summary = ReportSummary {
            total: rows.len(),
            with_key,
            without_key: rows.len() - with_key,
        };

        InventoryReport::new(rows, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{EndpointRecord, RecoveryEscrowObject};
    use chrono::{TimeZone, Utc};

    fn row(name: &str, dn: &str, key_count: usize) -> InventoryRow {
        let endpoint = EndpointRecord::new(
            dn.to_string(),
            name.to_string(),
            Some("Windows 11 Pro".to_string()),
            None,
        );
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let children: Vec<RecoveryEscrowObject> = (0..key_count)
            .map(|_| RecoveryEscrowObject::new(dn.to_string(), created))
            .collect();
        InventoryRow::from_escrow_objects(&endpoint, &children)
    }

    #[test]
    fn test_sorts_case_insensitively_with_dn_tie_break() {
        let rows = vec![
            row("b-pc", "CN=b-pc,DC=contoso,DC=com", 0),
            row("A-pc", "CN=A-pc,OU=z,DC=contoso,DC=com", 0),
            row("a-pc", "CN=a-pc,OU=a,DC=contoso,DC=com", 0),
        ];

        let report = ReportAggregator::aggregate(rows);

        let names: Vec<&str> = report.rows().iter().map(|r| r.computer_name()).collect();
        // "A-pc" and "a-pc" tie case-insensitively; the distinguished-name
        // tie-break is byte order, where "CN=A-pc,..." < "CN=a-pc,...".
        assert_eq!(names, vec!["A-pc", "a-pc", "b-pc"]);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let a = vec![
            row("pc", "CN=pc,OU=alpha,DC=contoso,DC=com", 0),
            row("pc", "CN=pc,OU=beta,DC=contoso,DC=com", 0),
        ];
        let b: Vec<InventoryRow> = a.iter().rev().cloned().collect();

        let report_a = ReportAggregator::aggregate(a);
        let report_b = ReportAggregator::aggregate(b);

        let dns_a: Vec<&str> = report_a
            .rows()
            .iter()
            .map(|r| r.distinguished_name())
            .collect();
        let dns_b: Vec<&str> = report_b
            .rows()
            .iter()
            .map(|r| r.distinguished_name())
            .collect();
        assert_eq!(dns_a, dns_b);
        assert_eq!(dns_a[0], "CN=pc,OU=alpha,DC=contoso,DC=com");
    }

    #[test]
    fn test_summary_counts() {
        let rows = vec![
            row("ws-1", "CN=ws-1,DC=contoso,DC=com", 2),
            row("ws-2", "CN=ws-2,DC=contoso,DC=com", 0),
            row("ws-3", "CN=ws-3,DC=contoso,DC=com", 1),
        ];

        let summary = ReportAggregator::aggregate(rows).summary();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.with_key, 2);
        assert_eq!(summary.without_key, 1);
        assert_eq!(summary.total, summary.with_key + summary.without_key);
    }

    #[test]
    fn test_empty_input_yields_valid_empty_report() {
        let report = ReportAggregator::aggregate(vec![]);

        assert!(report.is_empty());
        let summary = report.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.with_key, 0);
        assert_eq!(summary.without_key, 0);
    }
}
