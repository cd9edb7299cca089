use chrono::{DateTime, Utc};

use crate::inventory::domain::InventoryRow;

/// Header line of the exported report.
pub const CSV_HEADER: &str = "ComputerName,OperatingSystem,LastLogonDate,HasRecoveryKeyInAD,RecoveryKeyCountAD,EncryptionDate,DistinguishedName";

/// CsvExporter - Renders the currently visible rows to the report format
///
/// The format is intentionally simple: fields are joined with commas and
/// never quoted. Any literal comma inside a field value is replaced with a
/// semicolon before joining - that substitution is the sole
/// collision-avoidance mechanism, a known limitation rather than true CSV
/// escaping. Timestamps serialize in a sortable `YYYY-MM-DD HH:MM:SS` form;
/// absent timestamps serialize to an empty field.
///
/// Rendering is pure; writing the result to a destination goes through an
/// `OutputPresenter`.
pub struct CsvExporter;

impl CsvExporter {
    /// Renders a header line plus one line per row, each `\n`-terminated.
    pub fn render(rows: &[&InventoryRow]) -> String {
        let mut out = String::with_capacity(64 * (rows.len() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');

        for row in rows {
            let fields = [
                Self::sanitize(row.computer_name()),
                Self::sanitize(row.operating_system()),
                Self::format_timestamp(row.last_logon_date()),
                row.has_recovery_key().to_string(),
                row.recovery_key_count().to_string(),
                Self::format_timestamp(row.encryption_date()),
                Self::sanitize(row.distinguished_name()),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }

    fn sanitize(field: &str) -> String {
        field.replace(',', ";")
    }

    fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
        ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{EndpointRecord, RecoveryEscrowObject};
    use chrono::TimeZone;

    fn row_with_key(name: &str, dn: &str, os: &str) -> InventoryRow {
        let endpoint = EndpointRecord::new(
            dn.to_string(),
            name.to_string(),
            Some(os.to_string()),
            Some(Utc.with_ymd_and_hms(2024, 5, 15, 8, 30, 0).unwrap()),
        );
        let children = vec![RecoveryEscrowObject::new(
            dn.to_string(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        )];
        InventoryRow::from_escrow_objects(&endpoint, &children)
    }

    fn row_without_key(name: &str, dn: &str) -> InventoryRow {
        let endpoint = EndpointRecord::new(dn.to_string(), name.to_string(), None, None);
        InventoryRow::from_escrow_objects(&endpoint, &[])
    }

    #[test]
    fn test_header_line() {
        let output = CsvExporter::render(&[]);
        assert_eq!(
            output,
            "ComputerName,OperatingSystem,LastLogonDate,HasRecoveryKeyInAD,RecoveryKeyCountAD,EncryptionDate,DistinguishedName\n"
        );
    }

    #[test]
    fn test_commas_in_fields_become_semicolons() {
        let endpoint = EndpointRecord::new(
            "CN=WS-001,OU=Site A, Floor 2,DC=contoso,DC=com".to_string(),
            "WS-001".to_string(),
            Some("Windows 11 Pro, 23H2".to_string()),
            None,
        );
        let row = InventoryRow::from_escrow_objects(&endpoint, &[]);

        let output = CsvExporter::render(&[&row]);
        let data_line = output.lines().nth(1).unwrap();

        assert!(data_line.contains("Windows 11 Pro; 23H2"));
        assert!(data_line.contains("CN=WS-001;OU=Site A; Floor 2;DC=contoso;DC=com"));
    }

    #[test]
    fn test_line_and_column_counts_round_trip() {
        let rows = vec![
            row_with_key(
                "WS-001",
                "CN=WS-001,OU=Site A, Floor 2,DC=contoso,DC=com",
                "Windows 11 Pro",
            ),
            row_without_key("WS-002", "CN=WS-002,DC=contoso,DC=com"),
        ];
        let refs: Vec<&InventoryRow> = rows.iter().collect();

        let output = CsvExporter::render(&refs);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), rows.len() + 1);
        for line in &lines {
            assert_eq!(line.split(',').count(), 7);
        }
    }

    #[test]
    fn test_timestamps_serialize_sortably() {
        let row = row_with_key("WS-001", "CN=WS-001,DC=contoso,DC=com", "Windows 11 Pro");

        let output = CsvExporter::render(&[&row]);
        let data_line = output.lines().nth(1).unwrap();
        let fields: Vec<&str> = data_line.split(',').collect();

        assert_eq!(fields[2], "2024-05-15 08:30:00");
        assert_eq!(fields[3], "true");
        assert_eq!(fields[4], "1");
        assert_eq!(fields[5], "2024-01-15 12:00:00");
    }

    #[test]
    fn test_absent_timestamps_serialize_empty() {
        let row = row_without_key("WS-002", "CN=WS-002,DC=contoso,DC=com");

        let output = CsvExporter::render(&[&row]);
        let fields: Vec<&str> = output.lines().nth(1).unwrap().split(',').collect();

        assert_eq!(fields[1], ""); // no operating system recorded
        assert_eq!(fields[2], ""); // never logged on
        assert_eq!(fields[3], "false");
        assert_eq!(fields[4], "0");
        assert_eq!(fields[5], ""); // no escrowed key
    }

    #[test]
    fn test_ends_with_single_newline() {
        let row = row_without_key("WS-002", "CN=WS-002,DC=contoso,DC=com");
        let output = CsvExporter::render(&[&row]);

        assert!(output.ends_with('\n'));
        assert!(!output.ends_with("\n\n"));
    }
}
