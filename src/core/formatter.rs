use crate::core::mac::normalize_mac;
use crate::domain::model::{BindingRecord, VlanMapping};
use crate::utils::error::{ConvertError, Result};

/// Column header row expected by the bulk MAC import.
pub const CSV_HEADERS: [&str; 11] = [
    "MAC Address (Required)",
    "Segment (Required for allow state)",
    "Lock to Port (Optional)",
    "Site (Optional)",
    "Building (Optional)",
    "Floor (Optional)",
    "Allow or Deny (Required)",
    "Description (Optional)",
    "Static IP (Optional)",
    "IP Address (Optional)",
    "Passive IP (Optional)",
];

const ALLOW: &str = "Allow";
const NO: &str = "No";

/// Renders records as import CSV, one row per record in input order.
pub fn format_csv(records: &[BindingRecord], vlan_to_segment: &VlanMapping) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;

    for record in records {
        let mac = normalize_mac(&record.mac);
        let segment = vlan_to_segment.segment_for(record.vlan).unwrap_or("");

        writer.write_record([
            mac.as_str(),
            segment,
            "", // Lock to Port
            "", // Site
            "", // Building
            "", // Floor
            ALLOW,
            "", // Description
            NO, // Static IP
            "", // IP Address
            NO, // Passive IP
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(ConvertError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_LINE: &str = "MAC Address (Required),Segment (Required for allow state),Lock to Port (Optional),Site (Optional),Building (Optional),Floor (Optional),Allow or Deny (Required),Description (Optional),Static IP (Optional),IP Address (Optional),Passive IP (Optional)";

    fn record(vlan: u64, mac: &str) -> BindingRecord {
        BindingRecord {
            vlan,
            mac: mac.to_string(),
            port: "Gi1/0/1".to_string(),
        }
    }

    #[test]
    fn test_empty_records_yield_header_only() {
        let csv = format_csv(&[], &VlanMapping::new()).unwrap();
        assert_eq!(csv, format!("{}\r\n", HEADER_LINE));
    }

    #[test]
    fn test_mapped_and_unmapped_rows() {
        let mapping: VlanMapping = [("1", "Wired Production")].into_iter().collect();
        let records = vec![record(1, "001e.0b41.7afd"), record(5, "aa:bb:cc:dd:ee:ff")];

        let csv = format_csv(&records, &mapping).unwrap();
        let lines: Vec<&str> = csv.split("\r\n").collect();

        assert_eq!(lines.len(), 4); // header + 2 rows + trailing terminator
        assert_eq!(lines[0], HEADER_LINE);
        assert_eq!(lines[1], "00:1e:0b:41:7a:fd,Wired Production,,,,,Allow,,No,,No");
        assert_eq!(lines[2], "aa:bb:cc:dd:ee:ff,,,,,,Allow,,No,,No");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_rows_keep_input_order_and_duplicates() {
        let records = vec![
            record(2, "0000.0000.0002"),
            record(1, "0000.0000.0001"),
            record(2, "0000.0000.0002"),
        ];
        let csv = format_csv(&records, &VlanMapping::new()).unwrap();
        let macs: Vec<&str> = csv
            .split("\r\n")
            .skip(1)
            .filter(|l| !l.is_empty())
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(macs, vec!["00:00:00:00:00:02", "00:00:00:00:00:01", "00:00:00:00:00:02"]);
    }

    #[test]
    fn test_segment_names_are_quoted_when_needed() {
        let mapping: VlanMapping = [("3", "Lab, \"North\" wing")].into_iter().collect();
        let csv = format_csv(&[record(3, "001e.0b41.7afd")], &mapping).unwrap();
        let row = csv.split("\r\n").nth(1).unwrap();
        assert_eq!(row, "00:1e:0b:41:7a:fd,\"Lab, \"\"North\"\" wing\",,,,,Allow,,No,,No");
    }
}
