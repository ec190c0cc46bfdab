//! Plain text exports of a generated batch.
//!
//! Rendering is pure: the caller decides how the text is delivered
//! (HTTP attachment, file on disk, ...).  An empty batch renders to
//! `None` so that callers can skip producing an empty file.

use crate::models::SerialNumberData;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

const RULE_WIDTH: usize = 50;

/// Layout of an exported batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One labelled block per record.
    #[default]
    Verbose,
    /// One full serial number per line.
    Simple,
}

/// Renders `records` in the requested layout.
pub fn render(records: &[SerialNumberData], format: ExportFormat) -> Option<String> {
    match format {
        ExportFormat::Verbose => render_report(records),
        ExportFormat::Simple => render_simple(records),
    }
}

pub fn render_report(records: &[SerialNumberData]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut content = String::from("Generated Serial Numbers\n");
    content.push_str(&"=".repeat(RULE_WIDTH));
    content.push_str("\n\n");

    // Writing into a String cannot fail.
    for item in records {
        let _ = writeln!(content, "Order: {}", item.order);
        let _ = writeln!(content, "Serial Number: {}", item.serial_number);
        let _ = writeln!(content, "Digit Verifier: {}", item.digit_verifier);
        let _ = writeln!(content, "Full Number: {}", item.serial_number_with_digit_verifier);
        content.push_str(&"-".repeat(RULE_WIDTH));
        content.push('\n');
    }
    Some(content)
}

pub fn render_simple(records: &[SerialNumberData]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    Some(
        records
            .iter()
            .map(|item| format!("{}\n", item.serial_number_with_digit_verifier))
            .collect(),
    )
}

/// Current UTC time, the clock used for export filenames.
pub fn export_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Suggested download name, e.g. `serial_numbers_2025-01-31_14-05-09.txt`.
pub fn export_filename(timestamp: NaiveDateTime) -> String {
    format!("serial_numbers_{}.txt", timestamp.format("%Y-%m-%d_%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(order: usize, serial: &str, digit: u8) -> SerialNumberData {
        SerialNumberData {
            order,
            serial_number: serial.into(),
            digit_verifier: digit,
            serial_number_with_digit_verifier: format!("{serial}-{digit}"),
            remainder: 0,
            sum: 0,
            calc_numbers: vec![],
        }
    }

    #[test]
    fn test_report_layout() {
        let text = render_report(&[record(1, "100", 4), record(2, "101", 3)]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Generated Serial Numbers");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Order: 1");
        assert_eq!(lines[4], "Serial Number: 100");
        assert_eq!(lines[5], "Digit Verifier: 4");
        assert_eq!(lines[6], "Full Number: 100-4");
        assert_eq!(lines[7], "-".repeat(50));
        assert_eq!(lines[8], "Order: 2");
        assert_eq!(lines.len(), 13);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_simple_listing() {
        let text = render_simple(&[record(1, "A-07", 2), record(2, "A-08", 0)]).unwrap();
        assert_eq!(text, "A-07-2\nA-08-0\n");
    }

    #[test]
    fn test_empty_batch_renders_nothing() {
        assert!(render(&[], ExportFormat::Verbose).is_none());
        assert!(render(&[], ExportFormat::Simple).is_none());
    }

    #[test]
    fn test_format_names() {
        let simple: ExportFormat = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(simple, ExportFormat::Simple);
        assert_eq!(serde_json::to_string(&ExportFormat::Verbose).unwrap(), "\"verbose\"");
        assert!(serde_json::from_str::<ExportFormat>("\"csv\"").is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Verbose);
    }

    #[test]
    fn test_filename() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        assert_eq!(export_filename(ts), "serial_numbers_2025-01-31_14-05-09.txt");
    }

    #[test]
    fn test_timestamp_is_utc() {
        let before = Utc::now().naive_utc();
        let ts = export_timestamp();
        let after = Utc::now().naive_utc();
        assert!(before <= ts && ts <= after);
    }
}
