//! CSV header validation
//!
//! Checks an export file's columns against the dictionary before any row is
//! parsed. A telemetry export does not have to carry every known channel,
//! but a swap-pair field without its partner column can never normalize, so
//! that is an error rather than a warning.

use std::collections::HashSet;
use std::path::Path;

use crate::fields::{FieldDictionary, TransformKind};

/// Outcome of a header check
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when no errors were recorded (warnings allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate CSV headers against the dictionary.
///
/// - swap-pair field present without its partner column: error
/// - dictionary field absent from the file: warning
/// - column unknown to the dictionary: warning (passes through untouched)
pub fn validate_headers(actual: &[String], dict: &FieldDictionary) -> ValidationReport {
    let actual_set: HashSet<&str> = actual.iter().map(String::as_str).collect();
    let mut report = ValidationReport::default();

    for def in &dict.fields {
        if !actual_set.contains(def.name.as_str()) {
            report
                .warnings
                .push(format!("dictionary field '{}' not in file", def.name));
            continue;
        }
        if let TransformKind::SwapPair { partner } = &def.transform {
            if !actual_set.contains(partner.as_str()) {
                report.errors.push(format!(
                    "column '{}' present without its swap partner '{}'",
                    def.name, partner
                ));
            }
        }
    }

    let known: HashSet<&str> = dict.field_names().collect();
    for column in actual {
        if !known.contains(column.as_str()) {
            report.warnings.push(format!(
                "unknown column '{}' (will pass through unchanged)",
                column
            ));
        }
    }

    report
}

/// Validate the header row of a CSV file on disk
pub fn validate_csv_header(
    csv_path: &Path,
    dict: &FieldDictionary,
) -> Result<ValidationReport, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    Ok(validate_headers(&headers, dict))
}
