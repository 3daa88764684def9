//! Tack normalization
//!
//! Rewrites port-tack rows into the canonical starboard-equivalent
//! representation. The whole row is transformed against the input snapshot:
//! swap pairs read their partner from the original row, never from a
//! half-transformed one, so declaration order cannot double-swap.
//!
//! This is a one-way normalization, not a toggle. Feeding an already
//! normalized row back in under a forced port flag is a caller bug the type
//! system cannot catch; batch drivers therefore consume their input.

use serde::Serialize;
use tracing::warn;

use errors::{RowError, RowResult};
use windward_config::{RuleTable, TransformKind};

use crate::row::{TelemetryRow, Value};

/// Normalize one row against a validated rule table.
///
/// Starboard rows come back unchanged. For port rows, each field is rewritten
/// per its rule; fields without a dictionary entry pass through. The tack
/// state and any text-valued identity fields are untouched.
///
/// Errors are scoped to this row: a text value under a numeric rule or a
/// missing swap partner rejects the row without poisoning the table.
pub fn normalize_row(table: &RuleTable, row: &TelemetryRow) -> RowResult<TelemetryRow> {
    if !row.tack.is_port() {
        return Ok(row.clone());
    }

    let mut out = TelemetryRow::new(row.tack);
    for (name, value) in row.iter() {
        let transformed = match table.rule(name) {
            TransformKind::Identity => value.clone(),
            TransformKind::Negate => {
                let v = value
                    .as_f64()
                    .ok_or_else(|| RowError::non_numeric(name))?;
                Value::Float(-v)
            },
            TransformKind::OffsetWrap { offset, modulus } => {
                let v = value
                    .as_f64()
                    .ok_or_else(|| RowError::non_numeric(name))?;
                Value::Float((v + offset).rem_euclid(*modulus))
            },
            TransformKind::SwapPair { partner } => row
                .get(partner)
                .ok_or_else(|| RowError::MissingPartner {
                    field: name.to_string(),
                    partner: partner.clone(),
                })?
                .clone(),
        };
        out.insert(name, transformed);
    }
    Ok(out)
}

// ============================================================================
// Batch processing
// ============================================================================

/// One rejected row in a batch
#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    /// Zero-based position in the input sequence
    pub index: usize,
    /// What went wrong
    pub error: String,
}

/// Caller-facing summary of a batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Rows normalized successfully
    pub normalized: usize,
    /// Rows rejected with an input error
    pub skipped: usize,
    /// Detail for every rejected row
    pub issues: Vec<RowIssue>,
}

impl BatchReport {
    /// Total rows seen
    pub fn total(&self) -> usize {
        self.normalized + self.skipped
    }

    fn reject(&mut self, index: usize, error: &RowError) {
        self.skipped += 1;
        self.issues.push(RowIssue {
            index,
            error: error.to_string(),
        });
    }
}

/// Normalized rows plus the summary
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub rows: Vec<TelemetryRow>,
    pub report: BatchReport,
}

/// Normalize an ordered sequence of rows.
///
/// Items are row-construction results so ingest failures (unparsable
/// records, unresolvable tack) are accounted for in the same report as
/// transform failures. A bad row never halts the batch unless `strict` is
/// set, in which case the first error aborts and nothing is returned.
pub fn normalize_batch<I>(table: &RuleTable, rows: I, strict: bool) -> RowResult<BatchOutcome>
where
    I: IntoIterator<Item = RowResult<TelemetryRow>>,
{
    let mut outcome = BatchOutcome {
        rows: Vec::new(),
        report: BatchReport::default(),
    };

    for (index, item) in rows.into_iter().enumerate() {
        let result = item.and_then(|row| normalize_row(table, &row));
        match result {
            Ok(row) => {
                outcome.report.normalized += 1;
                outcome.rows.push(row);
            },
            Err(err) if strict => return Err(err),
            Err(err) => {
                warn!("row {} rejected: {}", index, err);
                outcome.report.reject(index, &err);
            },
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::row::Tack;
    use windward_config::{FieldDef, FieldDictionary};

    fn test_table() -> RuleTable {
        let dict = FieldDictionary {
            version: 1,
            fields: vec![
                FieldDef::new("BOAT_SPEED_km_h_1", "km_h_1", TransformKind::Identity),
                FieldDef::new("TWA_SGP_deg", "deg", TransformKind::Negate),
                FieldDef::new(
                    "HEADING_deg",
                    "deg",
                    TransformKind::OffsetWrap {
                        offset: 180.0,
                        modulus: 360.0,
                    },
                ),
                FieldDef::new(
                    "LENGTH_RH_P_mm",
                    "mm",
                    TransformKind::SwapPair {
                        partner: "LENGTH_RH_S_mm".to_string(),
                    },
                ),
                FieldDef::new(
                    "LENGTH_RH_S_mm",
                    "mm",
                    TransformKind::SwapPair {
                        partner: "LENGTH_RH_P_mm".to_string(),
                    },
                ),
            ],
        };
        RuleTable::from_dictionary(&dict).unwrap()
    }

    fn port_row() -> TelemetryRow {
        let mut row = TelemetryRow::new(Tack::Port);
        row.insert("BOAT_SPEED_km_h_1", 72.4);
        row.insert("TWA_SGP_deg", -45.0);
        row.insert("HEADING_deg", 10.0);
        row.insert("LENGTH_RH_P_mm", 120.0);
        row.insert("LENGTH_RH_S_mm", 200.0);
        row
    }

    #[test]
    fn test_starboard_row_is_untouched() {
        let table = test_table();
        let mut row = port_row();
        row.tack = Tack::Starboard;

        let out = normalize_row(&table, &row).unwrap();
        assert_eq!(out, row);

        // And again: starboard normalization is the identity function
        let again = normalize_row(&table, &out).unwrap();
        assert_eq!(again, row);
    }

    #[test]
    fn test_port_row_transforms() {
        let table = test_table();
        let out = normalize_row(&table, &port_row()).unwrap();

        assert_eq!(out.get_f64("BOAT_SPEED_km_h_1"), Some(72.4));
        assert_eq!(out.get_f64("TWA_SGP_deg"), Some(45.0));
        assert_eq!(out.get_f64("HEADING_deg"), Some(190.0));
        assert_eq!(out.get_f64("LENGTH_RH_P_mm"), Some(200.0));
        assert_eq!(out.get_f64("LENGTH_RH_S_mm"), Some(120.0));
        assert_eq!(out.tack, Tack::Port);
    }

    #[test]
    fn test_offset_wrap_stays_in_range() {
        let table = test_table();
        let mut row = TelemetryRow::new(Tack::Port);
        row.insert("HEADING_deg", 270.0);
        let out = normalize_row(&table, &row).unwrap();
        assert_eq!(out.get_f64("HEADING_deg"), Some(90.0));

        // Negative headings still land in [0, 360)
        row.insert("HEADING_deg", -10.0);
        let out = normalize_row(&table, &row).unwrap();
        assert_eq!(out.get_f64("HEADING_deg"), Some(170.0));
    }

    #[test]
    fn test_negate_is_an_involution() {
        let table = test_table();
        let out = normalize_row(&table, &port_row()).unwrap();
        let twa = out.get_f64("TWA_SGP_deg").unwrap();
        assert_eq!(-(-twa), twa);
        assert_eq!(-twa, -45.0);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let table = test_table();
        let mut row = TelemetryRow::new(Tack::Port);
        row.insert("CUSTOM_SENSOR", 17.0);
        row.insert("BOAT", "AUS");
        let out = normalize_row(&table, &row).unwrap();
        assert_eq!(out.get_f64("CUSTOM_SENSOR"), Some(17.0));
        assert_eq!(out.get("BOAT"), row.get("BOAT"));
    }

    #[test]
    fn test_text_under_numeric_rule_rejects_row() {
        let table = test_table();
        let mut row = TelemetryRow::new(Tack::Port);
        row.insert("TWA_SGP_deg", "n/a");
        let err = normalize_row(&table, &row).unwrap_err();
        assert!(matches!(err, RowError::NonNumeric { field } if field == "TWA_SGP_deg"));
    }

    #[test]
    fn test_missing_swap_partner_rejects_row() {
        let table = test_table();
        let mut row = TelemetryRow::new(Tack::Port);
        row.insert("LENGTH_RH_P_mm", 120.0);
        let err = normalize_row(&table, &row).unwrap_err();
        assert!(matches!(
            err,
            RowError::MissingPartner { partner, .. } if partner == "LENGTH_RH_S_mm"
        ));
    }

    #[test]
    fn test_batch_keeps_going_past_bad_rows() {
        let table = test_table();
        let mut bad = TelemetryRow::new(Tack::Port);
        bad.insert("TWA_SGP_deg", "dropout");

        let items = vec![
            Ok(port_row()),
            Ok(bad),
            Err(RowError::MissingTack),
            Ok(port_row()),
        ];
        let outcome = normalize_batch(&table, items, false).unwrap();

        assert_eq!(outcome.rows.len(), 2);
        assert_eq!(outcome.report.normalized, 2);
        assert_eq!(outcome.report.skipped, 2);
        assert_eq!(outcome.report.total(), 4);
        assert_eq!(outcome.report.issues[0].index, 1);
        assert_eq!(outcome.report.issues[1].index, 2);
    }

    #[test]
    fn test_strict_batch_aborts_on_first_error() {
        let table = test_table();
        let items = vec![Ok(port_row()), Err(RowError::MissingTack), Ok(port_row())];
        let err = normalize_batch(&table, items, true).unwrap_err();
        assert_eq!(err, RowError::MissingTack);
    }
}
