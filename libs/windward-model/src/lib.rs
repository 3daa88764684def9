//! Windward Model Library
//!
//! Pure domain logic for F50 telemetry, no I/O:
//!
//! - `row`: telemetry rows and tack state
//! - `normalizer`: the tack normalization transform and batch driver
//! - `angles`: circular angle math (wrapping, differences, compass means)
//! - `geo`: great-circle distance, bearing, GPS jump filtering
//!
//! # Example
//!
//! ```
//! use windward_config::{FieldDef, FieldDictionary, RuleTable, TransformKind};
//! use windward_model::{normalize_row, Tack, TelemetryRow};
//!
//! let dict = FieldDictionary {
//!     version: 1,
//!     fields: vec![FieldDef::new("TWA_SGP_deg", "deg", TransformKind::Negate)],
//! };
//! let table = RuleTable::from_dictionary(&dict).unwrap();
//!
//! let mut row = TelemetryRow::new(Tack::Port);
//! row.insert("TWA_SGP_deg", -45.0);
//!
//! let normalized = normalize_row(&table, &row).unwrap();
//! assert_eq!(normalized.get_f64("TWA_SGP_deg"), Some(45.0));
//! ```

pub mod angles;
pub mod geo;
pub mod normalizer;
pub mod row;

// Re-exports for convenience
pub use normalizer::{normalize_batch, normalize_row, BatchOutcome, BatchReport, RowIssue};
pub use row::{Tack, TelemetryRow, Value};
