//! Windward Configuration Library
//!
//! Field dictionary for F50 telemetry channels: which channels exist, their
//! units, and how each one transforms when the boat is on port tack.
//!
//! The dictionary is loaded once from a YAML/TOML/JSON file and validated
//! into an immutable [`RuleTable`]; row processing never starts on a table
//! that failed validation.
//!
//! # Example
//!
//! ```
//! use windward_config::{FieldDef, FieldDictionary, RuleTable, TransformKind};
//!
//! let dict = FieldDictionary {
//!     version: 1,
//!     fields: vec![
//!         FieldDef::new("TWA_SGP_deg", "deg", TransformKind::Negate),
//!         FieldDef::new("HEADING_deg", "deg", TransformKind::OffsetWrap {
//!             offset: 180.0,
//!             modulus: 360.0,
//!         }),
//!     ],
//! };
//! let table = RuleTable::from_dictionary(&dict).unwrap();
//! assert_eq!(table.rule("TWA_SGP_deg"), &TransformKind::Negate);
//! ```

pub mod fields;
pub mod loader;
pub mod table;
pub mod validation;

// Re-exports for convenience
pub use fields::{FieldDef, FieldDictionary, TransformKind};
pub use loader::{load_dictionary, load_rule_table};
pub use table::RuleTable;
pub use validation::{validate_headers, ValidationReport};
