//! Field dictionary structures
//!
//! Serde types for the dictionary file. Rules are a closed variant set so
//! table validation can match exhaustively; the original per-field free-text
//! annotations do not survive into code.

use serde::{Deserialize, Serialize};

// ============================================================================
// Transform rules
// ============================================================================

/// How a field's value changes when the boat is on port tack.
///
/// On starboard tack every rule is a no-op; the canonical representation is
/// starboard-equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// Value unchanged regardless of tack
    Identity,
    /// Value replaced by its additive inverse
    Negate,
    /// Value replaced by `(value + offset) mod modulus`, result in [0, modulus)
    OffsetWrap {
        #[serde(default = "default_offset")]
        offset: f64,
        #[serde(default = "default_modulus")]
        modulus: f64,
    },
    /// Value exchanged with a symmetric partner field
    SwapPair {
        /// Name of the opposite-side field; must declare this field back
        partner: String,
    },
}

fn default_offset() -> f64 {
    180.0
}

fn default_modulus() -> f64 {
    360.0
}

impl Default for TransformKind {
    fn default() -> Self {
        Self::Identity
    }
}

impl TransformKind {
    /// Check whether this rule reads another field of the same row
    pub fn is_swap(&self) -> bool {
        matches!(self, Self::SwapPair { .. })
    }
}

// ============================================================================
// Dictionary entries
// ============================================================================

/// One named telemetry channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Channel name as it appears in exported files (e.g., `HEADING_deg`)
    pub name: String,

    /// Physical unit tag (deg, km_h_1, mm, s, m, unk); informational only
    #[serde(default)]
    pub unit: String,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Port-tack transform rule
    #[serde(default)]
    pub transform: TransformKind,
}

impl FieldDef {
    /// Create a field definition without a description
    pub fn new(name: impl Into<String>, unit: impl Into<String>, transform: TransformKind) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            description: String::new(),
            transform,
        }
    }
}

/// The full channel dictionary as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDictionary {
    /// Dictionary schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Channel definitions in export column order
    pub fields: Vec<FieldDef>,
}

fn default_version() -> u32 {
    1
}

impl FieldDictionary {
    /// Look up a field definition by name
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Declared field names in dictionary order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
