//! Telemetry rows and tack state

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use errors::RowError;

// ============================================================================
// Tack
// ============================================================================

/// Which side of the wind the boat sails on.
///
/// Starboard is the canonical representation; normalization rewrites port-tack
/// rows into starboard-equivalent form and leaves starboard rows alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tack {
    Port,
    Starboard,
}

impl Tack {
    /// True when the boat is on port tack
    pub fn is_port(self) -> bool {
        matches!(self, Self::Port)
    }

    /// Resolve tack from an explicit port-tack flag
    pub fn from_port_flag(port_tack: bool) -> Self {
        if port_tack {
            Self::Port
        } else {
            Self::Starboard
        }
    }

    /// Derive tack from the true wind angle: negative TWA means port tack
    pub fn from_twa(twa_deg: f64) -> Self {
        Self::from_port_flag(twa_deg < 0.0)
    }
}

impl FromStr for Tack {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "port" | "p" => Ok(Self::Port),
            "starboard" | "stbd" | "s" => Ok(Self::Starboard),
            other => Err(RowError::InvalidTack(other.to_string())),
        }
    }
}

impl fmt::Display for Tack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Port => write!(f, "port"),
            Self::Starboard => write!(f, "starboard"),
        }
    }
}

// ============================================================================
// Values and rows
// ============================================================================

/// One row cell: a sensor reading or an identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the cell, None for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One telemetry sample: resolved tack state plus field values.
///
/// Field ordering belongs to the rule table, not the row; lookups are by
/// name. Identifiers and timestamps ride along as `Value::Text` and are
/// untouched by normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRow {
    pub tack: Tack,
    values: FxHashMap<String, Value>,
}

impl TelemetryRow {
    /// Create an empty row with a resolved tack state
    pub fn new(tack: Tack) -> Self {
        Self {
            tack,
            values: FxHashMap::default(),
        }
    }

    /// Set a field value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Field value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Numeric field value by name; None when absent or text
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_f64)
    }

    /// Iterate over all field values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the row holds no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_tack_from_twa() {
        assert_eq!(Tack::from_twa(-45.0), Tack::Port);
        assert_eq!(Tack::from_twa(45.0), Tack::Starboard);
        // Zero is dead into the wind; treated as starboard like the source data
        assert_eq!(Tack::from_twa(0.0), Tack::Starboard);
    }

    #[test]
    fn test_tack_parse() {
        assert_eq!("Port".parse::<Tack>().unwrap(), Tack::Port);
        assert_eq!(" STBD ".parse::<Tack>().unwrap(), Tack::Starboard);
        assert!(matches!(
            "windward".parse::<Tack>(),
            Err(RowError::InvalidTack(_))
        ));
    }

    #[test]
    fn test_row_accessors() {
        let mut row = TelemetryRow::new(Tack::Starboard);
        row.insert("BOAT", "AUS");
        row.insert("HEEL_deg", 3.5);

        assert_eq!(row.get_f64("HEEL_deg"), Some(3.5));
        assert_eq!(row.get_f64("BOAT"), None);
        assert_eq!(row.get("BOAT"), Some(&Value::Text("AUS".to_string())));
        assert_eq!(row.len(), 2);
    }
}
