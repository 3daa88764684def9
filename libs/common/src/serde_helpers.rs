//! Shared Serde deserializers
//!
//! Flag columns arrive in whatever shape the exporting tool chose: native
//! booleans, 0/1 integers, or strings like "TRUE" and "no". The helpers here
//! accept all of them.

use serde::{Deserialize, Deserializer};

/// Parse a boolean out of a loosely-formatted string.
///
/// Accepts "1"/"0", "true"/"false", "yes"/"no" (case-insensitive). Returns
/// None for anything else, including the empty string: a flag column that is
/// present but blank is indistinguishable from sensor dropout and must not
/// default.
pub fn parse_bool_flexible(raw: &str) -> Option<bool> {
    let t = raw.trim();
    if t == "1" || t.eq_ignore_ascii_case("true") || t.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if t == "0" || t.eq_ignore_ascii_case("false") || t.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Custom deserializer for boolean fields that supports multiple input formats
///
/// Supports native booleans, integers, and string values:
/// - boolean: true, false
/// - integer: 0 (false), 1 (true)
/// - string: "1"/"0", "true"/"false", "yes"/"no" (case-insensitive)
pub fn deserialize_bool_flexible<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrStringOrInt {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match BoolOrStringOrInt::deserialize(deserializer)? {
        BoolOrStringOrInt::Bool(b) => Ok(b),
        BoolOrStringOrInt::Int(i) => match i {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(D::Error::custom(format!(
                "Invalid integer value {}, expected 0 or 1",
                i
            ))),
        },
        BoolOrStringOrInt::String(s) => parse_bool_flexible(&s).ok_or_else(|| {
            D::Error::custom(format!(
                "Invalid boolean value '{}', expected: 1/0, true/false, yes/no, or boolean",
                s
            ))
        }),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "deserialize_bool_flexible")]
        value: bool,
    }

    #[test]
    fn test_parse_bool_flexible() {
        assert_eq!(parse_bool_flexible("TRUE"), Some(true));
        assert_eq!(parse_bool_flexible(" 1 "), Some(true));
        assert_eq!(parse_bool_flexible("yes"), Some(true));
        assert_eq!(parse_bool_flexible("false"), Some(false));
        assert_eq!(parse_bool_flexible("0"), Some(false));
        assert_eq!(parse_bool_flexible("No"), Some(false));
        assert_eq!(parse_bool_flexible(""), None);
        assert_eq!(parse_bool_flexible("port"), None);
    }

    #[test]
    fn test_deserialize_bool_variants() {
        let f: Flag = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert!(f.value);
        let f: Flag = serde_json::from_str(r#"{"value": 0}"#).unwrap();
        assert!(!f.value);
        let f: Flag = serde_json::from_str(r#"{"value": "Yes"}"#).unwrap();
        assert!(f.value);
        assert!(serde_json::from_str::<Flag>(r#"{"value": "maybe"}"#).is_err());
        assert!(serde_json::from_str::<Flag>(r#"{"value": 2}"#).is_err());
    }
}
