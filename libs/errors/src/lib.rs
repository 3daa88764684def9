//! Unified error handling for the windward workspace
//!
//! Two error families cover everything the toolkit can reject: `ConfigError`
//! for a malformed field dictionary (fatal before any row is touched) and
//! `RowError` for per-row input failures (scoped to the offending row).

use thiserror::Error;

// ============================================================================
// ConfigError - dictionary / rule table construction
// ============================================================================

/// Result type for dictionary loading and validation
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating a field dictionary.
///
/// All of these are fatal for the table instance: validation runs once at
/// construction time and row processing never starts on a bad table.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A swap_pair rule names a partner that is not in the dictionary
    #[error("field '{field}' declares swap partner '{partner}' which is not in the dictionary")]
    UnknownPartner { field: String, partner: String },

    /// Field A swaps with B, but B does not swap back with A
    #[error("swap pair is not symmetric: '{field}' -> '{partner}' has no matching reverse declaration")]
    AsymmetricPair { field: String, partner: String },

    /// A field declared as its own swap partner
    #[error("field '{field}' declares itself as swap partner")]
    SelfPartner { field: String },

    /// offset_wrap with a modulus that cannot define a residue range
    #[error("field '{field}' has non-positive modulus {modulus}")]
    NonPositiveModulus { field: String, modulus: f64 },

    /// The same field name appears twice in the dictionary
    #[error("duplicate field '{0}' in dictionary")]
    DuplicateField(String),

    /// Dictionary file has no or an unsupported extension
    #[error("unsupported dictionary format: {0}")]
    UnsupportedFormat(String),

    /// IO error reading the dictionary file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("dictionary parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Figment extraction error
    #[error("dictionary load error: {0}")]
    Load(#[from] figment::Error),
}

// ============================================================================
// RowError - per-row input failures
// ============================================================================

/// Result type for single-row operations
pub type RowResult<T> = std::result::Result<T, RowError>;

/// Errors scoped to one telemetry row.
///
/// Batch processing collects these and keeps going; only strict mode turns
/// them fatal. None of them ever indicate a bad rule table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// No tack flag column and no wind-angle field to derive one from
    #[error("row has no tack indicator")]
    MissingTack,

    /// Tack flag present but not resolvable to a boolean
    #[error("invalid tack indicator '{0}'")]
    InvalidTack(String),

    /// A numeric rule applied to a field holding text
    #[error("field '{field}' is not numeric")]
    NonNumeric { field: String },

    /// swap_pair partner absent from this row (sensor dropout)
    #[error("field '{field}' cannot swap: partner '{partner}' is missing from the row")]
    MissingPartner { field: String, partner: String },

    /// Record-level failure before the row could be assembled
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl RowError {
    /// Create a malformed-record error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create a non-numeric field error
    pub fn non_numeric(field: impl Into<String>) -> Self {
        Self::NonNumeric {
            field: field.into(),
        }
    }
}
