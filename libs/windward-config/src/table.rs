//! Validated rule table
//!
//! Construction runs every structural check once; after that the table is
//! read-only and lookups cannot fail.

use rustc_hash::FxHashMap;

use errors::{ConfigError, ConfigResult};

use crate::fields::{FieldDictionary, TransformKind};

static IDENTITY: TransformKind = TransformKind::Identity;

/// Immutable field-name to transform-rule lookup.
///
/// Also remembers the dictionary's declared field order so exporters can
/// reproduce the original column layout.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: FxHashMap<String, TransformKind>,
    order: Vec<String>,
}

impl RuleTable {
    /// Build a validated table from a dictionary.
    ///
    /// Fails fast on the first structural problem:
    /// - duplicate field names
    /// - `offset_wrap` with a modulus that is not a positive finite number
    /// - a `swap_pair` partner missing from the dictionary
    /// - a field declared as its own partner
    /// - an asymmetric pair (A swaps with B, B does not swap with A)
    pub fn from_dictionary(dict: &FieldDictionary) -> ConfigResult<Self> {
        let mut rules = FxHashMap::default();
        let mut order = Vec::with_capacity(dict.fields.len());

        for def in &dict.fields {
            if rules
                .insert(def.name.clone(), def.transform.clone())
                .is_some()
            {
                return Err(ConfigError::DuplicateField(def.name.clone()));
            }
            order.push(def.name.clone());
        }

        for def in &dict.fields {
            match &def.transform {
                TransformKind::OffsetWrap { modulus, .. } => {
                    if !(*modulus > 0.0 && modulus.is_finite()) {
                        return Err(ConfigError::NonPositiveModulus {
                            field: def.name.clone(),
                            modulus: *modulus,
                        });
                    }
                },
                TransformKind::SwapPair { partner } => {
                    if *partner == def.name {
                        return Err(ConfigError::SelfPartner {
                            field: def.name.clone(),
                        });
                    }
                    match rules.get(partner) {
                        None => {
                            return Err(ConfigError::UnknownPartner {
                                field: def.name.clone(),
                                partner: partner.clone(),
                            });
                        },
                        Some(TransformKind::SwapPair { partner: back }) if *back == def.name => {},
                        Some(_) => {
                            return Err(ConfigError::AsymmetricPair {
                                field: def.name.clone(),
                                partner: partner.clone(),
                            });
                        },
                    }
                },
                TransformKind::Identity | TransformKind::Negate => {},
            }
        }

        Ok(Self { rules, order })
    }

    /// Rule for a field; fields absent from the dictionary pass through
    pub fn rule(&self, field: &str) -> &TransformKind {
        self.rules.get(field).unwrap_or(&IDENTITY)
    }

    /// Whether the dictionary declares this field
    pub fn contains(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    /// Declared field names in dictionary order
    pub fn field_order(&self) -> &[String] {
        &self.order
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the dictionary declared no fields
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
