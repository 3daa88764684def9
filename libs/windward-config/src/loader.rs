//! Dictionary file loading
//!
//! Format is chosen by extension; the parsed dictionary is plain serde data
//! and must still go through [`RuleTable::from_dictionary`] before use.

use std::path::Path;

use figment::{
    providers::{Format, Json, Toml, Yaml},
    Figment,
};
use tracing::debug;

use errors::{ConfigError, ConfigResult};

use crate::fields::FieldDictionary;
use crate::table::RuleTable;

/// Load a field dictionary from a YAML, TOML, or JSON file
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> ConfigResult<FieldDictionary> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("dictionary file not found: {}", path.display()),
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

    let figment = match extension {
        "yaml" | "yml" => Figment::new().merge(Yaml::file(path)),
        "toml" => Figment::new().merge(Toml::file(path)),
        "json" => Figment::new().merge(Json::file(path)),
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    let dict: FieldDictionary = figment.extract()?;
    debug!(
        "loaded dictionary {} ({} fields)",
        path.display(),
        dict.fields.len()
    );
    Ok(dict)
}

/// Load and validate in one step
pub fn load_rule_table<P: AsRef<Path>>(path: P) -> ConfigResult<(FieldDictionary, RuleTable)> {
    let dict = load_dictionary(path)?;
    let table = RuleTable::from_dictionary(&dict)?;
    Ok((dict, table))
}
