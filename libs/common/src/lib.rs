//! Windward basic library
//!
//! Provides functions shared by the library crates and the bosun CLI:
//! - logging setup
//! - shared serde deserializers

pub mod logging;
pub mod serde_helpers;

pub use logging::{init_logging, LogConfig};
pub use serde_helpers::{deserialize_bool_flexible, parse_bool_flexible};
