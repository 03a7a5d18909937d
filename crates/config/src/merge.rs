//! Default-merge routine for configurations.
//!
//! Responsibilities:
//! - Overlay caller-supplied overrides onto a copy of the defaults.
//!
//! Does NOT handle:
//! - File I/O (see `store.rs`).
//! - Defining the default values (see `defaults.rs`).
//!
//! Invariants:
//! - The merge is one level deep: section entries override individually,
//!   but any value below the second level is replaced wholesale. This
//!   matches how callers supply partial sections and is deliberate.
//! - The result always contains every section/option present in the
//!   defaults; unknown sections and options are kept additively.
//! - Neither the input nor the defaults are mutated.

use serde_json::Value;

use crate::defaults::default_configuration;

/// A two-level mapping of section name to option name to value.
///
/// Sections correspond to forecasting models (`prophet`, `xgboost`, ...)
/// plus `general`. The generic JSON map is used rather than fixed structs
/// so that extra caller-supplied sections and options survive a merge and
/// a round-trip through disk.
pub type Configuration = serde_json::Map<String, Value>;

/// Overlays `overrides` onto a copy of the default configuration.
///
/// For each top-level key in `overrides`: if both the default value and
/// the override value are objects, the override's entries are inserted
/// into a copy of the default section (override wins on collision);
/// otherwise the override value replaces or adds the top-level entry
/// outright.
///
/// The result is guaranteed to contain at least every section and option
/// present in the defaults. Idempotent: merging a merged configuration
/// changes nothing.
pub fn merge_defaults(overrides: &Configuration) -> Configuration {
    let mut merged = default_configuration().clone();

    for (section, value) in overrides {
        if let Value::Object(options) = value {
            if let Some(Value::Object(base)) = merged.get_mut(section) {
                for (name, option) in options {
                    base.insert(name.clone(), option.clone());
                }
                continue;
            }
        }
        merged.insert(section.clone(), value.clone());
    }

    merged
}
