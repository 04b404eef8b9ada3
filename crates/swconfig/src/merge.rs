//! Merging configurations along a composition chain.
//!
//! An outer styled unit forwards its configuration to the unit it wraps, which
//! merges it on top of its own declaration:
//!
//! - Class entries present on both sides are concatenated, `base + " " + extension`.
//! - Choice maps present on both sides are merged per choice with the same rule.
//! - Anything else from the extension is set, replacing a base entry of the
//!   other kind.
//!
//! Keys keep the base order; keys new to the result follow in extension order.

use std::sync::Arc;

use crate::config::{ChoiceMap, Config, ConfigValue};

/// Merges `extension` on top of `base`, producing a new configuration.
///
/// Neither input is modified. Choice maps the extension does not touch are
/// shared with `base`; every touched map is rebuilt.
///
/// # Examples
///
/// ```rust
/// use swconfig::{merge_configs, ChoiceMap, Config};
///
/// let base = Config::new().with_choices("size", ChoiceMap::new().with("sm", "p-1"));
/// let extension = Config::new()
///     .with_choices("size", ChoiceMap::new().with("sm", "m-2").with("lg", "p-8"));
///
/// let merged = merge_configs(&base, Some(&extension));
/// let size = merged.get("size").and_then(|v| v.as_choices()).unwrap();
/// assert_eq!(size.get("sm"), Some("p-1 m-2"));
/// assert_eq!(size.get("lg"), Some("p-8"));
/// ```
pub fn merge_configs(base: &Config, extension: Option<&Config>) -> Config {
    let mut merged = base.clone();
    let Some(extension) = extension else {
        return merged;
    };

    for (key, value) in extension.iter() {
        let next = match (merged.get(key), value) {
            (Some(ConfigValue::Class(existing)), ConfigValue::Class(extra)) => {
                ConfigValue::Class(concat(existing, extra))
            }
            (Some(ConfigValue::Choices(existing)), ConfigValue::Choices(extra)) => {
                ConfigValue::Choices(Arc::new(merge_choices(existing, extra)))
            }
            (_, value) => value.clone(),
        };
        merged.insert(key, next);
    }

    log::trace!(
        "MERGE: {} base keys + {} extension keys -> {} keys",
        base.len(),
        extension.len(),
        merged.len()
    );
    merged
}

fn merge_choices(base: &ChoiceMap, extension: &ChoiceMap) -> ChoiceMap {
    let mut merged = base.clone();
    for (choice, class) in extension.iter() {
        let next = match merged.get(choice) {
            Some(existing) => concat(existing, class),
            None => class.to_string(),
        };
        merged.insert(choice, next);
    }
    merged
}

fn concat(existing: &str, extra: &str) -> String {
    let mut joined = String::with_capacity(existing.len() + extra.len() + 1);
    joined.push_str(existing);
    joined.push(' ');
    joined.push_str(extra);
    joined
}
