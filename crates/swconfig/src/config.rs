//! The configuration model.
//!
//! A [`Config`] maps variant keys to a [`ConfigValue`]: either a plain class
//! string or a [`ChoiceMap`] selecting a class by the value of a prop. Entries
//! keep their insertion order, which is the order their classes are emitted in.
//!
//! ```rust
//! use swconfig::{ChoiceMap, Config};
//!
//! let config = Config::new()
//!     .with_base("inline-flex")
//!     .with_class("rounded", "rounded-full")
//!     .with_choices("color", ChoiceMap::new().with("red", "text-red-500"))
//!     .with_variant("hover", "underline");
//!
//! assert_eq!(config.base(), Some("inline-flex"));
//! assert_eq!(config.keys().collect::<Vec<_>>(), ["base", "rounded", "color", "_hover"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::parser::values::is_ident_char;

/// The reserved key holding the class that is always applied first.
pub const BASE_KEY: &str = "base";

/// Leading character marking a key as a responsive/conditional variant.
pub const VARIANT_SIGIL: char = '_';

/// Returns the variant name of a sigil-prefixed key (`"_hover"` -> `"hover"`).
pub fn variant_name(key: &str) -> Option<&str> {
    key.strip_prefix(VARIANT_SIGIL)
}

/// An ordered mapping from a choice (the value of a prop) to a class string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceMap {
    entries: Vec<(String, String)>,
}

impl ChoiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ChoiceMap::insert`].
    pub fn with(mut self, choice: impl Into<String>, class: impl Into<String>) -> Self {
        self.insert(choice, class);
        self
    }

    /// Sets the class for `choice`, keeping its position if it already exists.
    /// Returns the previous class, if any.
    pub fn insert(&mut self, choice: impl Into<String>, class: impl Into<String>) -> Option<String> {
        let choice = choice.into();
        let class = class.into();
        match self.entries.iter_mut().find(|(c, _)| *c == choice) {
            Some((_, existing)) => Some(std::mem::replace(existing, class)),
            None => {
                self.entries.push((choice, class));
                None
            }
        }
    }

    pub fn get(&self, choice: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == choice)
            .map(|(_, class)| class.as_str())
    }

    pub fn contains(&self, choice: &str) -> bool {
        self.get(choice).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, class)| (c.as_str(), class.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for ChoiceMap {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut map = ChoiceMap::new();
        for (choice, class) in iter {
            map.insert(choice, class);
        }
        map
    }
}

/// The value held by one configuration key.
///
/// Choice maps sit behind an [`Arc`] so a merge can share branches it does not
/// touch with its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    /// Applied verbatim (or variant-prefixed for `_` keys).
    Class(String),
    /// Applied by looking up the prop's value.
    Choices(Arc<ChoiceMap>),
}

impl ConfigValue {
    pub fn as_class(&self) -> Option<&str> {
        match self {
            ConfigValue::Class(class) => Some(class),
            ConfigValue::Choices(_) => None,
        }
    }

    pub fn as_choices(&self) -> Option<&ChoiceMap> {
        match self {
            ConfigValue::Class(_) => None,
            ConfigValue::Choices(map) => Some(map),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(class: &str) -> Self {
        ConfigValue::Class(class.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(class: String) -> Self {
        ConfigValue::Class(class)
    }
}

impl From<ChoiceMap> for ConfigValue {
    fn from(map: ChoiceMap) -> Self {
        ConfigValue::Choices(Arc::new(map))
    }
}

impl From<Arc<ChoiceMap>> for ConfigValue {
    fn from(map: Arc<ChoiceMap>) -> Self {
        ConfigValue::Choices(map)
    }
}

/// A variant class configuration.
///
/// Keys are unique. Configurations are small, so lookups scan the entry list
/// rather than maintaining an index alongside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    entries: Vec<(String, ConfigValue)>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Config::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the always-applied class under [`BASE_KEY`].
    pub fn with_base(self, class: impl Into<String>) -> Self {
        self.with(BASE_KEY, class.into())
    }

    /// Adds a class applied when the prop `key` is truthy.
    pub fn with_class(self, key: impl Into<String>, class: impl Into<String>) -> Self {
        self.with(key, class.into())
    }

    /// Adds a choice map selected by the value of the prop `key`.
    pub fn with_choices(self, key: impl Into<String>, choices: ChoiceMap) -> Self {
        self.with(key, choices)
    }

    /// Adds a variant entry: `with_variant("hover", "underline")` stores
    /// `_hover: "underline"`.
    pub fn with_variant(self, name: &str, classes: impl Into<String>) -> Self {
        self.with(format!("{VARIANT_SIGIL}{name}"), classes.into())
    }

    /// Sets `key`, keeping its position if it already exists.
    /// Returns the previous value, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The base class, if declared as a plain class.
    pub fn base(&self) -> Option<&str> {
        self.get(BASE_KEY).and_then(ConfigValue::as_class)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, value)| (k.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `extension` on top of this configuration.
    /// See [`merge_configs`](crate::merge::merge_configs).
    pub fn merge(&self, extension: Option<&Config>) -> Config {
        crate::merge::merge_configs(self, extension)
    }
}

/// Writes the configuration in the declaration format accepted by
/// [`parse_config`](crate::parser::parse_config).
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            match value {
                ConfigValue::Class(class) => writeln!(f, "{}: {};", Key(key), Quoted(class))?,
                ConfigValue::Choices(map) => {
                    writeln!(f, "{} {{", Key(key))?;
                    for (choice, class) in map.iter() {
                        writeln!(f, "    {}: {};", Key(choice), Quoted(class))?;
                    }
                    writeln!(f, "}}")?;
                }
            }
        }
        Ok(())
    }
}

/// A key or choice name, quoted unless it is a bare identifier.
struct Key<'a>(&'a str);

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_empty() && self.0.chars().all(is_ident_char) {
            f.write_str(self.0)
        } else {
            write!(f, "{}", Quoted(self.0))
        }
    }
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("\"")
    }
}
