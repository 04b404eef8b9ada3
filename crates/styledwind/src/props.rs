//! Properties supplied to a styled element at render time.
//!
//! Props are an ordered bag of attribute values. Keys that match a
//! configuration entry select classes; every other key passes through to the
//! rendered element unchanged. The passthrough class string is kept apart from
//! the bag so it can be appended after the resolved classes.

use std::borrow::Cow;
use std::collections::BTreeSet;

/// Keys that set the passthrough class instead of a regular prop.
const CLASS_KEYS: [&str; 3] = ["class", "className", "class_name"];

/// A single prop value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropValue {
    Bool(bool),
    Str(String),
    Int(i64),
}

impl PropValue {
    /// Whether the prop activates a configuration entry.
    ///
    /// `false`, the empty string, and `0` are inactive.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Bool(b) => *b,
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Int(n) => *n != 0,
        }
    }

    /// The key this value selects out of a choice map.
    pub fn choice_key(&self) -> Cow<'_, str> {
        match self {
            PropValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            PropValue::Str(s) => Cow::Borrowed(s),
            PropValue::Int(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(value.into())
    }
}

/// An ordered set of props plus an optional passthrough class.
///
/// # Examples
///
/// ```rust
/// use styledwind::{PropValue, Props};
///
/// let props = Props::new()
///     .with("rounded", true)
///     .with("color", "red")
///     .with("id", "submit")
///     .with_class_name("mt-4");
///
/// assert_eq!(props.get("color"), Some(&PropValue::Str("red".into())));
/// assert_eq!(props.class_name(), Some("mt-4"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Props {
    class_name: Option<String>,
    entries: Vec<(String, PropValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Props::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets a prop, keeping its position if it already exists, and returns the
    /// previous value.
    ///
    /// `class`, `className`, and `class_name` set the passthrough class
    /// instead; a boolean clears it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();

        if CLASS_KEYS.contains(&key.as_str()) {
            let class_name = match value {
                PropValue::Str(s) => Some(s),
                PropValue::Int(n) => Some(n.to_string()),
                PropValue::Bool(_) => None,
            };
            return std::mem::replace(&mut self.class_name, class_name).map(PropValue::Str);
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The passthrough class supplied by the caller.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, value)| (k.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the passthrough class and every prop named in `consumed`,
    /// leaving the attributes destined for the rendered element.
    pub fn into_passthrough(self, consumed: &BTreeSet<String>) -> Props {
        Props {
            class_name: None,
            entries: self
                .entries
                .into_iter()
                .filter(|(key, _)| !consumed.contains(key))
                .collect(),
        }
    }
}
