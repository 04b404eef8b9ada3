use std::borrow::Cow;
use std::collections::BTreeSet;

use swconfig::{BASE_KEY, Config, ConfigValue, variant_name};

use crate::props::Props;

/// The outcome of resolving a configuration against a set of props.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Space-joined classes: the base class first, then declared entries in order.
    pub class_name: String,
    /// Every configuration key. Props with these names never reach the element.
    pub consumed: BTreeSet<String>,
}

/// Computes the class string for `config` under `props`.
///
/// - The base class always leads, as an empty token when undeclared.
/// - Variant entries (`_hover: "a b"`) are always active and emit `hover:a hover:b`.
/// - Class entries are emitted when their prop is truthy.
/// - Choice entries emit the class selected by the prop's value, or nothing
///   when the choice is not declared.
///
/// Resolution is pure and never fails.
///
/// # Examples
///
/// ```rust
/// use styledwind::{resolve, Props};
/// use swconfig::Config;
///
/// let config = Config::new()
///     .with_base("block")
///     .with_class("rounded", "rounded-full")
///     .with_variant("hover", "underline bold");
///
/// let resolution = resolve(&config, &Props::new().with("rounded", true));
/// assert_eq!(resolution.class_name, "block rounded-full hover:underline hover:bold");
/// ```
pub fn resolve(config: &Config, props: &Props) -> Resolution {
    let mut classes: Vec<Cow<'_, str>> = Vec::with_capacity(config.len() + 1);
    let mut consumed = BTreeSet::new();

    classes.push(Cow::Borrowed(config.base().unwrap_or("")));

    for (key, value) in config.iter() {
        consumed.insert(key.to_string());

        if key == BASE_KEY {
            continue;
        }

        if let (Some(variant), ConfigValue::Class(class)) = (variant_name(key), value) {
            if let Some(prefixed) = prefix_variant(variant, class) {
                classes.push(Cow::Owned(prefixed));
            }
            continue;
        }

        let Some(prop) = props.get(key).filter(|prop| prop.is_truthy()) else {
            continue;
        };

        match value {
            ConfigValue::Class(class) => classes.push(Cow::Borrowed(class)),
            ConfigValue::Choices(choices) => match choices.get(&prop.choice_key()) {
                Some(class) => classes.push(Cow::Borrowed(class)),
                None => log::trace!("RESOLVE: no choice '{}' for key '{key}'", prop.choice_key()),
            },
        }
    }

    let class_name = classes.join(" ");
    log::trace!(
        "RESOLVE: {} keys, {} props -> '{class_name}'",
        config.len(),
        props.len()
    );

    Resolution {
        class_name,
        consumed,
    }
}

/// Joins class strings with single spaces, skipping empty ones.
///
/// Used at the composition boundary to append the caller's class after the
/// resolved classes.
pub fn join_class_names<'a>(class_names: impl IntoIterator<Item = &'a str>) -> String {
    class_names
        .into_iter()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `("md", "flex gap-2")` -> `"md:flex md:gap-2"`. `None` when there is
/// nothing to prefix.
fn prefix_variant(variant: &str, classes: &str) -> Option<String> {
    let prefixed = classes
        .split_whitespace()
        .map(|class| format!("{variant}:{class}"))
        .collect::<Vec<_>>();

    (!prefixed.is_empty()).then(|| prefixed.join(" "))
}
