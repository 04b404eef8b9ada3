//! The `config!` and `props!` literal macros.

use styledwind::{ChoiceMap, Config, PropValue, Props, config, props};

// ============================================================================
// config!
// ============================================================================

#[test]
fn config_macro_matches_builder() {
    let config = config! {
        base: "btn",
        rounded: "rounded-full",
        size: { sm: "p-1", lg: "p-8" },
        _hover: "underline",
    };

    let expected = Config::new()
        .with_base("btn")
        .with_class("rounded", "rounded-full")
        .with_choices("size", ChoiceMap::new().with("sm", "p-1").with("lg", "p-8"))
        .with_variant("hover", "underline");

    assert_eq!(config, expected);
}

#[test]
fn config_macro_accepts_string_and_numeric_keys() {
    let config = config! {
        "aria-pressed": "ring",
        cols: { 1: "grid-cols-1", "2": "grid-cols-2" },
        r#type: "appearance-none",
    };

    assert_eq!(
        config.keys().collect::<Vec<_>>(),
        ["aria-pressed", "cols", "type"]
    );
    let cols = config.get("cols").and_then(|value| value.as_choices()).unwrap();
    assert_eq!(cols.get("1"), Some("grid-cols-1"));
    assert_eq!(cols.get("2"), Some("grid-cols-2"));
}

#[test]
fn config_macro_accepts_expressions() {
    const FOCUS: &str = "ring-2";
    let spacing = format!("p-{}", 4);

    let config = config! { base: spacing, _focus: FOCUS };

    assert_eq!(config.base(), Some("p-4"));
    assert_eq!(config.get("_focus").and_then(|value| value.as_class()), Some("ring-2"));
}

#[test]
fn config_macro_without_trailing_comma() {
    let config = config! { base: "a", b: "c" };
    assert_eq!(config.len(), 2);
}

#[test]
fn empty_config_macro() {
    assert!(config! {}.is_empty());
}

// ============================================================================
// props!
// ============================================================================

#[test]
fn props_macro_matches_builder() {
    let props = props! {
        rounded: true,
        color: "red",
        count: 2,
        "aria-label": "Close",
    };

    let expected = Props::new()
        .with("rounded", true)
        .with("color", "red")
        .with("count", 2)
        .with("aria-label", "Close");

    assert_eq!(props, expected);
}

#[test]
fn props_macro_routes_class_keys() {
    for props in [
        props! { class: "mt-2" },
        props! { className: "mt-2" },
        props! { class_name: "mt-2" },
    ] {
        assert_eq!(props.class_name(), Some("mt-2"));
        assert!(props.is_empty());
    }
}

#[test]
fn props_macro_later_keys_replace_earlier() {
    let props = props! { color: "red", id: "a", color: "blue" };
    assert_eq!(props.keys().collect::<Vec<_>>(), ["color", "id"]);
    assert_eq!(props.get("color"), Some(&PropValue::from("blue")));
}

#[test]
fn empty_props_macro() {
    assert_eq!(props! {}, Props::new());
}
