use swconfig::{ChoiceMap, Config, ConfigError, ConfigValue, load_config, parse_config};

// ============================================================================
// Entries
// ============================================================================

#[test]
fn parse_empty_declaration() {
    let config = parse_config("").unwrap();
    assert!(config.is_empty());

    let config = parse_config("  \n\t ").unwrap();
    assert!(config.is_empty());
}

#[test]
fn parse_class_entries_in_order() {
    let config = parse_config(
        r#"
        base: "inline-flex px-4";
        rounded: "rounded-full";
        _hover: "underline bold";
        "#,
    )
    .unwrap();

    let expected = Config::new()
        .with_base("inline-flex px-4")
        .with_class("rounded", "rounded-full")
        .with_variant("hover", "underline bold");
    assert_eq!(config, expected);
}

#[test]
fn parse_choice_blocks() {
    let config = parse_config(
        r#"
        base: "";
        color {
            red: "text-red";
            blue: "text-blue";
        }
        size { 1: "p-1"; 2xl: "p-8" }
        "#,
    )
    .unwrap();

    let expected = Config::new()
        .with_base("")
        .with_choices(
            "color",
            ChoiceMap::new().with("red", "text-red").with("blue", "text-blue"),
        )
        .with_choices("size", ChoiceMap::new().with("1", "p-1").with("2xl", "p-8"));
    assert_eq!(config, expected);
}

#[test]
fn parse_semicolons_are_optional() {
    let config = parse_config(r#"base: "a" x: "b""#).unwrap();
    assert_eq!(config.keys().collect::<Vec<_>>(), ["base", "x"]);
}

#[test]
fn parse_dashed_variant_keys() {
    let config = parse_config(r#"_motion-safe: "transition"; _group-hover: "visible";"#).unwrap();
    assert!(config.contains_key("_motion-safe"));
    assert!(config.contains_key("_group-hover"));
}

#[test]
fn parse_unknown_variant_is_accepted() {
    let config = parse_config(r#"_supports-grid: "grid";"#).unwrap();
    assert_eq!(
        config.get("_supports-grid"),
        Some(&ConfigValue::Class("grid".to_string()))
    );
}

#[test]
fn parse_escaped_quotes() {
    let config = parse_config(r#"base: "content-['\"']";"#).unwrap();
    assert_eq!(config.base(), Some(r#"content-['"']"#));
}

#[test]
fn parse_via_from_str() {
    let config: Config = r#"base: "btn""#.parse().unwrap();
    assert_eq!(config.base(), Some("btn"));
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn parse_block_and_line_comments() {
    let config = parse_config(
        r#"
        /* the base class */
        base: "btn"; // always on
        color {
            red: "text-red"; /* inline */
        }
        "#,
    )
    .unwrap();
    assert_eq!(config.len(), 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn parse_rejects_duplicate_keys() {
    let err = parse_config(r#"x: "a"; x: "b";"#).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateKey(ref key) if key == "x"));
}

#[test]
fn parse_rejects_duplicate_choices() {
    let err = parse_config(r#"color { red: "a"; red: "b"; }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DuplicateChoice { ref key, ref choice } if key == "color" && choice == "red"
    ));
}

#[test]
fn parse_rejects_bare_sigil() {
    let err = parse_config(r#"_: "a";"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyVariant(_)));
}

#[test]
fn parse_rejects_unquoted_values() {
    let err = parse_config("base: btn;").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSyntax(_)));
}

#[test]
fn parse_rejects_unterminated_strings() {
    let err = parse_config(r#"base: "btn;"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSyntax(_)));
}

#[test]
fn parse_rejects_unclosed_blocks() {
    let err = parse_config(r#"color { red: "a";"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSyntax(_)));
}

#[test]
fn error_messages_name_the_problem() {
    let err = parse_config(r#"x: "a"; x: "b";"#).unwrap_err();
    assert_eq!(err.to_string(), "duplicate config key: x");
}

// ============================================================================
// Display / Files
// ============================================================================

#[test]
fn display_writes_a_parseable_declaration() {
    let config = Config::new()
        .with_base(r#"content-['"']"#)
        .with_choices("color", ChoiceMap::new().with("red", "text-red"))
        .with_variant("hover", "underline");

    let text = config.to_string();
    assert_eq!(
        text,
        "base: \"content-['\\\"']\";\ncolor {\n    red: \"text-red\";\n}\n_hover: \"underline\";\n"
    );
    assert_eq!(parse_config(&text).unwrap(), config);
}

#[test]
fn display_quotes_fraction_choices() {
    let config = Config::new()
        .with_choices(
            "width",
            ChoiceMap::new().with("1/2", "w-1/2").with("full", "w-full"),
        )
        .with_class("aria-[sort=asc]", "font-bold");

    let text = config.to_string();
    assert_eq!(
        text,
        "width {\n    \"1/2\": \"w-1/2\";\n    full: \"w-full\";\n}\n\"aria-[sort=asc]\": \"font-bold\";\n"
    );
    assert_eq!(parse_config(&text).unwrap(), config);
}

#[test]
fn parse_quoted_keys_and_choices() {
    let config = parse_config(r#""data-[state=open]": "block"; basis { "1/3": "basis-1/3"; }"#).unwrap();
    assert!(config.contains_key("data-[state=open]"));
    let basis = config.get("basis").and_then(|v| v.as_choices()).unwrap();
    assert_eq!(basis.get("1/3"), Some("basis-1/3"));
}

#[test]
fn parse_rejects_duplicate_quoted_choices() {
    let err = parse_config(r#"w { "1/2": "a"; "1/2": "b"; }"#).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateChoice { ref choice, .. } if choice == "1/2"));
}

#[test]
fn load_config_reads_files() {
    let path = std::env::temp_dir().join(format!("swconfig-load-{}.sw", std::process::id()));
    std::fs::write(&path, "base: \"card\";\npadded: \"p-4\";\n").unwrap();

    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.base(), Some("card"));
    assert!(config.contains_key("padded"));
}

#[test]
fn load_config_reports_missing_files() {
    let err = load_config("/nonexistent/swconfig/button.sw").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
