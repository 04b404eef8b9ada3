//! Parsing of textual configuration declarations.
//!
//! A declaration is a sequence of entries. Class entries bind a key to a
//! quoted class string; choice blocks bind a key to a set of choices:
//!
//! ```text
//! base: "inline-flex px-4";
//! rounded: "rounded-full";
//! color {
//!     red: "text-red-500";
//!     blue: "text-blue-500";
//! }
//! _hover: "underline";
//! ```
//!
//! Keys and choices that are not bare identifiers are quoted (`"1/2": "w-1/2";`).
//! Semicolons are optional before `}` and at the end of input. Comments are
//! handled by [`comments`].
//!
//! ## Example
//!
//! ```rust
//! use swconfig::parser::parse_config;
//!
//! let config = parse_config(r#"base: "btn"; size { sm: "p-1"; lg: "p-8" }"#).unwrap();
//! assert_eq!(config.base(), Some("btn"));
//! assert_eq!(config.get("size").and_then(|v| v.as_choices()).map(|m| m.len()), Some(2));
//! ```

pub mod comments;
pub mod values;

use std::borrow::Cow;
use std::path::Path;

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

use crate::config::{ChoiceMap, Config, variant_name};
use crate::error::ConfigError;
use crate::parser::comments::strip_comments;
use crate::parser::values::{parse_key, parse_quoted};
use crate::variants::is_known_variant;

/// An entry as written, before duplicate checks.
#[derive(Debug, PartialEq)]
enum RawValue<'a> {
    Class(String),
    Choices(Vec<(Cow<'a, str>, String)>),
}

#[derive(Debug, PartialEq)]
struct RawEntry<'a> {
    key: Cow<'a, str>,
    value: RawValue<'a>,
}

/// Parses a configuration declaration.
pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let clean = strip_comments(source);

    let (remaining, entries) =
        many0(parse_entry)(&clean).map_err(|e| ConfigError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(ConfigError::InvalidSyntax(format!(
            "Unexpected tokens at end of declaration: {}",
            remaining.trim()
        )));
    }

    build_config(entries)
}

/// Reads and parses a declaration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    log::debug!("loading config declaration from {}", path.display());
    parse_config(&source)
}

fn build_config(entries: Vec<RawEntry<'_>>) -> Result<Config, ConfigError> {
    let mut config = Config::new();

    for RawEntry { key, value } in entries {
        let key: &str = &key;
        if config.contains_key(key) {
            return Err(ConfigError::DuplicateKey(key.to_string()));
        }

        match variant_name(key) {
            Some("") => return Err(ConfigError::EmptyVariant(key.to_string())),
            Some(name) if !is_known_variant(name) => {
                log::warn!("config key '{key}' uses unknown variant '{name}'");
            }
            _ => {}
        }

        match value {
            RawValue::Class(class) => {
                config.insert(key, class);
            }
            RawValue::Choices(choices) => {
                let mut map = ChoiceMap::new();
                for (choice, class) in choices {
                    if map.contains(&choice) {
                        return Err(ConfigError::DuplicateChoice {
                            key: key.to_string(),
                            choice: choice.into_owned(),
                        });
                    }
                    map.insert(choice, class);
                }
                config.insert(key, map);
            }
        }
    }

    Ok(config)
}

/// Parses one entry: `key: "classes";` or `key { choice: "classes"; ... }`.
/// Keys and choices may be quoted when they contain other characters.
fn parse_entry(input: &str) -> IResult<&str, RawEntry<'_>> {
    let (input, _) = multispace0(input)?;
    let (input, key) = parse_key(input)?;
    let (input, _) = multispace0(input)?;

    let (input, value) = alt((
        map(
            preceded(tuple((char(':'), multispace0)), parse_quoted),
            RawValue::Class,
        ),
        map(
            delimited(
                char('{'),
                many0(parse_choice),
                preceded(multispace0, char('}')),
            ),
            RawValue::Choices,
        ),
    ))(input)?;

    let (input, _) = parse_separator(input)?;
    Ok((input, RawEntry { key, value }))
}

/// Parses one choice inside a block: `choice: "classes";`.
fn parse_choice(input: &str) -> IResult<&str, (Cow<'_, str>, String)> {
    let (input, _) = multispace0(input)?;
    let (input, choice) = parse_key(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, class) = parse_quoted(input)?;
    let (input, _) = parse_separator(input)?;
    Ok((input, (choice, class)))
}

fn parse_separator(input: &str) -> IResult<&str, Option<char>> {
    preceded(multispace0, opt(char(';')))(input)
}
