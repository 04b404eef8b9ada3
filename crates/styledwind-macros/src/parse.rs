//! Declaration parsing for the config! macro.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::{
    Expr, Ident, LitInt, LitStr, Path, Result, Token, braced,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_quote, token,
};

/// The whole macro input: an optional crate path and the entries.
#[derive(Debug)]
pub struct ConfigInput {
    /// Path to the crate exporting `Config` and `ChoiceMap`.
    pub krate: Path,
    pub entries: Vec<Entry>,
}

/// One `key: value` entry.
#[derive(Debug)]
pub struct Entry {
    pub key: Key,
    pub value: EntryValue,
}

#[derive(Debug)]
pub enum EntryValue {
    /// `key: "classes"` or `key: EXPR`
    Class(Expr),
    /// `key: { choice: "classes", ... }`
    Choices(Vec<Choice>),
}

/// One `choice: "classes"` pair inside a choice block.
#[derive(Debug)]
pub struct Choice {
    pub key: Key,
    pub class: Expr,
}

/// A key as written, normalized to the string stored in the configuration.
#[derive(Debug)]
pub struct Key {
    pub name: String,
    pub span: Span,
}

/// Parse a key: identifier (keywords allowed), string literal, or integer.
fn parse_key(input: ParseStream) -> Result<Key> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        Ok(Key {
            name: lit.value(),
            span: lit.span(),
        })
    } else if input.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        Ok(Key {
            name: lit.base10_digits().to_string(),
            span: lit.span(),
        })
    } else {
        let ident = Ident::parse_any(input)?;
        Ok(Key {
            name: ident.unraw().to_string(),
            span: ident.span(),
        })
    }
}

/// Consume a comma unless the stream is exhausted.
fn parse_separator(input: ParseStream) -> Result<()> {
    if !input.is_empty() {
        let _comma: Token![,] = input.parse()?;
    }
    Ok(())
}

fn parse_choices(input: ParseStream, owner: &Key) -> Result<Vec<Choice>> {
    let mut seen = HashSet::new();
    let mut choices = Vec::new();

    while !input.is_empty() {
        let key = parse_key(input)?;
        let _colon: Token![:] = input.parse()?;
        let class: Expr = input.parse()?;

        if !seen.insert(key.name.clone()) {
            return Err(syn::Error::new(
                key.span,
                format!("duplicate choice `{}` in config key `{}`", key.name, owner.name),
            ));
        }

        choices.push(Choice { key, class });
        parse_separator(input)?;
    }

    Ok(choices)
}

impl Parse for ConfigInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // 1. Optional header: `crate = path;`
        let mut krate: Path = parse_quote!(::swconfig);
        if input.peek(Token![crate]) && input.peek2(Token![=]) {
            let _crate: Token![crate] = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            krate = input.parse()?;
            let _semi: Token![;] = input.parse()?;
        }

        // 2. Entries until input is exhausted
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        while !input.is_empty() {
            let key = parse_key(input)?;
            let _colon: Token![:] = input.parse()?;

            if key.name == "_" {
                return Err(syn::Error::new(key.span, "variant key has no name"));
            }
            if !seen.insert(key.name.clone()) {
                return Err(syn::Error::new(
                    key.span,
                    format!("duplicate config key `{}`", key.name),
                ));
            }

            let value = if input.peek(token::Brace) {
                let content;
                braced!(content in input);
                EntryValue::Choices(parse_choices(&content, &key)?)
            } else {
                EntryValue::Class(input.parse()?)
            };

            entries.push(Entry { key, value });
            parse_separator(input)?;
        }

        Ok(ConfigInput { krate, entries })
    }
}
