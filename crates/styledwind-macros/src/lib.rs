//! Procedural macros for styledwind.
//!
//! This crate provides the `config!` proc macro for declaring variant class
//! configurations. Use it through `styledwind::config!`, which supplies the
//! path to the configuration types.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod codegen;
mod parse;

/// Builds a configuration from a literal declaration.
///
/// # Syntax
///
/// ```ignore
/// config! {
///     base: "inline-flex px-4",                  // always applied
///     rounded: "rounded-full",                    // applied when `rounded` is truthy
///     color: { red: "bg-red", blue: "bg-blue" },  // selected by the value of `color`
///     _hover: "underline",                        // variant: `hover:underline`
///     "_motion-safe": TRANSITION,                 // string keys for dashed names
/// }
/// ```
///
/// An optional `crate = path;` header names the crate holding `Config` and
/// `ChoiceMap` (defaults to `::swconfig`).
///
/// # Expansion
///
/// Entries become builder calls in declaration order:
/// `Config::new().with("base", String::from("inline-flex px-4"))...`
#[proc_macro]
pub fn config(input: TokenStream) -> TokenStream {
    let declaration = parse_macro_input!(input as parse::ConfigInput);
    codegen::generate(declaration).into()
}
