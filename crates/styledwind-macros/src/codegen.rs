//! Code generation for the config! macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{Choice, ConfigInput, Entry, EntryValue};

/// Generate a `Config` builder chain from the parsed declaration.
pub fn generate(input: ConfigInput) -> TokenStream {
    let krate = &input.krate;
    let calls: Vec<TokenStream> = input
        .entries
        .iter()
        .map(|entry| generate_entry(krate, entry))
        .collect();

    quote! {
        #krate::Config::new() #(#calls)*
    }
}

/// Generate the `.with(...)` / `.with_choices(...)` call for one entry.
fn generate_entry(krate: &syn::Path, entry: &Entry) -> TokenStream {
    let key = &entry.key.name;

    match &entry.value {
        EntryValue::Class(class) => {
            quote! { .with(#key, ::std::string::String::from(#class)) }
        }
        EntryValue::Choices(choices) => {
            let choice_calls = generate_choices(choices);
            quote! { .with_choices(#key, #krate::ChoiceMap::new() #(#choice_calls)*) }
        }
    }
}

fn generate_choices(choices: &[Choice]) -> Vec<TokenStream> {
    choices
        .iter()
        .map(|choice| {
            let key = &choice.key.name;
            let class = &choice.class;
            quote! { .with(#key, ::std::string::String::from(#class)) }
        })
        .collect()
}
