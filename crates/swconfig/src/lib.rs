//! # swconfig - Variant Class Configurations
//!
//! A configuration describes which utility classes a styled element receives.
//! Every key maps to either a class string or a set of choices:
//!
//! - **`base`**: the class always applied, first in the output
//! - **Flag keys** (`rounded: "rounded-full"`): applied when the prop is truthy
//! - **Choice keys** (`color { red: "text-red-500" }`): applied by prop value
//! - **Variant keys** (`_hover: "underline"`): always applied, every class
//!   prefixed with the variant name (`hover:underline`)
//!
//! This crate provides:
//!
//! - **Model**: [`Config`], [`ConfigValue`], [`ChoiceMap`]
//! - **Merging**: [`merge_configs`] combines a declared configuration with one
//!   forwarded from an outer composition layer
//! - **Parsing**: [`parse_config`] reads the textual declaration format
//!
//! ## Quick Start
//!
//! ```rust
//! use swconfig::{merge_configs, parse_config};
//!
//! let button = parse_config(r#"
//!     base: "inline-flex";
//!     rounded: "rounded";
//!     _hover: "underline";
//! "#).expect("valid declaration");
//!
//! let pill = parse_config(r#"rounded: "rounded-full";"#).unwrap();
//!
//! let merged = merge_configs(&button, Some(&pill));
//! assert_eq!(merged.get("rounded").and_then(|v| v.as_class()), Some("rounded rounded-full"));
//! ```
//!
//! ## Modules
//!
//! - [`config`]: configuration types and builders
//! - [`merge`]: the config merger
//! - [`parser`]: declaration parsing
//! - [`variants`]: Tailwind's built-in variant names
//! - [`error`]: error types for declaration failures

pub mod config;
pub mod error;
pub mod merge;
pub mod parser;
pub mod variants;

pub use config::{BASE_KEY, ChoiceMap, Config, ConfigValue, VARIANT_SIGIL, variant_name};
pub use error::{ConfigError, Result};
pub use merge::merge_configs;
pub use parser::{load_config, parse_config};
pub use variants::is_known_variant;

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(source: &str) -> Result<Self> {
        parse_config(source)
    }
}
