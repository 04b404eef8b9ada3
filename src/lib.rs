//! styledwind-rs: conditional utility classes for composable styled elements.
//!
//! This crate bundles the workspace behind one dependency:
//!
//! - [`swconfig`]: configuration model, merging, and declaration parsing
//! - [`styledwind`]: props, class resolution, and styled units
//!
//! ```rust
//! use styledwind_rs::prelude::*;
//!
//! let card = Styled::element("div", config! { base: "rounded p-4", raised: "shadow-lg" }).unwrap();
//! let element = card.render(props! { raised: true }, None);
//! assert_eq!(element.class_name(), "rounded p-4 shadow-lg");
//! ```

pub use styledwind;
pub use swconfig;

pub use styledwind::{
    Element, NodeRef, PropValue, Props, Resolution, Styled, StyledError, Target, config,
    init_logger, join_class_names, props, resolve,
};
pub use swconfig::{
    ChoiceMap, Config, ConfigError, ConfigValue, load_config, merge_configs, parse_config,
};

/// The types needed to declare and render styled units.
pub mod prelude {
    pub use styledwind::{Element, NodeRef, Props, Styled, config, props};
    pub use swconfig::{ChoiceMap, Config};
}
