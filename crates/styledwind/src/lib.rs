//! Conditional utility classes for styled elements.
//!
//! A [`Styled`] unit binds a [`Config`] to an element. At render time the
//! configuration is resolved against the supplied [`Props`] into a single
//! class string, configuration keys are stripped from the props, and the
//! result comes back as an [`Element`] description for the host framework to
//! mount.
//!
//! ```rust
//! use styledwind::{config, props, Styled};
//!
//! let button = Styled::element("button", config! {
//!     base: "inline-flex px-4",
//!     rounded: "rounded-full",
//!     color: { red: "bg-red-500", blue: "bg-blue-500" },
//!     _hover: "underline",
//! }).unwrap();
//!
//! let element = button.render(props! { rounded: true, color: "blue", id: "save" }, None);
//! assert_eq!(
//!     element.to_html_open_tag(),
//!     r#"<button class="inline-flex px-4 rounded-full bg-blue-500 hover:underline" id="save">"#
//! );
//! ```
//!
//! Units compose with [`Styled::wrap`]: the outer configuration is merged into
//! the inner one and only the innermost unit produces an element.

pub mod class_resolver;
pub mod dom;
pub mod element;
pub mod error;
mod log_init;
mod macros;
pub mod props;
pub mod styled;

pub use class_resolver::{Resolution, join_class_names, resolve};
pub use dom::{is_dom_element, is_valid_attribute_name, is_valid_element_name};
pub use element::{Element, NodeRef};
pub use error::{Result, StyledError};
pub use log_init::{init_logger, init_logger_with_level};
pub use props::{PropValue, Props};
pub use styled::{Styled, Target};

// Re-export the log crate so users can use styledwind::log::info!, etc.
pub use log;
pub use swconfig;
pub use swconfig::{ChoiceMap, Config, ConfigValue, merge_configs, parse_config};

#[doc(hidden)]
pub mod __private {
    pub use styledwind_macros::config;
}
