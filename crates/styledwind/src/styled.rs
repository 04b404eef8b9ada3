//! Styled units and their composition.
//!
//! A [`Styled`] unit pairs a configuration with a render target: a platform
//! element (`button`, `div`, ...) or another styled unit. Wrapping a unit
//! extends its configuration rather than nesting elements, so a chain of any
//! length renders exactly one element:
//!
//! ```text
//! PrimaryButton { base: "bg-blue-500" }
//!   └── Button { base: "px-4", rounded: "rounded" }
//!         └── <button>
//! ```
//!
//! Each non-terminal layer merges its own configuration with the one inherited
//! from the layer above and forwards the result inward. The whole props bag
//! crosses every layer boundary, not just the caller's class: no layer but the
//! terminal one resolves classes, so a prop selecting an outer layer's entry has
//! to reach it. Same-named keys are merged into one entry before resolution, so
//! every prop is still interpreted exactly once.
//!
//! The terminal layer resolves classes against the fully merged configuration,
//! strips configuration keys from the props, and appends the caller's class.

use std::sync::Arc;

use swconfig::{Config, merge_configs};

use crate::class_resolver::{join_class_names, resolve};
use crate::dom::{is_dom_element, is_valid_element_name};
use crate::element::{Element, NodeRef};
use crate::error::{Result, StyledError};
use crate::props::Props;

/// What a styled unit renders into.
#[derive(Clone, Debug)]
pub enum Target {
    /// A platform element, by name.
    Element(String),
    /// Another styled unit, which receives the merged configuration.
    Styled(Arc<Styled>),
}

/// A configuration bound to a render target.
///
/// # Examples
///
/// ```rust
/// use styledwind::{NodeRef, Props, Styled};
/// use swconfig::Config;
///
/// let button = Styled::element("button", Config::new().with_base("px-4")).unwrap();
/// let primary = Styled::wrap(button, Config::new().with_base("bg-blue-500"));
///
/// let node_ref = NodeRef::new();
/// let element = primary.render(Props::new().with("type", "submit"), Some(node_ref));
///
/// assert_eq!(element.tag(), "button");
/// assert_eq!(element.class_name(), "px-4 bg-blue-500");
/// assert_eq!(element.node_ref(), Some(node_ref));
/// ```
#[derive(Clone, Debug)]
pub struct Styled {
    target: Target,
    config: Config,
    display_name: Option<String>,
}

impl Styled {
    /// A terminal unit rendering `tag`. Any well-formed tag is accepted,
    /// including custom elements.
    pub fn new(tag: impl Into<String>, config: Config) -> Result<Self> {
        let tag = tag.into();
        if !is_valid_element_name(&tag) {
            return Err(StyledError::InvalidElementName(tag));
        }
        Ok(Self::terminal(tag, config))
    }

    /// A terminal unit rendering a known HTML or SVG element.
    pub fn element(tag: &str, config: Config) -> Result<Self> {
        if !is_dom_element(tag) {
            return Err(StyledError::UnknownElement(tag.to_string()));
        }
        Ok(Self::terminal(tag.to_string(), config))
    }

    fn terminal(tag: String, config: Config) -> Self {
        Self {
            target: Target::Element(tag),
            config,
            display_name: None,
        }
    }

    /// A unit that extends `inner` with `config`.
    pub fn wrap(inner: impl Into<Arc<Styled>>, config: Config) -> Self {
        Self {
            target: Target::Styled(inner.into()),
            config,
            display_name: None,
        }
    }

    /// Names the unit in log output.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The configuration declared at this layer.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Whether this unit renders a platform element directly.
    pub fn is_terminal(&self) -> bool {
        matches!(self.target, Target::Element(_))
    }

    /// The platform element name at the end of the chain.
    pub fn tag(&self) -> &str {
        match &self.target {
            Target::Element(tag) => tag.as_str(),
            Target::Styled(inner) => inner.tag(),
        }
    }

    /// The configuration the terminal layer resolves against, given the
    /// configuration inherited from above this unit.
    pub fn effective_config(&self, inherited: Option<&Config>) -> Config {
        let merged = merge_configs(&self.config, inherited);
        match &self.target {
            Target::Element(_) => merged,
            Target::Styled(inner) => inner.effective_config(Some(&merged)),
        }
    }

    /// Renders the unit as the outermost layer.
    pub fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Element {
        self.render_inherited(props, None, node_ref)
    }

    /// Renders the unit with a configuration inherited from an outer layer.
    ///
    /// `node_ref` reaches the terminal element unchanged.
    pub fn render_inherited(
        &self,
        props: Props,
        inherited: Option<&Config>,
        node_ref: Option<NodeRef>,
    ) -> Element {
        let merged = merge_configs(&self.config, inherited);

        match &self.target {
            Target::Styled(inner) => {
                log::debug!(
                    "COMPOSE: '{}' forwards {} keys to '{}'",
                    self.name(),
                    merged.len(),
                    inner.name()
                );
                inner.render_inherited(props, Some(&merged), node_ref)
            }
            Target::Element(tag) => self.render_terminal(tag, props, &merged, node_ref),
        }
    }

    fn render_terminal(
        &self,
        tag: &str,
        props: Props,
        config: &Config,
        node_ref: Option<NodeRef>,
    ) -> Element {
        let resolution = resolve(config, &props);
        let class_name = join_class_names([
            resolution.class_name.as_str(),
            props.class_name().unwrap_or(""),
        ]);

        log::debug!("RENDER: '{}' <{tag} class=\"{class_name}\">", self.name());

        let props = props.into_passthrough(&resolution.consumed);
        Element::from_parts(tag, props, class_name, node_ref)
    }

    fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_else(|| self.tag())
    }
}
