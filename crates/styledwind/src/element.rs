//! The element description handed back to the host framework.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dom::{is_valid_attribute_name, is_valid_element_name};
use crate::error::{Result, StyledError};
use crate::props::{PropValue, Props};

static NEXT_NODE_REF: AtomicU64 = AtomicU64::new(1);

/// An opaque handle to the platform element a styled unit renders.
///
/// The host attaches the mounted node to the handle's id. Handles compare by
/// identity: two calls to [`NodeRef::new`] never produce equal handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(u64);

impl NodeRef {
    pub fn new() -> Self {
        NodeRef(NEXT_NODE_REF.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

/// A terminal element ready to be mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    props: Props,
    class_name: String,
    node_ref: Option<NodeRef>,
}

impl Element {
    /// Builds an element description, rejecting a malformed tag.
    pub fn new(
        tag: impl Into<String>,
        props: Props,
        class_name: impl Into<String>,
        node_ref: Option<NodeRef>,
    ) -> Result<Self> {
        let tag = tag.into();
        if !is_valid_element_name(&tag) {
            return Err(StyledError::InvalidElementName(tag));
        }
        Ok(Self::from_parts(tag, props, class_name, node_ref))
    }

    /// The tag must already be a valid element name.
    pub(crate) fn from_parts(
        tag: impl Into<String>,
        props: Props,
        class_name: impl Into<String>,
        node_ref: Option<NodeRef>,
    ) -> Self {
        Self {
            tag: tag.into(),
            props,
            class_name: class_name.into(),
            node_ref,
        }
    }

    /// The platform element name, e.g. `button`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes passed through to the element. Configuration keys have
    /// already been removed.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// The computed class string.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn node_ref(&self) -> Option<NodeRef> {
        self.node_ref
    }

    /// Renders the element's opening tag, e.g.
    /// `<button class="btn" type="submit" disabled>`.
    ///
    /// `true` booleans become bare attributes and `false` ones are omitted.
    /// Attribute values are HTML-escaped. Props whose names are not valid
    /// attribute names are left out of the tag.
    pub fn to_html_open_tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.class_name.is_empty() {
            write!(f, " class=\"{}\"", Escaped(&self.class_name))?;
        }
        for (key, value) in self.props.iter() {
            if !is_valid_attribute_name(key) {
                log::warn!("RENDER: dropping malformed attribute name {key:?} from <{}>", self.tag);
                continue;
            }
            match value {
                PropValue::Bool(true) => write!(f, " {key}")?,
                PropValue::Bool(false) => {}
                PropValue::Str(s) => write!(f, " {key}=\"{}\"", Escaped(s))?,
                PropValue::Int(n) => write!(f, " {key}=\"{n}\"")?,
            }
        }
        f.write_str(">")
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
