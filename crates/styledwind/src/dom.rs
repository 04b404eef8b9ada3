//! HTML and SVG element names a styled unit may render.
//!
//! Only [`Styled::element`](crate::Styled::element) consults this table;
//! [`Styled::new`](crate::Styled::new) accepts any well-formed tag, including
//! custom elements.

use phf::phf_set;

pub static DOM_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "a", "abbr", "address", "area", "article", "aside", "audio",
    "b", "base", "bdi", "bdo", "big", "blockquote", "body", "br", "button",
    "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html",
    "i", "iframe", "img", "input", "ins",
    "kbd", "keygen",
    "label", "legend", "li", "link",
    "main", "map", "mark", "menu", "menuitem", "meta", "meter",
    "nav", "noscript",
    "object", "ol", "optgroup", "option", "output",
    "p", "param", "picture", "pre", "progress",
    "q",
    "rp", "rt", "ruby",
    "s", "samp", "script", "section", "select", "small", "source", "span",
    "strong", "style", "sub", "summary", "sup",
    "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead",
    "time", "title", "tr", "track",
    "u", "ul",
    "var", "video",
    "wbr",
    // SVG
    "circle", "clipPath", "defs", "ellipse", "foreignObject", "g", "image",
    "line", "linearGradient", "marker", "mask", "path", "pattern", "polygon",
    "polyline", "radialGradient", "rect", "stop", "svg", "text", "tspan",
};

pub fn is_dom_element(name: &str) -> bool {
    DOM_ELEMENTS.contains(name)
}

/// Whether `name` can be written as an attribute name in an opening tag.
///
/// Rejects the empty string, whitespace, control characters, and
/// `"` `'` `<` `>` `/` `=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Whether `name` can be written as a tag name: an ASCII letter followed by
/// characters valid in an attribute name.
pub fn is_valid_element_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic()) && is_valid_attribute_name(name)
}
