//! Variant names understood by Tailwind out of the box.
//!
//! Variant keys (`_hover`, `_md`, ...) are not restricted to this table since
//! projects can register their own variants; the parser only warns about
//! names it does not recognize.

use phf::phf_set;

/// Responsive breakpoints, color scheme, and state variants.
pub static KNOWN_VARIANTS: phf::Set<&'static str> = phf_set! {
    "sm",
    "md",
    "lg",
    "xl",
    "2xl",
    "dark",
    "motion-safe",
    "motion-reduce",
    "first",
    "last",
    "odd",
    "even",
    "visited",
    "checked",
    "group-hover",
    "group-focus",
    "focus-within",
    "hover",
    "focus",
    "focus-visible",
    "active",
    "disabled",
};

pub fn is_known_variant(name: &str) -> bool {
    KNOWN_VARIANTS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_breakpoints_and_states() {
        assert!(is_known_variant("md"));
        assert!(is_known_variant("group-hover"));
        assert!(is_known_variant("2xl"));
        assert!(!is_known_variant("hocus"));
        assert!(!is_known_variant("Hover"));
    }
}
