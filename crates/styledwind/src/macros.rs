//! Literal syntax for props and configurations.

/// Builds [`Props`](crate::Props) from `key: value` pairs.
///
/// Keys are identifiers or string literals (for names such as `aria-label`).
/// Values are anything convertible into a [`PropValue`](crate::PropValue).
/// `class`, `className`, and `class_name` set the passthrough class.
///
/// # Example
///
/// ```rust
/// use styledwind::props;
///
/// let props = props! {
///     rounded: true,
///     color: "red",
///     "aria-label": "Close",
///     class_name: "mt-4",
/// };
///
/// assert_eq!(props.keys().collect::<Vec<_>>(), ["rounded", "color", "aria-label"]);
/// assert_eq!(props.class_name(), Some("mt-4"));
/// ```
#[macro_export]
macro_rules! props {
    (@key $key:ident) => {
        stringify!($key)
    };
    (@key $key:literal) => {
        $key
    };

    () => {
        $crate::Props::new()
    };

    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $(
            props.insert($crate::props!(@key $key), $value);
        )+
        props
    }};
}

/// Builds a [`Config`](swconfig::Config) from a literal declaration.
///
/// Entries are `key: "classes"` or `key: { choice: "classes", ... }`,
/// separated by commas. Class values may be any expression convertible into a
/// `String`. Duplicate keys and duplicate choices are compile errors.
///
/// # Example
///
/// ```rust
/// use styledwind::config;
/// use styledwind::{ChoiceMap, Config};
///
/// const RING: &str = "ring-2 ring-offset-2";
///
/// let config = config! {
///     base: "inline-flex",
///     color: { red: "text-red-500", blue: "text-blue-500" },
///     _focus: RING,
///     "_motion-safe": "transition",
/// };
///
/// let expected = Config::new()
///     .with_base("inline-flex")
///     .with_choices("color", ChoiceMap::new().with("red", "text-red-500").with("blue", "text-blue-500"))
///     .with_variant("focus", RING)
///     .with_variant("motion-safe", "transition");
/// assert_eq!(config, expected);
/// ```
#[macro_export]
macro_rules! config {
    ($($tokens:tt)*) => {
        $crate::__private::config!(crate = $crate::swconfig; $($tokens)*)
    };
}
