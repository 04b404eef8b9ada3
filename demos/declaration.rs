//! Parses a configuration declaration and resolves it for a few prop sets.
//!
//! Run with `cargo run --example declaration`.

use styledwind_rs::{Props, parse_config, resolve};

const BADGE: &str = r#"
    /* shared by every badge */
    base: "inline-block rounded px-2 text-xs";
    tone {
        info: "bg-sky-100 text-sky-800";
        warn: "bg-amber-100 text-amber-800";
    }
    outlined: "border";
    _dark: "bg-opacity-20";
"#;

fn main() -> Result<(), styledwind_rs::ConfigError> {
    let config = parse_config(BADGE)?;

    for props in [
        Props::new(),
        Props::new().with("tone", "info"),
        Props::new().with("tone", "warn").with("outlined", true),
        Props::new().with("tone", "unknown"),
    ] {
        let resolution = resolve(&config, &props);
        println!("{:?} -> {:?}", props, resolution.class_name);
    }

    Ok(())
}
