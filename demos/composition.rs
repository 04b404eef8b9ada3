//! Builds a small component hierarchy by wrapping styled units.
//!
//! Run with `cargo run --example composition`.

use std::sync::Arc;

use styledwind_rs::prelude::*;

fn main() -> styledwind_rs::styledwind::Result<()> {
    styledwind_rs::init_logger("composition.log")?;

    let text = Arc::new(
        Styled::element(
            "p",
            config! {
                base: "text-base",
                muted: "text-gray-500",
                size: { sm: "text-sm", lg: "text-lg" },
            },
        )?
        .with_display_name("Text"),
    );

    let caption = Styled::wrap(
        Arc::clone(&text),
        config! {
            base: "italic",
            size: { sm: "leading-tight" },
        },
    )
    .with_display_name("Caption");

    let node_ref = NodeRef::new();
    let element = caption.render(props! { size: "sm", muted: true, id: "caption" }, Some(node_ref));

    println!("{element}");
    println!("node ref forwarded: {}", element.node_ref() == Some(node_ref));
    println!("effective config:\n{}", caption.effective_config(None));

    Ok(())
}
