//! Renders a button in its different states.
//!
//! Run with `cargo run --example button`.

use styledwind_rs::prelude::*;

fn main() -> styledwind_rs::styledwind::Result<()> {
    let button = Styled::element(
        "button",
        config! {
            base: "inline-flex items-center px-4 py-2 font-medium",
            rounded: "rounded-full",
            disabled: "opacity-50 cursor-not-allowed",
            intent: {
                primary: "bg-blue-600 text-white",
                danger: "bg-red-600 text-white",
            },
            _hover: "brightness-110",
            _focus: "ring-2 ring-offset-2",
        },
    )?;

    let states = [
        ("default", props! {}),
        ("primary", props! { intent: "primary", "type": "submit" }),
        ("rounded danger", props! { intent: "danger", rounded: true }),
        ("disabled", props! { intent: "primary", disabled: true, class_name: "w-full" }),
    ];

    for (label, props) in states {
        println!("{label:>15}: {}", button.render(props, None));
    }

    Ok(())
}
