use dioxus::prelude::*;

/// Full-height content area below the navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen p-4 {class}",
            {children}
        }
    )
}
