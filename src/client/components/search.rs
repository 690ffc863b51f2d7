use dioxus::prelude::*;

/// Name prefix input; editing it returns the listing to the first page.
#[component]
pub fn SearchBox(
    placeholder: &'static str,
    mut begins_with: Signal<String>,
    mut page: Signal<u64>,
) -> Element {
    rsx!(
        input {
            class: "input input-bordered w-full max-w-md",
            r#type: "search",
            placeholder: placeholder,
            value: "{begins_with}",
            oninput: move |event| {
                begins_with.set(event.value());
                page.set(1);
            }
        }
    )
}

/// Status line shown in place of a table that has nothing to show yet.
#[component]
pub fn ListingStatus(#[props(into)] message: String) -> Element {
    rsx!(
        p { class: "text-sm opacity-70 py-4",
            "{message}"
        }
    )
}
