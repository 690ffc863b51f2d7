use dioxus::prelude::*;

/// Previous/next controls for a paginated listing. Pages start at 1.
#[component]
pub fn Pager(mut page: Signal<u64>, pages: u64, total: u64) -> Element {
    let current = page();

    rsx!(
        div { class: "flex items-center justify-between gap-2 py-2",
            p { class: "text-sm",
                "{total} results"
            }
            div { class: "join",
                button {
                    class: "join-item btn btn-sm",
                    disabled: current <= 1,
                    onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                    "«"
                }
                button { class: "join-item btn btn-sm",
                    "Page {current} of {pages.max(1)}"
                }
                button {
                    class: "join-item btn btn-sm",
                    disabled: current >= pages,
                    onclick: move |_| page.set(current + 1),
                    "»"
                }
            }
        }
    )
}
