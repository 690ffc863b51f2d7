use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "BGS Ledger" }
        Meta {
            name: "description",
            content: "Background simulation data for factions, systems and stations."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                p { class: "text-2xl", "BGS Ledger" }
                p {
                    "Search the tracked factions, systems and stations, or query the API directly. Listings include influence, states and history recorded by contributors."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li { Link { to: Route::Factions {}, class: "btn btn-primary w-32", "Factions" } }
                    li { Link { to: Route::Systems {}, class: "btn btn-primary w-32", "Systems" } }
                    li { Link { to: Route::Stations {}, class: "btn btn-primary w-32", "Stations" } }
                    li {
                        a { href: "/api/docs",
                            button { class: "btn btn-secondary w-32", "API Docs" }
                        }
                    }
                }
            }
        }
    )
}
