use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBook;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl",
                        "BGS Ledger"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-2",
                    li { Link { to: Route::Factions {}, "Factions" } }
                    li { Link { to: Route::Systems {}, "Systems" } }
                    li { Link { to: Route::Stations {}, "Stations" } }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button { class: "btn btn-outline flex gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaBook
                        }
                        p { "API Docs" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
