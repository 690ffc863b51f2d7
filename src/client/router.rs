use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Factions, Home, NotFound, Stations, Systems},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/factions")]
    Factions {},

    #[route("/systems")]
    Systems {},

    #[route("/stations")]
    Stations {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
