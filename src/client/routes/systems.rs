use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ListingStatus, Page, Pager, SearchBox},
        util::listing::{use_ingame_ids, use_listing},
    },
    model::{ingame_ids::IngameIdsDto, system::SystemDto},
};

#[component]
pub fn Systems() -> Element {
    let begins_with = use_signal(String::new);
    let page = use_signal(|| 1u64);
    let listing = use_listing::<SystemDto>("/api/systems", begins_with, page);
    let ids = use_ingame_ids();

    rsx!(
        Title { "Systems | BGS Ledger" }
        Page { class: "flex flex-col gap-4 max-w-[1440px] mx-auto",
            SearchBox { placeholder: "System name", begins_with, page }
            match &*listing.read() {
                None => rsx!(ListingStatus { message: "Type a system name to search" }),
                Some(Err(err)) => rsx!(ListingStatus { message: err.clone() }),
                Some(Ok(result)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "System" }
                                    th { "Population" }
                                    th { "Government" }
                                    th { "Allegiance" }
                                    th { "Economy" }
                                    th { "Security" }
                                    th { "Controlling faction" }
                                    th { "Factions" }
                                }
                            }
                            tbody {
                                for system in result.docs.iter() {
                                    SystemRow { key: "{system.id}", system: system.clone(), ids: ids() }
                                }
                            }
                        }
                    }
                    Pager { page, pages: result.pages, total: result.total }
                ),
            }
        }
    )
}

#[component]
fn SystemRow(system: SystemDto, ids: IngameIdsDto) -> Element {
    let government = IngameIdsDto::display(&ids.government, &system.government);
    let allegiance = IngameIdsDto::display(&ids.superpower, &system.allegiance);
    let economy = IngameIdsDto::display(&ids.economy, &system.primary_economy);
    let security = IngameIdsDto::display(&ids.security, &system.security);
    let controlling = system.controlling_minor_faction.clone().unwrap_or_default();

    rsx!(
        tr {
            td { "{system.name}" }
            td { "{system.population}" }
            td { "{government}" }
            td { "{allegiance}" }
            td { "{economy}" }
            td { "{security}" }
            td { "{controlling}" }
            td { "{system.factions.len()}" }
        }
    )
}
