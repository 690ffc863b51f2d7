use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ListingStatus, Page, Pager, SearchBox},
        util::listing::use_listing,
    },
    model::faction::FactionDto,
};

#[component]
pub fn Factions() -> Element {
    let begins_with = use_signal(String::new);
    let page = use_signal(|| 1u64);
    let listing = use_listing::<FactionDto>("/api/factions", begins_with, page);

    rsx!(
        Title { "Factions | BGS Ledger" }
        Page { class: "flex flex-col gap-4 max-w-[1440px] mx-auto",
            SearchBox { placeholder: "Faction name", begins_with, page }
            match &*listing.read() {
                None => rsx!(ListingStatus { message: "Type a faction name to search" }),
                Some(Err(err)) => rsx!(ListingStatus { message: err.clone() }),
                Some(Ok(result)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Faction" }
                                    th { "Allegiance" }
                                    th { "Government" }
                                    th { "Systems" }
                                    th { "Updated" }
                                }
                            }
                            tbody {
                                for faction in result.docs.iter() {
                                    tr { key: "{faction.id}",
                                        td { "{faction.name}" }
                                        td { "{faction.allegiance}" }
                                        td { "{faction.government}" }
                                        td {
                                            {faction.faction_presence.as_ref().map_or(0, Vec::len).to_string()}
                                        }
                                        td { "{faction.updated_at}" }
                                    }
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
