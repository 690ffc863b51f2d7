use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ListingStatus, Page, Pager, SearchBox},
        util::listing::{use_ingame_ids, use_listing},
    },
    model::{ingame_ids::IngameIdsDto, station::StationDto},
};

#[component]
pub fn Stations() -> Element {
    let begins_with = use_signal(String::new);
    let page = use_signal(|| 1u64);
    let listing = use_listing::<StationDto>("/api/stations", begins_with, page);
    let ids = use_ingame_ids();

    rsx!(
        Title { "Stations | BGS Ledger" }
        Page { class: "flex flex-col gap-4 max-w-[1440px] mx-auto",
            SearchBox { placeholder: "Station name", begins_with, page }
            match &*listing.read() {
                None => rsx!(ListingStatus { message: "Type a station name to search" }),
                Some(Err(err)) => rsx!(ListingStatus { message: err.clone() }),
                Some(Ok(result)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Station" }
                                    th { "Type" }
                                    th { "System" }
                                    th { "Government" }
                                    th { "Allegiance" }
                                    th { "Economy" }
                                    th { "State" }
                                }
                            }
                            tbody {
                                for station in result.docs.iter() {
                                    StationRow { key: "{station.id}", station: station.clone(), ids: ids() }
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
fn StationRow(station: StationDto, ids: IngameIdsDto) -> Element {
    let station_type = IngameIdsDto::display(&ids.station, &station.station_type);
    let government = IngameIdsDto::display(&ids.government, &station.government);
    let allegiance = IngameIdsDto::display(&ids.superpower, &station.allegiance);
    let economy = IngameIdsDto::display(&ids.economy, &station.economy);
    let state = IngameIdsDto::display(&ids.state, &station.state);

    rsx!(
        tr {
            td { "{station.name}" }
            td { "{station_type}" }
            td { "{station.system}" }
            td { "{government}" }
            td { "{allegiance}" }
            td { "{economy}" }
            td { "{state}" }
        }
    )
}
