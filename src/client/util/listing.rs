use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::model::{api::PageDto, ingame_ids::IngameIdsDto};

pub type Listing<T> = Option<Result<PageDto<T>, String>>;

/// Keeps one page of `endpoint` in sync with the search prefix and page signals.
///
/// Nothing is fetched while the prefix is empty.
pub fn use_listing<T>(
    endpoint: &'static str,
    begins_with: Signal<String>,
    page: Signal<u64>,
) -> Signal<Listing<T>>
where
    T: DeserializeOwned + 'static,
{
    #[allow(unused_mut)]
    let mut listing = use_signal(|| None::<Result<PageDto<T>, String>>);

    #[cfg(feature = "web")]
    {
        use crate::client::util::api::get_page;

        let _ = use_resource(move || async move {
            let prefix = begins_with();
            let current = page();

            if prefix.trim().is_empty() {
                listing.set(None);
                return;
            }

            listing.set(Some(get_page::<T>(endpoint, prefix.trim(), current).await));
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = (endpoint, begins_with, page);

    listing
}

/// Loads the in-game id tables once per component.
///
/// Labels fall back to the raw identifiers until the tables arrive.
pub fn use_ingame_ids() -> Signal<IngameIdsDto> {
    #[allow(unused_mut)]
    let mut ids = use_signal(IngameIdsDto::default);

    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api::get_ingame_ids;

        let _ = use_resource(move || async move {
            match get_ingame_ids().await {
                Ok(tables) => ids.set(tables),
                Err(err) => tracing::error!("Failed to load in-game ids: {}", err),
            }
        });
    }

    ids
}
