#[cfg(feature = "web")]
use serde::de::DeserializeOwned;

#[cfg(feature = "web")]
use crate::model::{api::PageDto, ingame_ids::IngameIdsDto};

/// Retrieve one page of `endpoint` whose names start with `begins_with`
///
/// An empty prefix lists everything, which the API only allows for administrators.
#[cfg(feature = "web")]
pub async fn get_page<T: DeserializeOwned>(
    endpoint: &str,
    begins_with: &str,
    page: u64,
) -> Result<PageDto<T>, String> {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    if !begins_with.is_empty() {
        query.append_pair("beginsWith", begins_with);
    }

    get_json(&format!("{}?{}", endpoint, query.finish())).await
}

/// Retrieve the in-game identifier tables used to label station attributes
#[cfg(feature = "web")]
pub async fn get_ingame_ids() -> Result<IngameIdsDto, String> {
    get_json("/api/ingameids").await
}

#[cfg(feature = "web")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::Request;

    let response = Request::get(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response from {}: {}", url, e)),
        _ => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(error_dto.error)
            } else {
                Err(format!("Request failed with status {}", response.status()))
            }
        }
    }
}
