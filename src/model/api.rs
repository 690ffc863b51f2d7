use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PageDto<T> {
    /// Entities on this page, at most `limit` of them
    pub docs: Vec<T>,
    /// Number of entities matching the query across all pages
    pub total: u64,
    /// Number of pages available
    pub pages: u64,
    /// Current page, starting at 1
    pub page: u64,
    /// Page size
    pub limit: u64,
}
