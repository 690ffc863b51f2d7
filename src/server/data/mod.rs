//! Data access layer repositories.
//!
//! Repositories borrow the shared connection and expose the queries the services need,
//! grouped by entity. History tables share [`history_rows`] so every history read
//! applies windows and counts the same way.

pub mod faction;
pub mod station;
pub mod system;
pub mod user;

#[cfg(test)]
mod tests;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};

use crate::server::query::history::HistoryRequest;

/// Applies `request` to a history select and returns rows in ascending `updated_at` order.
///
/// Windows are inclusive at both ends. A count keeps the most recent rows.
pub(crate) async fn history_rows<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    updated_at: E::Column,
    request: &HistoryRequest,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
{
    match *request {
        HistoryRequest::Window { from, to } => {
            select
                .filter(updated_at.between(from, to))
                .order_by_asc(updated_at)
                .all(db)
                .await
        }
        HistoryRequest::Latest(count) => {
            let mut rows = select
                .order_by_desc(updated_at)
                .limit(count)
                .all(db)
                .await?;
            rows.reverse();

            Ok(rows)
        }
    }
}
