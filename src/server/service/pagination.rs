//! Fixed-size, 1-indexed pagination under a time budget.

use std::time::Duration;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::{
    model::api::PageDto,
    server::error::{query::QueryError, Error},
};

pub const PAGE_SIZE: u64 = 10;

/// One page of base rows, before enrichment.
#[derive(Debug)]
pub struct Page<M> {
    pub docs: Vec<M>,
    pub total: u64,
    pub pages: u64,
    pub page: u64,
}

impl<M> Page<M> {
    /// Wraps already-built views in the response envelope.
    pub fn into_dto<T>(self, docs: Vec<T>) -> PageDto<T> {
        PageDto {
            docs,
            total: self.total,
            pages: self.pages,
            page: self.page,
            limit: PAGE_SIZE,
        }
    }
}

/// Number of pages needed for `total` entities.
pub fn page_count(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

/// Counts the matches of `select` and fetches the requested page.
///
/// `select` must already be ordered so pages are stable. Pages past the end are empty.
///
/// # Returns
/// - `Ok(Page)` - The page with the total match count
/// - `Err(Error::QueryError(QueryError::Timeout))` - Counting and fetching took longer than `budget`
/// - `Err(Error::DbErr)` - Database error
pub async fn paginate<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    page: u64,
    budget: Duration,
) -> Result<Page<E::Model>, Error>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let page = page.max(1);

    let fetch = async {
        let paginator = select.paginate(db, PAGE_SIZE);
        let total = paginator.num_items().await?;

        let in_range = (page - 1)
            .checked_mul(PAGE_SIZE)
            .is_some_and(|offset| offset < total);
        let docs = if in_range {
            paginator.fetch_page(page - 1).await?
        } else {
            Vec::new()
        };

        Ok::<_, DbErr>((total, docs))
    };

    let (total, docs) = tokio::time::timeout(budget, fetch)
        .await
        .map_err(|_| QueryError::Timeout(budget))??;

    Ok(Page {
        docs,
        total,
        pages: page_count(total),
        page,
    })
}

#[cfg(test)]
mod tests {
    use bgs_test_utils::prelude::*;
    use sea_orm::{EntityTrait, QueryOrder};

    use super::*;

    /// Expect page counts to round up
    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    fn budget() -> Duration {
        Duration::from_secs(60)
    }

    async fn insert_systems(test: &TestContext, count: usize) -> Result<(), TestError> {
        for n in 0..count {
            test.system().insert_system(&format!("System {n}")).await?;
        }

        Ok(())
    }

    fn ordered() -> Select<entity::system::Entity> {
        entity::prelude::System::find().order_by_asc(entity::system::Column::Id)
    }

    /// Expect at most one page of docs with the full match count
    #[tokio::test]
    async fn returns_page_with_total() -> Result<(), TestError> {
        let test = TestBuilder::new().with_system_tables().build().await?;
        insert_systems(&test, 25).await?;

        let page = paginate(&test.db, ordered(), 3, budget()).await.unwrap();

        assert_eq!(page.docs.len(), 5);
        assert_eq!(page.total, 25);
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 3);

        Ok(())
    }

    /// Expect pages to follow primary key order
    #[tokio::test]
    async fn pages_are_ordered_by_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_system_tables().build().await?;
        insert_systems(&test, 12).await?;

        let first = paginate(&test.db, ordered(), 1, budget()).await.unwrap();
        let second = paginate(&test.db, ordered(), 2, budget()).await.unwrap();

        let last_of_first = first.docs.last().map(|s| s.id).unwrap();
        assert!(second.docs.iter().all(|s| s.id > last_of_first));
        assert_eq!(first.docs.len() + second.docs.len(), 12);

        Ok(())
    }

    /// Expect a page past the end to be empty while keeping the totals
    #[tokio::test]
    async fn page_past_end_is_empty() -> Result<(), TestError> {
        let test = TestBuilder::new().with_system_tables().build().await?;
        insert_systems(&test, 3).await?;

        let page = paginate(&test.db, ordered(), u64::MAX, budget())
            .await
            .unwrap();

        assert!(page.docs.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.pages, 1);

        Ok(())
    }

    /// Expect database errors to be propagated
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = paginate(&test.db, ordered(), 1, budget()).await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
