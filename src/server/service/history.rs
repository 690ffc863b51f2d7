//! Per-entity history fan-out.
//!
//! History for every entity on a page is fetched concurrently. Each entity's outcome is
//! kept separately: a failed fetch marks only that entity's history as unavailable.

use std::{collections::HashMap, future::Future};

use dioxus_logger::tracing;
use sea_orm::DbErr;

use crate::server::util::settle::settle;

/// Message attached to an entity whose history could not be fetched.
pub const HISTORY_UNAVAILABLE: &str = "History could not be retrieved";

/// History outcomes keyed by owning entity id.
#[derive(Debug)]
pub struct HistoryBatch<T> {
    outcomes: HashMap<i32, Result<T, String>>,
}

impl<T> Default for HistoryBatch<T> {
    fn default() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }
}

impl<T> HistoryBatch<T> {
    /// Fetches every owner's history concurrently.
    ///
    /// `entity` names the owning entity type in log output.
    pub async fn fetch<Fut>(
        entity: &'static str,
        branches: impl IntoIterator<Item = (i32, Fut)>,
    ) -> Self
    where
        Fut: Future<Output = Result<T, DbErr>>,
    {
        let outcomes = settle(branches)
            .await
            .into_iter()
            .map(|(id, outcome)| {
                let outcome = outcome.map_err(|e| {
                    tracing::warn!(entity, id, "Failed to fetch history: {}", e);

                    HISTORY_UNAVAILABLE.to_string()
                });

                (id, outcome)
            })
            .collect();

        Self { outcomes }
    }

    /// Every successfully fetched outcome, across owners.
    pub fn fetched(&self) -> impl Iterator<Item = &T> {
        self.outcomes
            .values()
            .filter_map(|outcome| outcome.as_ref().ok())
    }

    /// Removes one owner's outcome as `(history, history_error)`.
    ///
    /// Both are `None` when history was not requested for the owner.
    pub fn take(&mut self, id: i32) -> (Option<T>, Option<String>) {
        match self.outcomes.remove(&id) {
            Some(Ok(records)) => (Some(records), None),
            Some(Err(message)) => (None, Some(message)),
            None => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect one failed owner not to affect the others
    #[tokio::test]
    async fn failure_is_isolated_to_owner() {
        let branches = [1, 2, 3].map(|id| {
            (id, async move {
                if id == 2 {
                    Err(DbErr::Custom("boom".to_string()))
                } else {
                    Ok(vec![id * 10])
                }
            })
        });

        let mut batch = HistoryBatch::fetch("test", branches).await;

        assert_eq!(batch.fetched().count(), 2);
        assert_eq!(batch.take(1), (Some(vec![10]), None));
        assert_eq!(batch.take(2), (None, Some(HISTORY_UNAVAILABLE.to_string())));
        assert_eq!(batch.take(3), (Some(vec![30]), None));
    }

    /// Expect owners without a fetch to report nothing
    #[test]
    fn unrequested_owner_is_empty() {
        let mut batch: HistoryBatch<Vec<i32>> = HistoryBatch::default();

        assert_eq!(batch.take(7), (None, None));
    }
}
