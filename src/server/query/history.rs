//! History request parameters.

use chrono::NaiveDateTime;

use crate::server::{error::query::QueryError, query::params, util::time::from_epoch_millis};

/// Window synthesized around a single supplied bound: one week.
pub const DEFAULT_WINDOW_MS: i64 = 604_800_000;

/// Which history records to attach to each entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryRequest {
    /// Records updated within the inclusive range.
    Window {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    /// The most recent records, at most this many.
    Latest(u64),
}

impl HistoryRequest {
    /// Parses `timemin`, `timemax` and `count`.
    ///
    /// `count` takes precedence over the time bounds. A single bound is widened by
    /// [`DEFAULT_WINDOW_MS`] in the missing direction.
    ///
    /// # Returns
    /// - `Ok(None)` - No history was requested
    /// - `Ok(Some(HistoryRequest))` - History was requested
    /// - `Err(QueryError::InvalidParameter)` - A value is not a number, out of range, or `count` is not positive
    pub fn from_params(
        timemin: Option<&str>,
        timemax: Option<&str>,
        count: Option<&str>,
    ) -> Result<Option<Self>, QueryError> {
        if let Some(count) = params::number::<i64>("count", count)? {
            if count < 1 {
                return Err(QueryError::invalid("count", "must be a positive integer"));
            }

            return Ok(Some(Self::Latest(count as u64)));
        }

        let min = params::number::<i64>("timemin", timemin)?;
        let max = params::number::<i64>("timemax", timemax)?;

        let (from, to) = match (min, max) {
            (None, None) => return Ok(None),
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, min.saturating_add(DEFAULT_WINDOW_MS)),
            (None, Some(max)) => (max.saturating_sub(DEFAULT_WINDOW_MS), max),
        };

        let bound = |name: &'static str, millis: i64| {
            from_epoch_millis(millis).ok_or_else(|| QueryError::invalid(name, "out of range"))
        };

        Ok(Some(Self::Window {
            from: bound("timemin", from)?,
            to: bound("timemax", to)?,
        }))
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Latest(_))
    }
}
