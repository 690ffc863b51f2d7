//! Cross-collection constraints.
//!
//! Some parameters constrain an entity through another table, e.g. stations filtered
//! by the name of their controlling faction. Each such constraint is a [`Lookup`] whose
//! source query runs before the main query; its results become an any-of clause on
//! the constrained field. Lookups run concurrently and settle independently: a failed
//! lookup is logged and its constraint dropped, the rest still apply.

use std::fmt;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, Value};

use crate::server::{
    data::{faction::FactionRepository, system::SystemRepository},
    query::{
        faction::FactionField,
        filter::{Clause, Filter, FilterField},
        system::SystemField,
    },
    util::settle::settle,
};

/// Query whose results feed a constraint on another entity.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupSource {
    /// Lowercase names of the matching systems.
    SystemNames(Filter<SystemField>),
    /// Ids of the matching factions.
    FactionIds(Filter<FactionField>),
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SystemNames(filter) => write!(f, "system names ({} clauses)", filter.clauses().len()),
            Self::FactionIds(filter) => write!(f, "faction ids ({} clauses)", filter.clauses().len()),
        }
    }
}

/// A pending constraint on `constrains`, satisfied by the values `source` yields.
#[derive(Clone, Debug, PartialEq)]
pub struct Lookup<F> {
    pub constrains: F,
    pub source: LookupSource,
}

impl LookupSource {
    async fn run(&self, db: &DatabaseConnection) -> Result<Vec<Value>, DbErr> {
        match self {
            Self::SystemNames(filter) => Ok(SystemRepository::new(db)
                .names_matching(filter.condition())
                .await?
                .into_iter()
                .map(Value::from)
                .collect()),
            Self::FactionIds(filter) => Ok(FactionRepository::new(db)
                .ids_matching(filter.condition())
                .await?
                .into_iter()
                .map(Value::from)
                .collect()),
        }
    }
}

/// Runs every lookup concurrently and adds the successful ones to `filter`.
///
/// A lookup that matches nothing contributes an empty any-of clause, which matches no
/// entity. A lookup that fails is logged and contributes nothing.
pub async fn apply_lookups<F: FilterField>(
    db: &DatabaseConnection,
    filter: &mut Filter<F>,
    lookups: Vec<Lookup<F>>,
) {
    if lookups.is_empty() {
        return;
    }

    let branches = lookups
        .iter()
        .map(|lookup| ((lookup.constrains, &lookup.source), lookup.source.run(db)));

    for ((field, source), outcome) in settle(branches).await {
        match outcome {
            Ok(values) => filter.push(Clause::AnyOf(field, values)),
            Err(e) => {
                tracing::warn!(
                    lookup = %source,
                    field = ?field,
                    "Dropping cross-collection constraint after lookup failure: {}",
                    e
                );
            }
        }
    }
}
