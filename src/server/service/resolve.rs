//! Cross-reference resolution.
//!
//! Entities refer to each other by lowercase name. For a page of results, every
//! referenced name is collected, looked up in one batched query per referenced table,
//! and indexed in memory. Views are then built from the base rows and the index
//! without further queries.

use std::collections::{BTreeSet, HashMap};

use dioxus_logger::tracing;
use entity::faction_presence_state::{KIND_ACTIVE, KIND_PENDING, KIND_RECOVERING};
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        faction::StateDto,
        reference::Reference,
        system::{FactionLinkDto, PresenceSnapshotDto, SystemLinkDto, SystemSummaryDto},
    },
    server::{
        data::{faction::FactionRepository, system::SystemRepository},
        model::db::{FactionModel, FactionPresenceModel, FactionPresenceStateModel, SystemModel},
    },
};

/// Rows of a referenced table keyed by lowercase name.
#[derive(Debug)]
pub struct NameIndex<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for NameIndex<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> NameIndex<T> {
    pub fn new(rows: Vec<T>, key: impl Fn(&T) -> &str) -> Self {
        let entries = rows
            .into_iter()
            .map(|row| (key(&row).to_string(), row))
            .collect();

        Self { entries }
    }

    pub fn get(&self, name_lower: &str) -> Option<&T> {
        self.entries.get(name_lower)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

}

fn distinct(names: impl IntoIterator<Item = String>) -> Vec<String> {
    names.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Looks up every referenced system in one query.
pub async fn system_index(
    db: &DatabaseConnection,
    names_lower: impl IntoIterator<Item = String>,
) -> Result<NameIndex<SystemModel>, DbErr> {
    let names = distinct(names_lower);
    let systems = SystemRepository::new(db).find_by_names(&names).await?;

    Ok(NameIndex::new(systems, |s| s.name_lower.as_str()))
}

/// Looks up every referenced faction in one query.
pub async fn faction_index(
    db: &DatabaseConnection,
    names_lower: impl IntoIterator<Item = String>,
) -> Result<NameIndex<FactionModel>, DbErr> {
    let names = distinct(names_lower);
    let factions = FactionRepository::new(db).find_by_names(&names).await?;

    Ok(NameIndex::new(factions, |f| f.name_lower.as_str()))
}

/// Links to the system named `system_name_lower`.
///
/// `controller` is the lowercase name of the faction the link is viewed from; the link
/// is flagged as controlling when that faction controls the system.
pub fn system_link(
    index: &NameIndex<SystemModel>,
    system_name_lower: &str,
    controller: Option<&str>,
) -> Reference<SystemLinkDto> {
    let Some(system) = index.get(system_name_lower) else {
        tracing::debug!(system = system_name_lower, "Unresolved system reference");
        return Reference::Unresolved;
    };

    let controlling = match (controller, system.controlling_minor_faction.as_deref()) {
        (Some(controller), Some(controlling)) => {
            controller.to_lowercase() == controlling.to_lowercase()
        }
        _ => false,
    };

    Reference::Resolved(SystemLinkDto {
        id: system.id,
        population: system.population,
        controlling,
    })
}

pub fn system_summary(system: &SystemModel) -> SystemSummaryDto {
    SystemSummaryDto {
        id: system.id,
        name: system.name.clone(),
        allegiance: system.allegiance.clone(),
        government: system.government.clone(),
        state: system.state.clone(),
        primary_economy: system.primary_economy.clone(),
        secondary_economy: system.secondary_economy.clone(),
        security: system.security.clone(),
        population: system.population,
        controlling_minor_faction: system.controlling_minor_faction.clone(),
        power: system.power.clone(),
        power_state: system.power_state.clone(),
        needs_permit: system.needs_permit,
    }
}

/// Links to the faction named `faction_name_lower`, with its presence if known.
pub fn faction_link(
    index: &NameIndex<FactionModel>,
    faction_name_lower: &str,
    presence: Option<PresenceSnapshotDto>,
) -> Reference<FactionLinkDto> {
    let Some(faction) = index.get(faction_name_lower) else {
        tracing::debug!(faction = faction_name_lower, "Unresolved faction reference");
        return Reference::Unresolved;
    };

    Reference::Resolved(FactionLinkDto {
        id: faction.id,
        presence,
    })
}

/// States of one presence record split by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresenceStates {
    pub active: Vec<StateDto>,
    pub pending: Vec<StateDto>,
    pub recovering: Vec<StateDto>,
}

/// Groups state rows by the presence they belong to.
///
/// Rows with an unknown kind are ignored.
pub fn states_by_presence(
    states: Vec<FactionPresenceStateModel>,
) -> HashMap<i32, PresenceStates> {
    let mut grouped: HashMap<i32, PresenceStates> = HashMap::new();

    for row in states {
        let entry = grouped.entry(row.presence_id).or_default();
        let list = match row.kind.as_str() {
            KIND_ACTIVE => &mut entry.active,
            KIND_PENDING => &mut entry.pending,
            KIND_RECOVERING => &mut entry.recovering,
            _ => continue,
        };

        list.push(StateDto {
            state: row.state,
            trend: row.trend,
        });
    }

    grouped
}

/// Snapshot of a presence record for embedding in another entity's view.
pub fn presence_snapshot(
    presence: &FactionPresenceModel,
    states: Option<&PresenceStates>,
) -> PresenceSnapshotDto {
    let states = states.cloned().unwrap_or_default();

    PresenceSnapshotDto {
        influence: presence.influence,
        state: presence.state.clone(),
        active_states: states.active,
        pending_states: states.pending,
        recovering_states: states.recovering,
        updated_at: presence.updated_at,
    }
}
