use std::{collections::HashMap, time::Duration};

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    model::{
        api::PageDto,
        system::{
            PresenceSnapshotDto, SystemDto, SystemFactionDto, SystemFactionHistoryDto,
            SystemHistoryDto,
        },
    },
    server::{
        data::{faction::FactionRepository, system::SystemRepository},
        error::{query::QueryError, Error},
        model::{
            caller::Caller,
            db::{
                FactionHistoryModel, FactionModel, SystemFactionModel, SystemHistoryModel,
                SystemModel,
            },
        },
        query::system::SystemQuery,
        service::{
            faction::state_views,
            history::HistoryBatch,
            pagination::paginate,
            resolve::{self, NameIndex},
        },
    },
};

/// System and faction snapshots fetched for one system.
type SystemHistories = (Vec<SystemHistoryModel>, Vec<FactionHistoryModel>);

/// Live presence snapshots keyed by `(faction id, system name lower)`.
type PresenceIndex = HashMap<(i32, String), PresenceSnapshotDto>;

pub struct SystemService<'a> {
    db: &'a DatabaseConnection,
    query_timeout: Duration,
}

impl<'a> SystemService<'a> {
    /// Creates a new instance of [`SystemService`]
    pub fn new(db: &'a DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    /// Lists one page of systems matching `query`
    ///
    /// # Returns
    /// - `Ok(PageDto<SystemDto>)` - The page, with faction references and history attached as requested
    /// - `Err(Error::QueryError)` - Invalid parameters, no filter from a non-privileged caller, or time budget exceeded
    /// - `Err(Error::DbErr)` - Database error on the base query or reference lookups
    pub async fn list(
        &self,
        query: &SystemQuery,
        caller: &Caller,
    ) -> Result<PageDto<SystemDto>, Error> {
        let history = query.history()?;
        let filter = query.filter()?;

        if filter.is_empty() && !caller.is_privileged() {
            return Err(QueryError::NoQueryParameters.into());
        }

        let select = entity::prelude::System::find()
            .filter(filter.condition())
            .order_by_asc(entity::system::Column::Id);
        let page = paginate(self.db, select, query.page(), self.query_timeout).await?;

        let system_repository = SystemRepository::new(self.db);
        let faction_repository = FactionRepository::new(self.db);
        let system_ids: Vec<i32> = page.docs.iter().map(|s| s.id).collect();

        let mut references: HashMap<i32, Vec<SystemFactionModel>> = HashMap::new();
        for reference in system_repository.faction_references(&system_ids).await? {
            references
                .entry(reference.system_id)
                .or_default()
                .push(reference);
        }

        let mut history: HistoryBatch<SystemHistories> = match history {
            Some(request) => {
                let branches = page.docs.iter().map(|system| {
                    let (system_repository, faction_repository) =
                        (&system_repository, &faction_repository);

                    (system.id, async move {
                        let own = system_repository.history(system.id, &request).await?;
                        let factions = faction_repository
                            .history_in_system(&system.name_lower, &request)
                            .await?;

                        Ok::<_, DbErr>((own, factions))
                    })
                });

                HistoryBatch::fetch("system", branches).await
            }
            None => HistoryBatch::default(),
        };

        let referenced_factions = references
            .values()
            .flatten()
            .map(|r| r.name_lower.clone())
            .chain(
                history
                    .fetched()
                    .flat_map(|(own, _)| own.iter())
                    .flat_map(|h| h.factions.0.iter().map(|f| f.name_lower.clone())),
            )
            .collect::<Vec<String>>();
        let factions = resolve::faction_index(self.db, referenced_factions).await?;

        let presences = if query.faction_details() {
            self.presence_index(&factions, &page.docs).await?
        } else {
            PresenceIndex::new()
        };

        let docs = page
            .docs
            .iter()
            .map(|system| {
                let references = references
                    .get(&system.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let (histories, history_error) = history.take(system.id);

                system_view(
                    system,
                    references,
                    histories,
                    history_error,
                    &factions,
                    &presences,
                )
            })
            .collect();

        Ok(page.into_dto(docs))
    }

    /// Live presence of every resolved faction in every system on the page
    async fn presence_index(
        &self,
        factions: &NameIndex<FactionModel>,
        systems: &[SystemModel],
    ) -> Result<PresenceIndex, DbErr> {
        let repository = FactionRepository::new(self.db);

        let faction_ids: Vec<i32> = factions.values().map(|f| f.id).collect();
        let system_names: Vec<String> = systems.iter().map(|s| s.name_lower.clone()).collect();

        let presences = repository
            .presences_in_systems(&faction_ids, &system_names)
            .await?;
        let presence_ids: Vec<i32> = presences.iter().map(|p| p.id).collect();
        let states = resolve::states_by_presence(repository.presence_states(&presence_ids).await?);

        Ok(presences
            .iter()
            .map(|presence| {
                (
                    (presence.faction_id, presence.system_name_lower.clone()),
                    resolve::presence_snapshot(presence, states.get(&presence.id)),
                )
            })
            .collect())
    }
}

fn faction_reference(
    system: &SystemModel,
    name: &str,
    name_lower: &str,
    factions: &NameIndex<FactionModel>,
    presences: &PresenceIndex,
) -> SystemFactionDto {
    let presence = factions.get(name_lower).and_then(|faction| {
        presences
            .get(&(faction.id, system.name_lower.clone()))
            .cloned()
    });

    SystemFactionDto {
        name: name.to_string(),
        name_lower: name_lower.to_string(),
        faction_ref: resolve::faction_link(factions, name_lower, presence),
    }
}

fn system_view(
    system: &SystemModel,
    references: &[SystemFactionModel],
    histories: Option<SystemHistories>,
    history_error: Option<String>,
    factions: &NameIndex<FactionModel>,
    presences: &PresenceIndex,
) -> SystemDto {
    let faction_views = references
        .iter()
        .map(|r| faction_reference(system, &r.name, &r.name_lower, factions, presences))
        .collect();

    let (history, faction_history) = match histories {
        Some((own, faction_records)) => (
            Some(
                own.into_iter()
                    .map(|record| history_view(system, record, factions, presences))
                    .collect(),
            ),
            Some(faction_records.into_iter().map(faction_history_view).collect()),
        ),
        None => (None, None),
    };

    SystemDto {
        id: system.id,
        eddb_id: system.eddb_id,
        name: system.name.clone(),
        name_lower: system.name_lower.clone(),
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
        updated_at: system.updated_at,
        factions: faction_views,
        history,
        faction_history,
        history_error,
    }
}

/// History view without the owning system's identifiers.
fn history_view(
    system: &SystemModel,
    record: SystemHistoryModel,
    factions: &NameIndex<FactionModel>,
    presences: &PresenceIndex,
) -> SystemHistoryDto {
    let faction_views = record
        .factions
        .0
        .iter()
        .map(|f| faction_reference(system, &f.name, &f.name_lower, factions, presences))
        .collect();

    SystemHistoryDto {
        allegiance: record.allegiance,
        government: record.government,
        state: record.state,
        security: record.security,
        population: record.population,
        controlling_minor_faction: record.controlling_minor_faction,
        factions: faction_views,
        updated_at: record.updated_at,
        updated_by: record.updated_by,
    }
}

/// Faction snapshot keyed by faction name, without faction or system identifiers.
fn faction_history_view(record: FactionHistoryModel) -> SystemFactionHistoryDto {
    SystemFactionHistoryDto {
        faction: record.faction_name_lower,
        state: record.state,
        influence: record.influence,
        active_states: state_views(record.active_states),
        pending_states: state_views(record.pending_states),
        recovering_states: state_views(record.recovering_states),
        updated_at: record.updated_at,
        updated_by: record.updated_by,
    }
}
