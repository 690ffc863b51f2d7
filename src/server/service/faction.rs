use std::{collections::HashMap, time::Duration};

use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    model::{
        api::PageDto,
        faction::{FactionDto, FactionHistoryDto, FactionPresenceDto, StateDto},
    },
    server::{
        data::faction::FactionRepository,
        error::{query::QueryError, Error},
        model::{
            caller::Caller,
            db::{FactionHistoryModel, FactionModel, FactionPresenceModel, SystemModel},
        },
        query::{
            faction::{FactionField, FactionQuery},
            lookup::apply_lookups,
        },
        service::{
            history::HistoryBatch,
            pagination::paginate,
            resolve::{self, NameIndex, PresenceStates},
        },
    },
};

pub struct FactionService<'a> {
    db: &'a DatabaseConnection,
    query_timeout: Duration,
}

impl<'a> FactionService<'a> {
    /// Creates a new instance of [`FactionService`]
    pub fn new(db: &'a DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    /// Lists one page of factions matching `query`
    ///
    /// # Returns
    /// - `Ok(PageDto<FactionDto>)` - The page, with presences, history and references attached as requested
    /// - `Err(Error::QueryError)` - Invalid parameters, no filter from a non-privileged caller, or time budget exceeded
    /// - `Err(Error::DbErr)` - Database error on the base query or reference lookups
    pub async fn list(
        &self,
        query: &FactionQuery,
        caller: &Caller,
    ) -> Result<PageDto<FactionDto>, Error> {
        let history = query.history()?;
        let (mut filter, lookups) = query.filter()?;

        apply_lookups(self.db, &mut filter, lookups).await;

        if filter.is_empty() && !caller.is_privileged() {
            return Err(QueryError::NoQueryParameters.into());
        }

        let select = entity::prelude::Faction::find()
            .filter(filter.condition())
            .order_by_asc(entity::faction::Column::Id);
        let page = paginate(self.db, select, query.page(), self.query_timeout).await?;

        let repository = FactionRepository::new(self.db);
        let faction_ids: Vec<i32> = page.docs.iter().map(|f| f.id).collect();

        let (presences, states) = if query.minimal() {
            (Vec::new(), HashMap::new())
        } else {
            let presences = repository.presences(&faction_ids).await?;
            let presence_ids: Vec<i32> = presences.iter().map(|p| p.id).collect();
            let states = repository.presence_states(&presence_ids).await?;

            (presences, resolve::states_by_presence(states))
        };

        let mut presences_by_faction: HashMap<i32, Vec<FactionPresenceModel>> = HashMap::new();
        for presence in presences {
            presences_by_faction
                .entry(presence.faction_id)
                .or_default()
                .push(presence);
        }

        let history_systems = if query.filter_system_in_history() {
            filter.any_of_strings(FactionField::PresenceSystem)
        } else {
            None
        };

        let mut history = match history {
            Some(request) => {
                let branches = page.docs.iter().map(|faction| {
                    let systems = history_systems.clone().or_else(|| {
                        request.is_count().then(|| {
                            presences_by_faction
                                .get(&faction.id)
                                .map(|presences| {
                                    presences
                                        .iter()
                                        .map(|p| p.system_name_lower.clone())
                                        .collect()
                                })
                                .unwrap_or_default()
                        })
                    });
                    let repository = &repository;

                    (faction.id, async move {
                        repository
                            .history(faction.id, &request, systems.as_deref())
                            .await
                    })
                });

                HistoryBatch::fetch("faction", branches).await
            }
            None => HistoryBatch::default(),
        };

        let referenced_systems = presences_by_faction
            .values()
            .flatten()
            .map(|p| p.system_name_lower.clone())
            .chain(history.fetched().flatten().map(|h| h.system_lower.clone()))
            .collect::<Vec<String>>();
        let systems = resolve::system_index(self.db, referenced_systems).await?;

        let system_details = query.system_details();
        let docs = page
            .docs
            .iter()
            .map(|faction| {
                let presences = (!query.minimal()).then(|| {
                    presences_by_faction
                        .get(&faction.id)
                        .map(Vec::as_slice)
                        .unwrap_or_default()
                });
                let (history, history_error) = history.take(faction.id);

                faction_view(
                    faction,
                    presences,
                    &states,
                    history,
                    history_error,
                    &systems,
                    system_details,
                )
            })
            .collect();

        Ok(page.into_dto(docs))
    }
}

fn faction_view(
    faction: &FactionModel,
    presences: Option<&[FactionPresenceModel]>,
    states: &HashMap<i32, PresenceStates>,
    history: Option<Vec<FactionHistoryModel>>,
    history_error: Option<String>,
    systems: &NameIndex<SystemModel>,
    system_details: bool,
) -> FactionDto {
    let faction_presence = presences.map(|presences| {
        presences
            .iter()
            .map(|presence| {
                presence_view(
                    faction,
                    presence,
                    states.get(&presence.id),
                    systems,
                    system_details,
                )
            })
            .collect()
    });

    let history = history.map(|records| {
        records
            .into_iter()
            .map(|record| history_view(faction, record, systems))
            .collect()
    });

    FactionDto {
        id: faction.id,
        eddb_id: faction.eddb_id,
        name: faction.name.clone(),
        name_lower: faction.name_lower.clone(),
        allegiance: faction.allegiance.clone(),
        government: faction.government.clone(),
        is_player_faction: faction.is_player_faction,
        home_system_name: faction.home_system_name.clone(),
        updated_at: faction.updated_at,
        faction_presence,
        history,
        history_error,
    }
}

fn presence_view(
    faction: &FactionModel,
    presence: &FactionPresenceModel,
    states: Option<&PresenceStates>,
    systems: &NameIndex<SystemModel>,
    system_details: bool,
) -> FactionPresenceDto {
    let states = states.cloned().unwrap_or_default();

    FactionPresenceDto {
        system_name: presence.system_name.clone(),
        system_name_lower: presence.system_name_lower.clone(),
        influence: presence.influence,
        state: presence.state.clone(),
        active_states: states.active,
        pending_states: states.pending,
        recovering_states: states.recovering,
        updated_at: presence.updated_at,
        system_ref: resolve::system_link(
            systems,
            &presence.system_name_lower,
            Some(&faction.name_lower),
        ),
        system_details: system_details
            .then(|| systems.get(&presence.system_name_lower).map(resolve::system_summary))
            .flatten(),
    }
}

pub(crate) fn state_views(states: entity::json::StateList) -> Vec<StateDto> {
    states
        .0
        .into_iter()
        .map(|s| StateDto {
            state: s.state,
            trend: s.trend,
        })
        .collect()
}

/// History view without the owning faction's identifiers.
fn history_view(
    faction: &FactionModel,
    record: FactionHistoryModel,
    systems: &NameIndex<SystemModel>,
) -> FactionHistoryDto {
    let system_ref =
        resolve::system_link(systems, &record.system_lower, Some(&faction.name_lower));

    FactionHistoryDto {
        system: record.system,
        system_lower: record.system_lower,
        state: record.state,
        influence: record.influence,
        active_states: state_views(record.active_states),
        pending_states: state_views(record.pending_states),
        recovering_states: state_views(record.recovering_states),
        updated_at: record.updated_at,
        updated_by: record.updated_by,
        system_ref,
    }
}
