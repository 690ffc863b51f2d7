use std::{collections::HashMap, time::Duration};

use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    model::{
        api::PageDto,
        station::{FacilitiesDto, StationDto, StationHistoryDto},
    },
    server::{
        data::station::StationRepository,
        error::{query::QueryError, Error},
        model::{
            caller::Caller,
            db::{StationHistoryModel, StationModel, SystemModel},
        },
        query::{lookup::apply_lookups, station::StationQuery},
        service::{
            history::HistoryBatch,
            pagination::paginate,
            resolve::{self, NameIndex},
        },
    },
};

/// Child lists of one station.
#[derive(Debug, Default)]
struct StationLists {
    services: Vec<String>,
    ships: Vec<String>,
    commodities: Vec<String>,
    modules: Vec<i64>,
}

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
    query_timeout: Duration,
}

impl<'a> StationService<'a> {
    /// Creates a new instance of [`StationService`]
    pub fn new(db: &'a DatabaseConnection, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    /// Lists one page of stations matching `query`
    ///
    /// # Returns
    /// - `Ok(PageDto<StationDto>)` - The page, with child lists, history and the hosting system attached
    /// - `Err(Error::QueryError)` - Invalid parameters, no filter from a non-privileged caller, or time budget exceeded
    /// - `Err(Error::DbErr)` - Database error on the base query or reference lookups
    pub async fn list(
        &self,
        query: &StationQuery,
        caller: &Caller,
    ) -> Result<PageDto<StationDto>, Error> {
        let history = query.history()?;
        let (mut filter, lookups) = query.filter()?;

        apply_lookups(self.db, &mut filter, lookups).await;

        if filter.is_empty() && !caller.is_privileged() {
            return Err(QueryError::NoQueryParameters.into());
        }

        let select = entity::prelude::Station::find()
            .filter(filter.condition())
            .order_by_asc(entity::station::Column::Id);
        let page = paginate(self.db, select, query.page(), self.query_timeout).await?;

        let repository = StationRepository::new(self.db);
        let station_ids: Vec<i32> = page.docs.iter().map(|s| s.id).collect();

        let mut lists: HashMap<i32, StationLists> = HashMap::new();
        for service in repository.services(&station_ids).await? {
            lists.entry(service.station_id).or_default().services.push(service.name);
        }
        for ship in repository.ships(&station_ids).await? {
            lists.entry(ship.station_id).or_default().ships.push(ship.name);
        }
        for commodity in repository.commodities(&station_ids).await? {
            lists
                .entry(commodity.station_id)
                .or_default()
                .commodities
                .push(commodity.name);
        }
        for module in repository.modules(&station_ids).await? {
            lists
                .entry(module.station_id)
                .or_default()
                .modules
                .push(module.module_id);
        }

        let mut history = match history {
            Some(request) => {
                let branches = page.docs.iter().map(|station| {
                    let repository = &repository;

                    (station.id, async move {
                        repository.history(station.id, &request).await
                    })
                });

                HistoryBatch::fetch("station", branches).await
            }
            None => HistoryBatch::default(),
        };

        let referenced_systems: Vec<String> =
            page.docs.iter().map(|s| s.system_lower.clone()).collect();
        let systems = resolve::system_index(self.db, referenced_systems).await?;

        let docs = page
            .docs
            .iter()
            .map(|station| {
                let station_lists = lists.remove(&station.id).unwrap_or_default();
                let (history, history_error) = history.take(station.id);

                station_view(station, station_lists, history, history_error, &systems)
            })
            .collect();

        Ok(page.into_dto(docs))
    }
}

fn station_view(
    station: &StationModel,
    lists: StationLists,
    history: Option<Vec<StationHistoryModel>>,
    history_error: Option<String>,
    systems: &NameIndex<SystemModel>,
) -> StationDto {
    StationDto {
        id: station.id,
        eddb_id: station.eddb_id,
        name: station.name.clone(),
        name_lower: station.name_lower.clone(),
        station_type: station.station_type.clone(),
        system: station.system.clone(),
        system_lower: station.system_lower.clone(),
        government: station.government.clone(),
        economy: station.economy.clone(),
        allegiance: station.allegiance.clone(),
        state: station.state.clone(),
        distance_from_star: station.distance_from_star,
        max_landing_pad_size: station.max_landing_pad_size.clone(),
        is_planetary: station.is_planetary,
        controlling_minor_faction: station.controlling_minor_faction.clone(),
        controlling_minor_faction_id: station.controlling_minor_faction_id,
        facilities: FacilitiesDto {
            has_market: station.has_market,
            has_blackmarket: station.has_blackmarket,
            has_refuel: station.has_refuel,
            has_repair: station.has_repair,
            has_rearm: station.has_rearm,
            has_outfitting: station.has_outfitting,
            has_shipyard: station.has_shipyard,
        },
        services: lists.services,
        selling_ships: lists.ships,
        export_commodities: lists.commodities,
        selling_modules: lists.modules,
        updated_at: station.updated_at,
        system_ref: resolve::system_link(
            systems,
            &station.system_lower,
            station.controlling_minor_faction.as_deref(),
        ),
        history: history.map(|records| records.into_iter().map(history_view).collect()),
        history_error,
    }
}

/// History view without the owning station's identifiers.
fn history_view(record: StationHistoryModel) -> StationHistoryDto {
    StationHistoryDto {
        government: record.government,
        economy: record.economy,
        allegiance: record.allegiance,
        state: record.state,
        controlling_minor_faction: record.controlling_minor_faction,
        services: record.services.0,
        updated_at: record.updated_at,
        updated_by: record.updated_by,
    }
}
