use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eddb_id: Option<i64>,
    pub name: String,
    #[sea_orm(indexed)]
    pub name_lower: String,
    pub station_type: String,
    pub system: String,
    #[sea_orm(indexed)]
    pub system_lower: String,
    pub government: String,
    pub economy: String,
    pub allegiance: String,
    pub state: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub distance_from_star: Option<f64>,
    /// One of `s`, `m` or `l`.
    pub max_landing_pad_size: Option<String>,
    pub is_planetary: bool,
    /// Lowercase name of the controlling faction.
    pub controlling_minor_faction: Option<String>,
    pub controlling_minor_faction_id: Option<i32>,
    pub has_market: bool,
    pub has_blackmarket: bool,
    pub has_refuel: bool,
    pub has_repair: bool,
    pub has_rearm: bool,
    pub has_outfitting: bool,
    pub has_shipyard: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::station_service::Entity")]
    StationService,
    #[sea_orm(has_many = "super::station_ship::Entity")]
    StationShip,
    #[sea_orm(has_many = "super::station_commodity::Entity")]
    StationCommodity,
    #[sea_orm(has_many = "super::station_module::Entity")]
    StationModule,
    #[sea_orm(has_many = "super::station_history::Entity")]
    StationHistory,
}

impl Related<super::station_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationService.def()
    }
}

impl Related<super::station_ship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationShip.def()
    }
}

impl Related<super::station_commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationCommodity.def()
    }
}

impl Related<super::station_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationModule.def()
    }
}

impl Related<super::station_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
