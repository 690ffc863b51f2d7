use sea_orm::entity::prelude::*;

use crate::json::NameList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "station_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub station_id: i32,
    pub station_name_lower: String,
    pub government: String,
    pub economy: String,
    pub allegiance: String,
    pub state: String,
    pub controlling_minor_faction: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub services: NameList,
    #[sea_orm(indexed)]
    pub updated_at: DateTime,
    pub updated_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Station,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
