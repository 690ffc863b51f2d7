use sea_orm::entity::prelude::*;

use crate::json::FactionNameList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub system_id: i32,
    pub system_name_lower: String,
    pub allegiance: String,
    pub government: String,
    pub state: String,
    pub security: String,
    pub population: i64,
    pub controlling_minor_faction: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub factions: FactionNameList,
    #[sea_orm(indexed)]
    pub updated_at: DateTime,
    pub updated_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::system::Entity",
        from = "Column::SystemId",
        to = "super::system::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    System,
}

impl Related<super::system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::System.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
