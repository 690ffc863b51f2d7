use sea_orm::entity::prelude::*;

use crate::json::StateList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faction_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub faction_id: i32,
    pub faction_name: String,
    pub faction_name_lower: String,
    pub system: String,
    #[sea_orm(indexed)]
    pub system_lower: String,
    pub state: String,
    #[sea_orm(column_type = "Double")]
    pub influence: f64,
    #[sea_orm(column_type = "Json")]
    pub active_states: StateList,
    #[sea_orm(column_type = "Json")]
    pub pending_states: StateList,
    #[sea_orm(column_type = "Json")]
    pub recovering_states: StateList,
    #[sea_orm(indexed)]
    pub updated_at: DateTime,
    pub updated_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faction::Entity",
        from = "Column::FactionId",
        to = "super::faction::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Faction,
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
