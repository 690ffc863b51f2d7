use sea_orm::entity::prelude::*;

/// A faction's live status within one system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faction_presence")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub faction_id: i32,
    pub system_name: String,
    #[sea_orm(indexed)]
    pub system_name_lower: String,
    #[sea_orm(column_type = "Double")]
    pub influence: f64,
    pub state: String,
    pub updated_at: DateTime,
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
    #[sea_orm(has_many = "super::faction_presence_state::Entity")]
    FactionPresenceState,
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl Related<super::faction_presence_state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FactionPresenceState.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
