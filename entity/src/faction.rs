use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eddb_id: Option<i64>,
    pub name: String,
    #[sea_orm(indexed)]
    pub name_lower: String,
    pub allegiance: String,
    pub government: String,
    pub is_player_faction: bool,
    pub home_system_name: Option<String>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::faction_presence::Entity")]
    FactionPresence,
    #[sea_orm(has_many = "super::faction_history::Entity")]
    FactionHistory,
}

impl Related<super::faction_presence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FactionPresence.def()
    }
}

impl Related<super::faction_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FactionHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
