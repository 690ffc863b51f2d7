use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eddb_id: Option<i64>,
    pub name: String,
    #[sea_orm(indexed)]
    pub name_lower: String,
    pub allegiance: String,
    pub government: String,
    pub state: String,
    pub primary_economy: String,
    pub secondary_economy: Option<String>,
    pub security: String,
    pub population: i64,
    /// Lowercase name of the controlling faction.
    pub controlling_minor_faction: Option<String>,
    pub power: Option<String>,
    pub power_state: Option<String>,
    pub needs_permit: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::system_faction::Entity")]
    SystemFaction,
    #[sea_orm(has_many = "super::system_history::Entity")]
    SystemHistory,
}

impl Related<super::system_faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SystemFaction.def()
    }
}

impl Related<super::system_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SystemHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
