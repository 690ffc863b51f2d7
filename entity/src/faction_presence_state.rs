use sea_orm::entity::prelude::*;

pub const KIND_ACTIVE: &str = "active";
pub const KIND_PENDING: &str = "pending";
pub const KIND_RECOVERING: &str = "recovering";

/// An active, pending or recovering state attached to a presence record.
///
/// `faction_id` is denormalized from the presence so state filters can be expressed
/// as a single sub-select on this table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faction_presence_state")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub presence_id: i32,
    #[sea_orm(indexed)]
    pub faction_id: i32,
    pub kind: String,
    pub state: String,
    pub trend: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faction_presence::Entity",
        from = "Column::PresenceId",
        to = "super::faction_presence::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FactionPresence,
}

impl Related<super::faction_presence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FactionPresence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
