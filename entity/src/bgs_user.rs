use sea_orm::entity::prelude::*;

/// Access level granting administrative privileges.
pub const ACCESS_ADMIN: i32 = 0;
/// Default access level for new users.
pub const ACCESS_NORMAL: i32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bgs_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub access: i32,
    pub os_contribution: i32,
    pub patronage_level: i32,
    pub patronage_since: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bgs_user_donation::Entity")]
    BgsUserDonation,
    #[sea_orm(has_many = "super::bgs_user_faction::Entity")]
    BgsUserFaction,
    #[sea_orm(has_many = "super::bgs_user_system::Entity")]
    BgsUserSystem,
}

impl Related<super::bgs_user_donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BgsUserDonation.def()
    }
}

impl Related<super::bgs_user_faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BgsUserFaction.def()
    }
}

impl Related<super::bgs_user_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BgsUserSystem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
