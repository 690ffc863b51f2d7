use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bgs_user_donation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user_id: i32,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bgs_user::Entity",
        from = "Column::UserId",
        to = "super::bgs_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BgsUser,
}

impl Related<super::bgs_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BgsUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
