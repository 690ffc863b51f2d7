use sea_orm_migration::{prelude::*, schema::*};

static IDX_SYSTEM_NAME_LOWER: &str = "idx_system_name_lower";
static IDX_SYSTEM_FACTION_NAME_LOWER: &str = "idx_system_faction_name_lower";
static IDX_HISTORY_SYSTEM_UPDATED_AT: &str = "idx_system_history_system_id_updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(System::Table)
                    .if_not_exists()
                    .col(pk_auto(System::Id))
                    .col(big_integer_null(System::EddbId))
                    .col(string(System::Name))
                    .col(string(System::NameLower))
                    .col(string(System::Allegiance))
                    .col(string(System::Government))
                    .col(string(System::State))
                    .col(string(System::PrimaryEconomy))
                    .col(string_null(System::SecondaryEconomy))
                    .col(string(System::Security))
                    .col(big_integer(System::Population))
                    .col(string_null(System::ControllingMinorFaction))
                    .col(string_null(System::Power))
                    .col(string_null(System::PowerState))
                    .col(boolean(System::NeedsPermit))
                    .col(timestamp(System::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SYSTEM_NAME_LOWER)
                    .table(System::Table)
                    .col(System::NameLower)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SystemFaction::Table)
                    .if_not_exists()
                    .col(pk_auto(SystemFaction::Id))
                    .col(integer(SystemFaction::SystemId))
                    .col(string(SystemFaction::Name))
                    .col(string(SystemFaction::NameLower))
                    .foreign_key(
                        ForeignKey::create()
                            .from(SystemFaction::Table, SystemFaction::SystemId)
                            .to(System::Table, System::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SYSTEM_FACTION_NAME_LOWER)
                    .table(SystemFaction::Table)
                    .col(SystemFaction::NameLower)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SystemHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(SystemHistory::Id))
                    .col(integer(SystemHistory::SystemId))
                    .col(string(SystemHistory::SystemNameLower))
                    .col(string(SystemHistory::Allegiance))
                    .col(string(SystemHistory::Government))
                    .col(string(SystemHistory::State))
                    .col(string(SystemHistory::Security))
                    .col(big_integer(SystemHistory::Population))
                    .col(string_null(SystemHistory::ControllingMinorFaction))
                    .col(json(SystemHistory::Factions))
                    .col(timestamp(SystemHistory::UpdatedAt))
                    .col(string(SystemHistory::UpdatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .from(SystemHistory::Table, SystemHistory::SystemId)
                            .to(System::Table, System::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HISTORY_SYSTEM_UPDATED_AT)
                    .table(SystemHistory::Table)
                    .col(SystemHistory::SystemId)
                    .col(SystemHistory::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SystemFaction::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(System::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum System {
    Table,
    Id,
    EddbId,
    Name,
    NameLower,
    Allegiance,
    Government,
    State,
    PrimaryEconomy,
    SecondaryEconomy,
    Security,
    Population,
    ControllingMinorFaction,
    Power,
    PowerState,
    NeedsPermit,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum SystemFaction {
    Table,
    Id,
    SystemId,
    Name,
    NameLower,
}

#[derive(DeriveIden)]
pub enum SystemHistory {
    Table,
    Id,
    SystemId,
    SystemNameLower,
    Allegiance,
    Government,
    State,
    Security,
    Population,
    ControllingMinorFaction,
    Factions,
    UpdatedAt,
    UpdatedBy,
}
