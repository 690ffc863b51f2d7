use sea_orm_migration::{prelude::*, schema::*};

static IDX_FACTION_NAME_LOWER: &str = "idx_faction_name_lower";
static IDX_PRESENCE_SYSTEM_NAME_LOWER: &str = "idx_faction_presence_system_name_lower";
static IDX_PRESENCE_STATE_FACTION_ID: &str = "idx_faction_presence_state_faction_id";
static IDX_HISTORY_FACTION_UPDATED_AT: &str = "idx_faction_history_faction_id_updated_at";
static IDX_HISTORY_SYSTEM_LOWER: &str = "idx_faction_history_system_lower";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faction::Table)
                    .if_not_exists()
                    .col(pk_auto(Faction::Id))
                    .col(big_integer_null(Faction::EddbId))
                    .col(string(Faction::Name))
                    .col(string(Faction::NameLower))
                    .col(string(Faction::Allegiance))
                    .col(string(Faction::Government))
                    .col(boolean(Faction::IsPlayerFaction))
                    .col(string_null(Faction::HomeSystemName))
                    .col(timestamp(Faction::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACTION_NAME_LOWER)
                    .table(Faction::Table)
                    .col(Faction::NameLower)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FactionPresence::Table)
                    .if_not_exists()
                    .col(pk_auto(FactionPresence::Id))
                    .col(integer(FactionPresence::FactionId))
                    .col(string(FactionPresence::SystemName))
                    .col(string(FactionPresence::SystemNameLower))
                    .col(double(FactionPresence::Influence))
                    .col(string(FactionPresence::State))
                    .col(timestamp(FactionPresence::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(FactionPresence::Table, FactionPresence::FactionId)
                            .to(Faction::Table, Faction::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRESENCE_SYSTEM_NAME_LOWER)
                    .table(FactionPresence::Table)
                    .col(FactionPresence::SystemNameLower)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FactionPresenceState::Table)
                    .if_not_exists()
                    .col(pk_auto(FactionPresenceState::Id))
                    .col(integer(FactionPresenceState::PresenceId))
                    .col(integer(FactionPresenceState::FactionId))
                    .col(string(FactionPresenceState::Kind))
                    .col(string(FactionPresenceState::State))
                    .col(integer_null(FactionPresenceState::Trend))
                    .foreign_key(
                        ForeignKey::create()
                            .from(FactionPresenceState::Table, FactionPresenceState::PresenceId)
                            .to(FactionPresence::Table, FactionPresence::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRESENCE_STATE_FACTION_ID)
                    .table(FactionPresenceState::Table)
                    .col(FactionPresenceState::FactionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FactionHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(FactionHistory::Id))
                    .col(integer(FactionHistory::FactionId))
                    .col(string(FactionHistory::FactionName))
                    .col(string(FactionHistory::FactionNameLower))
                    .col(string(FactionHistory::System))
                    .col(string(FactionHistory::SystemLower))
                    .col(string(FactionHistory::State))
                    .col(double(FactionHistory::Influence))
                    .col(json(FactionHistory::ActiveStates))
                    .col(json(FactionHistory::PendingStates))
                    .col(json(FactionHistory::RecoveringStates))
                    .col(timestamp(FactionHistory::UpdatedAt))
                    .col(string(FactionHistory::UpdatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .from(FactionHistory::Table, FactionHistory::FactionId)
                            .to(Faction::Table, Faction::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HISTORY_FACTION_UPDATED_AT)
                    .table(FactionHistory::Table)
                    .col(FactionHistory::FactionId)
                    .col(FactionHistory::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HISTORY_SYSTEM_LOWER)
                    .table(FactionHistory::Table)
                    .col(FactionHistory::SystemLower)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FactionHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FactionPresenceState::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FactionPresence::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Faction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Faction {
    Table,
    Id,
    EddbId,
    Name,
    NameLower,
    Allegiance,
    Government,
    IsPlayerFaction,
    HomeSystemName,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum FactionPresence {
    Table,
    Id,
    FactionId,
    SystemName,
    SystemNameLower,
    Influence,
    State,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum FactionPresenceState {
    Table,
    Id,
    PresenceId,
    FactionId,
    Kind,
    State,
    Trend,
}

#[derive(DeriveIden)]
pub enum FactionHistory {
    Table,
    Id,
    FactionId,
    FactionName,
    FactionNameLower,
    System,
    SystemLower,
    State,
    Influence,
    ActiveStates,
    PendingStates,
    RecoveringStates,
    UpdatedAt,
    UpdatedBy,
}
