use sea_orm_migration::{prelude::*, schema::*};

static IDX_STATION_NAME_LOWER: &str = "idx_station_name_lower";
static IDX_STATION_SYSTEM_LOWER: &str = "idx_station_system_lower";
static IDX_HISTORY_STATION_UPDATED_AT: &str = "idx_station_history_station_id_updated_at";

/// Child tables holding a station's named lists.
const NAMED_CHILD_TABLES: [&str; 3] = ["station_service", "station_ship", "station_commodity"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(pk_auto(Station::Id))
                    .col(big_integer_null(Station::EddbId))
                    .col(string(Station::Name))
                    .col(string(Station::NameLower))
                    .col(string(Station::StationType))
                    .col(string(Station::System))
                    .col(string(Station::SystemLower))
                    .col(string(Station::Government))
                    .col(string(Station::Economy))
                    .col(string(Station::Allegiance))
                    .col(string(Station::State))
                    .col(double_null(Station::DistanceFromStar))
                    .col(string_null(Station::MaxLandingPadSize))
                    .col(boolean(Station::IsPlanetary))
                    .col(string_null(Station::ControllingMinorFaction))
                    .col(integer_null(Station::ControllingMinorFactionId))
                    .col(boolean(Station::HasMarket))
                    .col(boolean(Station::HasBlackmarket))
                    .col(boolean(Station::HasRefuel))
                    .col(boolean(Station::HasRepair))
                    .col(boolean(Station::HasRearm))
                    .col(boolean(Station::HasOutfitting))
                    .col(boolean(Station::HasShipyard))
                    .col(timestamp(Station::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STATION_NAME_LOWER)
                    .table(Station::Table)
                    .col(Station::NameLower)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STATION_SYSTEM_LOWER)
                    .table(Station::Table)
                    .col(Station::SystemLower)
                    .to_owned(),
            )
            .await?;

        for table in NAMED_CHILD_TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(table))
                        .if_not_exists()
                        .col(pk_auto(StationChild::Id))
                        .col(integer(StationChild::StationId))
                        .col(string(StationChild::Name))
                        .col(string(StationChild::NameLower))
                        .foreign_key(
                            ForeignKey::create()
                                .from(Alias::new(table), StationChild::StationId)
                                .to(Station::Table, Station::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table}_name_lower"))
                        .table(Alias::new(table))
                        .col(StationChild::NameLower)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(StationModule::Table)
                    .if_not_exists()
                    .col(pk_auto(StationModule::Id))
                    .col(integer(StationModule::StationId))
                    .col(big_integer(StationModule::ModuleId))
                    .foreign_key(
                        ForeignKey::create()
                            .from(StationModule::Table, StationModule::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StationHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(StationHistory::Id))
                    .col(integer(StationHistory::StationId))
                    .col(string(StationHistory::StationNameLower))
                    .col(string(StationHistory::Government))
                    .col(string(StationHistory::Economy))
                    .col(string(StationHistory::Allegiance))
                    .col(string(StationHistory::State))
                    .col(string_null(StationHistory::ControllingMinorFaction))
                    .col(json(StationHistory::Services))
                    .col(timestamp(StationHistory::UpdatedAt))
                    .col(string(StationHistory::UpdatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .from(StationHistory::Table, StationHistory::StationId)
                            .to(Station::Table, Station::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HISTORY_STATION_UPDATED_AT)
                    .table(StationHistory::Table)
                    .col(StationHistory::StationId)
                    .col(StationHistory::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StationModule::Table).to_owned())
            .await?;

        for table in NAMED_CHILD_TABLES {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Station::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Station {
    Table,
    Id,
    EddbId,
    Name,
    NameLower,
    StationType,
    System,
    SystemLower,
    Government,
    Economy,
    Allegiance,
    State,
    DistanceFromStar,
    MaxLandingPadSize,
    IsPlanetary,
    ControllingMinorFaction,
    ControllingMinorFactionId,
    HasMarket,
    HasBlackmarket,
    HasRefuel,
    HasRepair,
    HasRearm,
    HasOutfitting,
    HasShipyard,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StationChild {
    Id,
    StationId,
    Name,
    NameLower,
}

#[derive(DeriveIden)]
pub enum StationModule {
    Table,
    Id,
    StationId,
    ModuleId,
}

#[derive(DeriveIden)]
pub enum StationHistory {
    Table,
    Id,
    StationId,
    StationNameLower,
    Government,
    Economy,
    Allegiance,
    State,
    ControllingMinorFaction,
    Services,
    UpdatedAt,
    UpdatedBy,
}
