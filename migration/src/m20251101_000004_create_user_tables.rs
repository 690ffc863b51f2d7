use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_DISCORD_ID: &str = "idx_bgs_user_discord_id";

/// Tables holding the factions and systems a user follows.
const INTEREST_TABLES: [&str; 2] = ["bgs_user_faction", "bgs_user_system"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BgsUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BgsUser::Id))
                    .col(string(BgsUser::DiscordId))
                    .col(string(BgsUser::Username))
                    .col(string(BgsUser::Discriminator))
                    .col(string_null(BgsUser::Avatar))
                    .col(integer(BgsUser::Access))
                    .col(integer(BgsUser::OsContribution).default(0))
                    .col(integer(BgsUser::PatronageLevel).default(0))
                    .col(timestamp_null(BgsUser::PatronageSince))
                    .col(timestamp(BgsUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_DISCORD_ID)
                    .table(BgsUser::Table)
                    .col(BgsUser::DiscordId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BgsUserDonation::Table)
                    .if_not_exists()
                    .col(pk_auto(BgsUserDonation::Id))
                    .col(integer(BgsUserDonation::UserId))
                    .col(double(BgsUserDonation::Amount))
                    .col(timestamp(BgsUserDonation::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .from(BgsUserDonation::Table, BgsUserDonation::UserId)
                            .to(BgsUser::Table, BgsUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for table in INTEREST_TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(table))
                        .if_not_exists()
                        .col(pk_auto(BgsUserInterest::Id))
                        .col(integer(BgsUserInterest::UserId))
                        .col(string(BgsUserInterest::Name))
                        .col(string(BgsUserInterest::NameLower))
                        .foreign_key(
                            ForeignKey::create()
                                .from(Alias::new(table), BgsUserInterest::UserId)
                                .to(BgsUser::Table, BgsUser::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in INTEREST_TABLES {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(BgsUserDonation::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(BgsUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BgsUser {
    Table,
    Id,
    DiscordId,
    Username,
    Discriminator,
    Avatar,
    Access,
    OsContribution,
    PatronageLevel,
    PatronageSince,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum BgsUserDonation {
    Table,
    Id,
    UserId,
    Amount,
    Date,
}

#[derive(DeriveIden)]
enum BgsUserInterest {
    Id,
    UserId,
    Name,
    NameLower,
}
