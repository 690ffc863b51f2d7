pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_faction_tables;
mod m20251101_000002_create_system_tables;
mod m20251101_000003_create_station_tables;
mod m20251101_000004_create_user_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_faction_tables::Migration),
            Box::new(m20251101_000002_create_system_tables::Migration),
            Box::new(m20251101_000003_create_station_tables::Migration),
            Box::new(m20251101_000004_create_user_tables::Migration),
        ]
    }
}
