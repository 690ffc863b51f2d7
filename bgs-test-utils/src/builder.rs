//! Declarative test builder.
//!
//! Tables are queued on the builder and created, in the order they were added, when
//! `build()` is called. Parent tables are always queued before their children so
//! foreign keys resolve.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bgs_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), bgs_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(System)
    ///     .with_table(SystemFaction)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Faction, presence, presence state and faction history tables.
    pub fn with_faction_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(Faction)
            .with_table(FactionPresence)
            .with_table(FactionPresenceState)
            .with_table(FactionHistory)
    }

    /// System, system faction reference and system history tables.
    pub fn with_system_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(System)
            .with_table(SystemFaction)
            .with_table(SystemHistory)
    }

    /// Station, station child list and station history tables.
    pub fn with_station_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(Station)
            .with_table(StationService)
            .with_table(StationShip)
            .with_table(StationCommodity)
            .with_table(StationModule)
            .with_table(StationHistory)
    }

    /// User, donation and interest list tables.
    pub fn with_user_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(BgsUser)
            .with_table(BgsUserDonation)
            .with_table(BgsUserFaction)
            .with_table(BgsUserSystem)
    }

    /// Every table the application reads.
    pub fn with_all_tables(self) -> Self {
        self.with_faction_tables()
            .with_system_tables()
            .with_station_tables()
            .with_user_tables()
    }

    /// Build the test context and create every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
