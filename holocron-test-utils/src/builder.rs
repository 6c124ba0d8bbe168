//! Declarative test builder for database setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods together,
//! with all operations queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables.
/// Methods can be chained together and finalized with `build()` to create a
/// complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
        }
    }

    /// Add the standard catalog tables to the test database.
    ///
    /// Creates every table the catalog and favorites code touches: User, Planet,
    /// Person, Vehicle, FavoritePlanet, FavoritePerson, and FavoriteVehicle.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed
    /// during `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Planet)
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

    /// Build the test setup by creating all configured tables.
    ///
    /// Creates the catalog tables first when requested, then any custom tables,
    /// in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
                schema.create_table_from_entity(entity::prelude::FavoritePerson),
                schema.create_table_from_entity(entity::prelude::FavoriteVehicle),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
