use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Convert the test database connection into any state type that can be
    /// constructed from it. This allows conversion to AppState without creating
    /// a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
                schema.create_table_from_entity(entity::prelude::FavoritePerson),
                schema.create_table_from_entity(entity::prelude::FavoriteVehicle)
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
                schema.create_table_from_entity(entity::prelude::FavoritePerson),
                schema.create_table_from_entity(entity::prelude::FavoriteVehicle),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
