use sea_orm::DatabaseConnection;

/// Shared application state handed to every request handler.
///
/// Constructed once in `main` and cloned into the router; handlers receive it
/// through the `State` extractor rather than any process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the database connection pool.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
