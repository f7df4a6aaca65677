//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment holding an in-memory SQLite database and a session store.
///
/// ```ignore
/// let test = TestBuilder::new().with_timer_tables().build().await?;
///
/// let (user, character) = test.user().insert_user_with_mock_character(1, 1, None).await?;
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session used when calling controllers directly
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type constructible from it.
    ///
    /// Lets tests build the service's `AppState` without this crate depending on the
    /// service crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
