use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring in-memory SQLite test
/// environments. Add entity tables in dependency order, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Friend};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Friend)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order: tables with foreign keys
    /// after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for friendship operations: User and Friend.
    pub fn with_friend_tables(self) -> Self {
        self.with_table(User).with_table(Friend)
    }

    /// Adds the tables required for photo operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Friend
    /// - Photo
    /// - PhotoRecipient
    pub fn with_photo_tables(self) -> Self {
        self.with_friend_tables()
            .with_table(Photo)
            .with_table(PhotoRecipient)
    }

    /// Adds the tables required for notification operations, including the
    /// settings table consulted before notifying.
    pub fn with_notification_tables(self) -> Self {
        self.with_table(User)
            .with_table(Notification)
            .with_table(UserSetting)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables created
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
