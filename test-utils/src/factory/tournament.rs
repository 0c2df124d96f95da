//! Tournament factory for creating test tournament entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tournaments with customizable fields.
///
/// Provides a builder pattern for creating tournament entities with default values
/// that can be overridden as needed for specific test scenarios. Default values are
/// sourced from the tournament fixture, with a unique auto-incremented id to prevent
/// conflicts when creating multiple tournaments.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::tournament::TournamentFactory;
///
/// let tournament = TournamentFactory::new(&db)
///     .id(42)
///     .reward_amount(500)
///     .build()
///     .await?;
/// ```
pub struct TournamentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tournament::Model,
}

impl<'a> TournamentFactory<'a> {
    /// Creates a new TournamentFactory with default values from the fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let mut entity = fixture::tournament::model();
        entity.id = next_id() as i64;

        Self { db, entity }
    }

    /// Sets the tournament id.
    pub fn id(mut self, id: i64) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the reward amount.
    pub fn reward_amount(mut self, reward_amount: i32) -> Self {
        self.entity.reward_amount = reward_amount;
        self
    }

    /// Builds and inserts the tournament entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tournament::Model)` - Created tournament entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tournament::Model, DbErr> {
        entity::tournament::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            reward_amount: ActiveValue::Set(self.entity.reward_amount),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tournament with default values.
///
/// Shorthand for `TournamentFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let tournament = create_tournament(&db).await?;
/// ```
pub async fn create_tournament(db: &DatabaseConnection) -> Result<entity::tournament::Model, DbErr> {
    TournamentFactory::new(db).build().await
}
