//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Provides a builder pattern for creating player entities owned by an existing
/// tournament. Names default to a unique value per factory instance so lookups by
/// name stay unambiguous across tests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db, tournament.id)
///     .name("Tester")
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tournament_id: i64,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory for the given owning tournament.
    pub fn new(db: &'a DatabaseConnection, tournament_id: i64) -> Self {
        Self {
            db,
            name: format!("Player {}", next_id()),
            tournament_id,
        }
    }

    /// Sets the player name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            tournament_id: ActiveValue::Set(self.tournament_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values in the specified tournament.
///
/// Shorthand for `PlayerFactory::new(db, tournament_id).build().await`.
pub async fn create_player(
    db: &DatabaseConnection,
    tournament_id: i64,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, tournament_id).build().await
}
