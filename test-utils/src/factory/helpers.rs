//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a tournament together with a number of owned players.
///
/// Convenience method for tests that need a populated tournament without caring
/// about individual player values.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_count` - Number of players to insert into the tournament
///
/// # Returns
/// - `Ok((tournament, players))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tournament_with_players(
    db: &DatabaseConnection,
    player_count: usize,
) -> Result<(entity::tournament::Model, Vec<entity::player::Model>), DbErr> {
    let tournament = crate::factory::tournament::create_tournament(db).await?;

    let mut players = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        players.push(crate::factory::player::create_player(db, tournament.id).await?);
    }

    Ok((tournament, players))
}
