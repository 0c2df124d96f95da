//! Player fixtures for creating in-memory test data.

use entity::player;

/// Default name for test players.
pub const DEFAULT_NAME: &str = "Test Player";

/// Returns a player model with default values.
///
/// The model is not persisted; use the player factory to insert a row.
pub fn model() -> player::Model {
    player::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        tournament_id: 1,
    }
}
