//! Tournament fixtures for creating in-memory test data.

use entity::tournament;

/// Default reward amount for test tournaments.
pub const DEFAULT_REWARD_AMOUNT: i32 = 100;

/// Returns a tournament model with default values.
///
/// The model is not persisted; use the tournament factory to insert a row.
pub fn model() -> tournament::Model {
    tournament::Model {
        id: 1,
        reward_amount: DEFAULT_REWARD_AMOUNT,
    }
}
