//! SeaORM entity definitions for the arenaboard schema.

pub mod player;
pub mod prelude;
pub mod tournament;
