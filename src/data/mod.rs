//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each domain in the application. Repositories use SeaORM entity models internally and
//! contain no business rules; existence checks and error translation live in the
//! service layer.

pub mod player;
pub mod tournament;

#[cfg(test)]
mod test;
