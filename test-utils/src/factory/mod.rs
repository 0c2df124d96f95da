//! Factories for inserting test entities with sensible defaults.
//!
//! Each factory provides a builder for creating one entity type with default values that
//! can be overridden per test, plus a shorthand function for the common case.

pub mod helpers;
pub mod player;
pub mod tournament;
