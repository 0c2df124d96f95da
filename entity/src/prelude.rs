pub use super::player::Entity as Player;
pub use super::tournament::Entity as Tournament;
