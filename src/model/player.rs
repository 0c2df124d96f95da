//! Player domain models, DTOs, and operation parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, model::tournament::ID_REQUIRED_MESSAGE};

/// Validation message for a missing or blank player name.
pub const NAME_REQUIRED_MESSAGE: &str = "The name object is required!";

/// Validation message for a missing tournament reference on a player payload.
pub const TOURNAMENT_REQUIRED_MESSAGE: &str = "The tournament object is required!";

/// A player owned by exactly one tournament.
///
/// Carries the owning tournament's id only; the tournament itself is resolved by
/// lookup, never held as a live reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub tournament_id: i64,
}

impl Player {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            name: player.name,
            tournament_id: player.tournament_id,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            tournament_id: self.tournament_id,
        }
    }
}

/// Player shape returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: i64,
    pub name: String,
    pub tournament_id: i64,
}

/// Reference to an existing tournament carried inside player payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TournamentRefDto {
    pub id: Option<i64>,
}

/// Request body for creating a player inside an existing tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerDto {
    pub name: Option<String>,
    pub tournament: Option<TournamentRefDto>,
}

/// Request body for updating a player.
///
/// The id selects the record to update and is also written back to it; the
/// tournament reference is required by validation but never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlayerDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub tournament: Option<TournamentRefDto>,
}

/// A player draft carried inside tournament create/update payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDraftDto {
    pub name: Option<String>,
}

/// Validated input for `PlayerService::create`.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub name: String,
}

/// Validated input for `PlayerService::update`.
#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub id: i64,
    pub name: String,
}

/// Validated player draft owned by a tournament payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraft {
    pub name: String,
}

impl CreatePlayerDto {
    /// Validates the payload and converts it to service parameters.
    ///
    /// # Returns
    /// - `Ok((tournament_id, CreatePlayerParams))` - All field constraints hold
    /// - `Err(AppError::Validation)` - One message per violated field
    pub fn into_params(self) -> Result<(i64, CreatePlayerParams), AppError> {
        let mut messages = Vec::new();

        let name = self.name.filter(|name| !name.trim().is_empty());
        if name.is_none() {
            messages.push(NAME_REQUIRED_MESSAGE.to_string());
        }

        let tournament_id = self.tournament.and_then(|tournament| tournament.id);
        if tournament_id.is_none() {
            messages.push(TOURNAMENT_REQUIRED_MESSAGE.to_string());
        }

        match (name, tournament_id) {
            (Some(name), Some(tournament_id)) => {
                Ok((tournament_id, CreatePlayerParams { name }))
            }
            _ => Err(AppError::Validation(messages)),
        }
    }
}

impl UpdatePlayerDto {
    /// Validates the payload and converts it to service parameters.
    ///
    /// The returned id doubles as the lookup key for the record to update.
    ///
    /// # Returns
    /// - `Ok((player_id, UpdatePlayerParams))` - All field constraints hold
    /// - `Err(AppError::Validation)` - One message per violated field
    pub fn into_params(self) -> Result<(i64, UpdatePlayerParams), AppError> {
        let mut messages = Vec::new();

        if self.id.is_none() {
            messages.push(ID_REQUIRED_MESSAGE.to_string());
        }

        let name = self.name.filter(|name| !name.trim().is_empty());
        if name.is_none() {
            messages.push(NAME_REQUIRED_MESSAGE.to_string());
        }

        if self.tournament.as_ref().and_then(|t| t.id).is_none() {
            messages.push(TOURNAMENT_REQUIRED_MESSAGE.to_string());
        }

        match (self.id, name) {
            (Some(id), Some(name)) if messages.is_empty() => {
                Ok((id, UpdatePlayerParams { id, name }))
            }
            _ => Err(AppError::Validation(messages)),
        }
    }
}

impl PlayerDraftDto {
    /// Validates the draft, pushing one message per violated field.
    pub(crate) fn into_draft(self, messages: &mut Vec<String>) -> Option<PlayerDraft> {
        match self.name.filter(|name| !name.trim().is_empty()) {
            Some(name) => Some(PlayerDraft { name }),
            None => {
                messages.push(NAME_REQUIRED_MESSAGE.to_string());
                None
            }
        }
    }
}
