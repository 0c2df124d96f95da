//! Tournament domain models, DTOs, and operation parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    model::player::{Player, PlayerDraft, PlayerDraftDto, PlayerDto},
};

/// Validation message for a missing caller-supplied id.
pub const ID_REQUIRED_MESSAGE: &str = "The id object is required!";

/// Validation message for a missing or non-positive reward amount.
pub const REWARD_AMOUNT_MESSAGE: &str = "The reward object amount must be greater than 0!";

/// A tournament with its owned players.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i64,
    pub reward_amount: i32,
    pub players: Vec<Player>,
}

impl Tournament {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(
        tournament: entity::tournament::Model,
        players: Vec<entity::player::Model>,
    ) -> Self {
        Self {
            id: tournament.id,
            reward_amount: tournament.reward_amount,
            players: players.into_iter().map(Player::from_entity).collect(),
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> TournamentDto {
        TournamentDto {
            id: self.id,
            reward_amount: self.reward_amount,
            players: self.players.into_iter().map(Player::into_dto).collect(),
        }
    }
}

/// Tournament shape returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TournamentDto {
    pub id: i64,
    pub reward_amount: i32,
    pub players: Vec<PlayerDto>,
}

/// Request body for creating a tournament.
///
/// The id is supplied by the caller and checked for uniqueness by the service;
/// optional player drafts are persisted as owned players of the new tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTournamentDto {
    pub id: Option<i64>,
    pub reward_amount: Option<i32>,
    pub players: Option<Vec<PlayerDraftDto>>,
}

/// Request body for updating a tournament.
///
/// Omitting `players` leaves the owned player set untouched; supplying a list
/// replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTournamentDto {
    pub reward_amount: Option<i32>,
    pub players: Option<Vec<PlayerDraftDto>>,
}

/// Validated input for `TournamentService::create`.
#[derive(Debug, Clone)]
pub struct CreateTournamentParams {
    pub id: i64,
    pub reward_amount: i32,
    pub players: Vec<PlayerDraft>,
}

/// Validated input for `TournamentService::update`.
#[derive(Debug, Clone)]
pub struct UpdateTournamentParams {
    pub reward_amount: i32,
    pub players: Option<Vec<PlayerDraft>>,
}

impl CreateTournamentDto {
    /// Validates the payload and converts it to service parameters.
    ///
    /// # Returns
    /// - `Ok(CreateTournamentParams)` - All field constraints hold
    /// - `Err(AppError::Validation)` - One message per violated field
    pub fn into_params(self) -> Result<CreateTournamentParams, AppError> {
        let mut messages = Vec::new();

        if self.id.is_none() {
            messages.push(ID_REQUIRED_MESSAGE.to_string());
        }

        let reward_amount = self.reward_amount.unwrap_or(0);
        if reward_amount <= 0 {
            messages.push(REWARD_AMOUNT_MESSAGE.to_string());
        }

        let players: Vec<PlayerDraft> = self
            .players
            .unwrap_or_default()
            .into_iter()
            .filter_map(|draft| draft.into_draft(&mut messages))
            .collect();

        match self.id {
            Some(id) if messages.is_empty() => Ok(CreateTournamentParams {
                id,
                reward_amount,
                players,
            }),
            _ => Err(AppError::Validation(messages)),
        }
    }
}

impl UpdateTournamentDto {
    /// Validates the payload and converts it to service parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateTournamentParams)` - All field constraints hold
    /// - `Err(AppError::Validation)` - One message per violated field
    pub fn into_params(self) -> Result<UpdateTournamentParams, AppError> {
        let mut messages = Vec::new();

        let reward_amount = self.reward_amount.unwrap_or(0);
        if reward_amount <= 0 {
            messages.push(REWARD_AMOUNT_MESSAGE.to_string());
        }

        let players = self.players.map(|drafts| {
            drafts
                .into_iter()
                .filter_map(|draft| draft.into_draft(&mut messages))
                .collect()
        });

        if messages.is_empty() {
            Ok(UpdateTournamentParams {
                reward_amount,
                players,
            })
        } else {
            Err(AppError::Validation(messages))
        }
    }
}
