use std::fmt::Display;

use sea_orm::DatabaseConnection;

use crate::{
    data::{player::PlayerRepository, tournament::TournamentRepository},
    error::AppError,
    model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
    service::tournament::tournament_not_found,
};

/// The `NotFound` failure for a missing player.
///
/// The key is the player id or, for name lookups, the searched name.
pub(crate) fn player_not_found(key: impl Display) -> AppError {
    AppError::NotFound(format!("The player with id: {} does not exist!", key))
}

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player inside an existing tournament.
    ///
    /// Fails with the tournament's `NotFound` failure when the referenced tournament
    /// does not exist; nothing is written in that case.
    pub async fn create(
        &self,
        tournament_id: i64,
        params: CreatePlayerParams,
    ) -> Result<Player, AppError> {
        let tournaments = TournamentRepository::new(self.db);

        if !tournaments.exists_by_id(tournament_id).await? {
            return Err(tournament_not_found(tournament_id));
        }

        let player = PlayerRepository::new(self.db)
            .create(tournament_id, params)
            .await?;

        Ok(Player::from_entity(player))
    }

    /// Overwrites an existing player's id and name; the tournament reference is
    /// left untouched.
    ///
    /// Fails with `NotFound` when no player is keyed by `player_id`.
    pub async fn update(
        &self,
        player_id: i64,
        params: UpdatePlayerParams,
    ) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        repo.find_by_id(player_id)
            .await?
            .ok_or_else(|| player_not_found(player_id))?;

        let player = repo.update(player_id, params).await?;

        tracing::info!("Player with id: {} has been updated.", player_id);

        Ok(Player::from_entity(player))
    }

    /// Gets all players whose name matches exactly.
    ///
    /// An empty match set fails with `NotFound`, keyed by the searched name.
    pub async fn get_players_by_name(&self, name: &str) -> Result<Vec<Player>, AppError> {
        let players = PlayerRepository::new(self.db).find_by_name(name).await?;

        if players.is_empty() {
            return Err(player_not_found(name));
        }

        Ok(players.into_iter().map(Player::from_entity).collect())
    }

    /// Gets all players owned by a tournament.
    ///
    /// Fails with the tournament's `NotFound` failure when the tournament does not
    /// exist; an existing tournament with no players yields an empty list.
    pub async fn get_players_by_tournament_id(
        &self,
        tournament_id: i64,
    ) -> Result<Vec<Player>, AppError> {
        self.check_if_tournament_exists(tournament_id).await?;

        let players = PlayerRepository::new(self.db)
            .find_by_tournament_id(tournament_id)
            .await?;

        Ok(players.into_iter().map(Player::from_entity).collect())
    }

    /// Deletes a player.
    ///
    /// Fails with `NotFound` when the player does not exist; nothing is deleted in
    /// that case.
    pub async fn delete(&self, player_id: i64) -> Result<(), AppError> {
        let repo = PlayerRepository::new(self.db);

        if !repo.exists_by_id(player_id).await? {
            return Err(player_not_found(player_id));
        }

        repo.delete_by_id(player_id).await?;

        tracing::info!("The player with id: {} has been deleted!", player_id);

        Ok(())
    }

    async fn check_if_tournament_exists(&self, tournament_id: i64) -> Result<(), AppError> {
        if !TournamentRepository::new(self.db)
            .exists_by_id(tournament_id)
            .await?
        {
            return Err(tournament_not_found(tournament_id));
        }

        Ok(())
    }
}
