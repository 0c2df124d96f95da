use sea_orm::DatabaseConnection;

use crate::{
    data::tournament::TournamentRepository,
    error::AppError,
    model::{
        player::Player,
        tournament::{CreateTournamentParams, Tournament, UpdateTournamentParams},
    },
};

/// The `NotFound` failure for a missing tournament.
///
/// Shared with the player service, which checks tournament existence before
/// creating or listing players.
pub(crate) fn tournament_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("The tournament with id: {} does not exist!", id))
}

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tournament with the caller-supplied id.
    ///
    /// Fails with `InvalidInput` when a tournament with that id already exists;
    /// nothing is written in that case.
    pub async fn create(&self, params: CreateTournamentParams) -> Result<Tournament, AppError> {
        let repo = TournamentRepository::new(self.db);

        if repo.exists_by_id(params.id).await? {
            return Err(AppError::InvalidInput(format!(
                "The tournament is already created with id: {}!",
                params.id
            )));
        }

        let (tournament, players) = repo.create(params).await?;

        Ok(Tournament::from_entity(tournament, players))
    }

    /// Applies the reward amount, and optionally a replacement player set, to an
    /// existing tournament.
    ///
    /// Fails with `NotFound` when the tournament does not exist.
    pub async fn update(
        &self,
        id: i64,
        params: UpdateTournamentParams,
    ) -> Result<Tournament, AppError> {
        let repo = TournamentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| tournament_not_found(id))?;

        let (tournament, players) = repo.update(id, params).await?;

        tracing::info!("The tournament with id: {} has been updated.", id);

        Ok(Tournament::from_entity(tournament, players))
    }

    /// Deletes a tournament and, through the store's cascade contract, the players
    /// it owns.
    ///
    /// Fails with `NotFound` when the tournament does not exist; nothing is deleted
    /// in that case.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let repo = TournamentRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| tournament_not_found(id))?;

        repo.delete_by_id(id).await?;

        tracing::info!("The tournament with id: {} has been deleted!", id);

        Ok(())
    }

    /// Gets all tournaments in store order.
    pub async fn get_tournaments(&self) -> Result<Vec<Tournament>, AppError> {
        let repo = TournamentRepository::new(self.db);

        let tournaments = repo.find_all().await?;

        Ok(tournaments
            .into_iter()
            .map(|(tournament, players)| Tournament::from_entity(tournament, players))
            .collect())
    }

    /// Gets a tournament by id.
    ///
    /// Fails with `NotFound` when the tournament does not exist.
    pub async fn get_tournament_by_id(&self, id: i64) -> Result<Tournament, AppError> {
        let repo = TournamentRepository::new(self.db);

        let (tournament, players) = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| tournament_not_found(id))?;

        Ok(Tournament::from_entity(tournament, players))
    }

    /// Gets the players owned by a tournament, propagating its `NotFound` failure.
    pub async fn get_players(&self, id: i64) -> Result<Vec<Player>, AppError> {
        let tournament = self.get_tournament_by_id(id).await?;

        Ok(tournament.players)
    }
}
