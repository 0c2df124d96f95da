use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::tournament::{CreateTournamentParams, UpdateTournamentParams};

/// Rows composing one tournament: the record itself and its owned players.
pub type TournamentWithPlayers = (entity::tournament::Model, Vec<entity::player::Model>);

pub struct TournamentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tournament with the caller-supplied id, inserting any player drafts
    /// as owned players.
    pub async fn create(
        &self,
        params: CreateTournamentParams,
    ) -> Result<TournamentWithPlayers, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            id: ActiveValue::Set(params.id),
            reward_amount: ActiveValue::Set(params.reward_amount),
        }
        .insert(self.db)
        .await?;

        let mut players = Vec::with_capacity(params.players.len());
        for draft in params.players {
            let player = entity::player::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(draft.name),
                tournament_id: ActiveValue::Set(tournament.id),
            }
            .insert(self.db)
            .await?;
            players.push(player);
        }

        Ok((tournament, players))
    }

    /// Gets a tournament by id together with its owned players.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<TournamentWithPlayers>, DbErr> {
        let result = entity::prelude::Tournament::find_by_id(id)
            .find_with_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        Ok(result.into_iter().next())
    }

    /// Checks whether a tournament with the given id exists.
    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Tournament::find()
            .filter(entity::tournament::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all tournaments together with their owned players, in store order.
    pub async fn find_all(&self) -> Result<Vec<TournamentWithPlayers>, DbErr> {
        entity::prelude::Tournament::find()
            .find_with_related(entity::prelude::Player)
            .all(self.db)
            .await
    }

    /// Updates a tournament's reward amount and optionally replaces its player set.
    ///
    /// A `Some` player list removes the existing owned players and inserts the drafts
    /// in their place; `None` leaves the player set untouched.
    pub async fn update(
        &self,
        id: i64,
        params: UpdateTournamentParams,
    ) -> Result<TournamentWithPlayers, DbErr> {
        let tournament = entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Tournament with id {} not found",
                id
            )))?;

        let mut active_model: entity::tournament::ActiveModel = tournament.into();
        active_model.reward_amount = ActiveValue::Set(params.reward_amount);
        let tournament = active_model.update(self.db).await?;

        if let Some(drafts) = params.players {
            entity::prelude::Player::delete_many()
                .filter(entity::player::Column::TournamentId.eq(id))
                .exec(self.db)
                .await?;

            for draft in drafts {
                entity::player::ActiveModel {
                    id: ActiveValue::NotSet,
                    name: ActiveValue::Set(draft.name),
                    tournament_id: ActiveValue::Set(id),
                }
                .insert(self.db)
                .await?;
            }
        }

        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::TournamentId.eq(id))
            .all(self.db)
            .await?;

        Ok((tournament, players))
    }

    /// Deletes a tournament and the players it owns.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Player::delete_many()
            .filter(entity::player::Column::TournamentId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Tournament::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
