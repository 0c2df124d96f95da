use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::player::{CreatePlayerParams, UpdatePlayerParams};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player owned by the given tournament.
    pub async fn create(
        &self,
        tournament_id: i64,
        params: CreatePlayerParams,
    ) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            tournament_id: ActiveValue::Set(tournament_id),
        }
        .insert(self.db)
        .await
    }

    /// Gets a player by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    /// Checks whether a player with the given id exists.
    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all players whose name matches exactly.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .all(self.db)
            .await
    }

    /// Gets all players owned by the given tournament.
    pub async fn find_by_tournament_id(
        &self,
        tournament_id: i64,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::TournamentId.eq(tournament_id))
            .all(self.db)
            .await
    }

    /// Overwrites the id and name of the player currently keyed by `player_id`.
    ///
    /// The tournament reference is never touched by updates. A single UPDATE keyed
    /// by the old id keeps the overwrite well-defined even when the payload carries
    /// a new id.
    pub async fn update(
        &self,
        player_id: i64,
        params: UpdatePlayerParams,
    ) -> Result<entity::player::Model, DbErr> {
        entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::Id, Expr::value(params.id))
            .col_expr(entity::player::Column::Name, Expr::value(params.name))
            .filter(entity::player::Column::Id.eq(player_id))
            .exec(self.db)
            .await?;

        self.find_by_id(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Player with id {} not found after update",
                params.id
            )))
    }

    /// Deletes a player.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
