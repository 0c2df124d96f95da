use sea_orm_migration::{prelude::*, schema::*};

use super::m20260322_000001_create_tournament_table::Tournament;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(big_integer(Player::TournamentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_tournament_id")
                            .from(Player::Table, Player::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    TournamentId,
}
