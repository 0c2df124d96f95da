use super::*;

/// Tests deleting a single player.
///
/// Expected: Ok with only the deleted row removed
#[tokio::test]
async fn deletes_player_leaving_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, players) = factory::helpers::create_tournament_with_players(db, 2).await?;

    let repo = PlayerRepository::new(db);
    repo.delete_by_id(players[0].id).await?;

    assert!(repo.find_by_id(players[0].id).await?.is_none());

    let remaining = entity::prelude::Player::find()
        .filter(entity::player::Column::TournamentId.eq(tournament.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);

    Ok(())
}
