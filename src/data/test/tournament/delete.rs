use super::*;

/// Tests deleting a tournament that owns players.
///
/// Verifies the owned players are removed together with the tournament.
///
/// Expected: Ok with no tournament or player rows remaining
#[tokio::test]
async fn deletes_tournament_and_owned_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _) = factory::helpers::create_tournament_with_players(db, 3).await?;

    let repo = TournamentRepository::new(db);
    repo.delete_by_id(tournament.id).await?;

    let tournaments = entity::prelude::Tournament::find().count(db).await?;
    assert_eq!(tournaments, 0);

    let players = entity::prelude::Player::find().count(db).await?;
    assert_eq!(players, 0);

    Ok(())
}

/// Tests that deleting one tournament leaves unrelated rows alone.
///
/// Expected: Ok with the other tournament and its players intact
#[tokio::test]
async fn leaves_other_tournaments_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doomed, _) = factory::helpers::create_tournament_with_players(db, 1).await?;
    let (kept, _) = factory::helpers::create_tournament_with_players(db, 2).await?;

    let repo = TournamentRepository::new(db);
    repo.delete_by_id(doomed.id).await?;

    let remaining = entity::prelude::Player::find()
        .filter(entity::player::Column::TournamentId.eq(kept.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 2);

    Ok(())
}
