use super::*;

/// Tests the owning-tournament filter.
///
/// Expected: Ok with only the players owned by the requested tournament
#[tokio::test]
async fn returns_players_for_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, players) = factory::helpers::create_tournament_with_players(db, 2).await?;
    factory::helpers::create_tournament_with_players(db, 3).await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_tournament_id(tournament.id).await?;

    assert_eq!(found.len(), players.len());
    assert!(found
        .iter()
        .all(|player| player.tournament_id == tournament.id));

    Ok(())
}

/// Tests the filter for a tournament without players.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_playerless_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::create_tournament(db).await?;

    let repo = PlayerRepository::new(db);
    let found = repo.find_by_tournament_id(tournament.id).await?;

    assert!(found.is_empty());

    Ok(())
}
