use super::*;

/// Tests listing all tournaments together with their players.
///
/// Expected: Ok with one entry per tournament and the owned players attached
#[tokio::test]
async fn returns_all_tournaments_with_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (populated, _) = factory::helpers::create_tournament_with_players(db, 1).await?;
    let empty = factory::tournament::create_tournament(db).await?;

    let repo = TournamentRepository::new(db);
    let tournaments = repo.find_all().await?;

    assert_eq!(tournaments.len(), 2);

    let with_players = tournaments
        .iter()
        .find(|(tournament, _)| tournament.id == populated.id)
        .unwrap();
    assert_eq!(with_players.1.len(), 1);

    let without_players = tournaments
        .iter()
        .find(|(tournament, _)| tournament.id == empty.id)
        .unwrap();
    assert!(without_players.1.is_empty());

    Ok(())
}

/// Tests listing when the store is empty.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_when_store_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let tournaments = repo.find_all().await?;

    assert!(tournaments.is_empty());

    Ok(())
}
