use super::*;

/// Tests listing every tournament in the store.
///
/// Expected: Ok with one entry per tournament
#[tokio::test]
async fn returns_all_tournaments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tournament::create_tournament(db).await?;
    factory::helpers::create_tournament_with_players(db, 1).await?;

    let service = TournamentService::new(db);
    let tournaments = service.get_tournaments().await?;

    assert_eq!(tournaments.len(), 2);

    Ok(())
}

/// Tests listing against an empty store.
///
/// Expected: Ok with an empty list, not a failure
#[tokio::test]
async fn returns_empty_list_for_empty_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TournamentService::new(db);
    let tournaments = service.get_tournaments().await?;

    assert!(tournaments.is_empty());

    Ok(())
}
