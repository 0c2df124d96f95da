use super::*;

/// Tests fetching an existing tournament with its players.
///
/// Expected: Ok with the owned players attached
#[tokio::test]
async fn returns_tournament_with_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _) = factory::helpers::create_tournament_with_players(db, 2).await?;

    let service = TournamentService::new(db);
    let found = service.get_tournament_by_id(tournament.id).await?;

    assert_eq!(found.id, tournament.id);
    assert_eq!(found.players.len(), 2);

    Ok(())
}

/// Tests fetching a tournament id not present in the store.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_missing_tournament() {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TournamentService::new(db);
    let error = service.get_tournament_by_id(42).await.unwrap_err();

    assert!(matches!(error, AppError::NotFound(_)));
    assert!(error.to_string().contains("42"));
}
