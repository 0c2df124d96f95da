use super::*;

/// Tests fetching the players owned by an existing tournament.
///
/// Expected: Ok with every owned player
#[tokio::test]
async fn returns_owned_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, players) = factory::helpers::create_tournament_with_players(db, 3).await?;

    let service = TournamentService::new(db);
    let found = service.get_players(tournament.id).await?;

    assert_eq!(found.len(), players.len());
    assert!(found
        .iter()
        .all(|player| player.tournament_id == tournament.id));

    Ok(())
}

/// Tests fetching players for a tournament id not present in the store.
///
/// Expected: Err(AppError::NotFound), propagated from the tournament lookup
#[tokio::test]
async fn propagates_not_found_for_missing_tournament() {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TournamentService::new(db);
    let error = service.get_players(42).await.unwrap_err();

    assert!(matches!(error, AppError::NotFound(_)));
}
