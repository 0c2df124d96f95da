use super::*;

/// Tests the exact-name lookup with matches present.
///
/// Expected: Ok with exactly the matching players
#[tokio::test]
async fn returns_matching_players() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::create_tournament(db).await?;
    factory::player::PlayerFactory::new(db, tournament.id)
        .name("Alice")
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, tournament.id)
        .name("Bob")
        .build()
        .await?;

    let service = PlayerService::new(db);
    let players = service.get_players_by_name("Alice").await?;

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Alice");

    Ok(())
}

/// Tests the exact-name lookup with zero matches.
///
/// An empty match set is a failure on this path, keyed by the searched name.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_zero_matches() {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let error = service.get_players_by_name("Nobody").await.unwrap_err();

    assert!(matches!(error, AppError::NotFound(_)));
    assert!(error.to_string().contains("Nobody"));
}
