use super::*;

/// Tests overwriting an existing player's name.
///
/// Expected: Ok with the new name and the tournament reference untouched
#[tokio::test]
async fn overwrites_name_keeping_tournament() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, players) = factory::helpers::create_tournament_with_players(db, 1).await?;
    let player = &players[0];

    let service = PlayerService::new(db);
    let updated = service
        .update(
            player.id,
            UpdatePlayerParams {
                id: player.id,
                name: "Renamed".to_string(),
            },
        )
        .await?;

    assert_eq!(updated.id, player.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.tournament_id, tournament.id);

    Ok(())
}

/// Tests updating a player id not present in the store.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_missing_player() {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let error = service
        .update(
            42,
            UpdatePlayerParams {
                id: 42,
                name: "Nobody".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(error, AppError::NotFound(_)));
    assert!(error.to_string().contains("player"));
}
