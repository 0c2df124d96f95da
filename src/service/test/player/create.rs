use super::*;

/// Tests creating a player inside an existing tournament.
///
/// Verifies the stored player references the tournament and that exactly one
/// row was inserted.
///
/// Expected: Ok with the assigned id and owning tournament set
#[tokio::test]
async fn creates_player_in_existing_tournament() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::tournament::create_tournament(db).await?;

    let service = PlayerService::new(db);
    let player = service
        .create(
            tournament.id,
            CreatePlayerParams {
                name: "Tester".to_string(),
            },
        )
        .await?;

    assert!(player.id > 0);
    assert_eq!(player.name, "Tester");
    assert_eq!(player.tournament_id, tournament.id);

    let players = entity::prelude::Player::find().count(db).await?;
    assert_eq!(players, 1);

    Ok(())
}

/// Tests creating a player against a tournament id not present in the store.
///
/// Verifies the failure is the tournament's `NotFound` and that no player row
/// is written.
///
/// Expected: Err(AppError::NotFound) and an empty player table
#[tokio::test]
async fn fails_with_not_found_for_missing_tournament() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PlayerService::new(db);
    let error = service
        .create(
            42,
            CreatePlayerParams {
                name: "Tester".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(error, AppError::NotFound(_)));
    assert!(error.to_string().contains("tournament"));

    let players = entity::prelude::Player::find().count(db).await?;
    assert_eq!(players, 0);

    Ok(())
}
